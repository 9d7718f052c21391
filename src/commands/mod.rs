//! CLI Command handlers
//!
//! This module contains the handlers behind the `cppinit` and
//! `cppinit-uninstall` binaries.

pub mod new;
pub mod provision;
pub mod uninstall;
