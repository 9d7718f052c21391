//! # cppinit - C++ project bootstrapper
//!
//! Writes a `main.cpp` and a `Makefile` into a fresh directory and makes sure
//! the tools needed to build it (`make`, `g++`) are installed, using the
//! system package manager when they are not.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a new project (installs make/g++ if missing)
//! cppinit hello
//!
//! # Remove the installed tools again
//! cppinit-uninstall
//! ```
//!
//! ## Module Organization
//!
//! - [`toolchain`] - Tool lookup and package-manager install/uninstall
//! - [`net`] - Connectivity check before downloads
//! - [`ui`] - Spinner and prompts
//! - [`scaffold`] - Project directory creation
//! - [`commands`] - CLI command handlers

/// Command-line definitions for both binaries.
pub mod cli;

/// CLI command handlers.
pub mod commands;

/// Settings file parsing (`~/.cppinit/config.toml`).
pub mod config;

/// Network reachability probe.
pub mod net;

/// Project directory creation.
pub mod scaffold;

/// Source and Makefile templates.
pub mod templates;

/// Toolchain detection and installation.
pub mod toolchain;

/// Terminal UI utilities (spinner, prompts).
pub mod ui;
