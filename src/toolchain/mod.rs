//! Toolchain discovery and provisioning
//!
//! Finding `make`/`g++` on the search path, and installing or removing them
//! through the host's package manager when asked.

pub mod install;
pub mod probe;
pub mod types;

pub use install::{CommandRunner, SystemRunner, execute_plan, plan_install, uninstall_tool};
pub use probe::{PathProbe, ToolLocator, is_tool_installed};
pub use types::{CommandError, InstallPlan, OsKind, PackageCommand, ProvisionOutcome};
