//! Executable lookup on the search path.
//!
//! Resolution is done in-process with the `which` crate, so probing never
//! spawns a child process.

use std::ffi::OsString;
use std::path::PathBuf;

/// Answers "would this name run if typed at a shell?".
pub trait ToolLocator {
    fn is_installed(&self, name: &str) -> bool;
}

/// Looks tools up on `PATH`, or on an explicit search path.
#[derive(Debug, Clone, Default)]
pub struct PathProbe {
    search_path: Option<OsString>,
}

impl PathProbe {
    /// Probe against the process `PATH`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe against `search_path` instead of the process `PATH`.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Absolute path `name` resolves to, if any.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        let found = match &self.search_path {
            None => which::which(name),
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(name, Some(paths), cwd)
            }
        };
        found.ok()
    }
}

impl ToolLocator for PathProbe {
    fn is_installed(&self, name: &str) -> bool {
        let path = self.locate(name);
        log::debug!("probe {}: {:?}", name, path);
        path.is_some()
    }
}

/// Check `name` against the process `PATH`.
pub fn is_tool_installed(name: &str) -> bool {
    PathProbe::new().is_installed(name)
}
