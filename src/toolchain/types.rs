use std::fmt;

/// Host platform families the installer knows how to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsKind {
    /// apt-based Linux distributions
    Linux,
    /// macOS with Homebrew
    MacOs,
    /// Windows (manual installation only)
    Windows,
    /// Anything else, carrying the platform name for messages
    Other(String),
}

impl OsKind {
    /// Platform the binary is running on.
    pub fn current() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "linux" => OsKind::Linux,
            "macos" | "darwin" => OsKind::MacOs,
            "windows" => OsKind::Windows,
            _ => OsKind::Other(name.to_string()),
        }
    }

    /// Package that provides `tool` on this platform.
    ///
    /// Homebrew ships `g++` as part of the `gcc` formula.
    pub fn package_name<'a>(&self, tool: &'a str) -> &'a str {
        match (self, tool) {
            (OsKind::MacOs, "g++") => "gcc",
            _ => tool,
        }
    }
}

impl fmt::Display for OsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsKind::Linux => write!(f, "Linux"),
            OsKind::MacOs => write!(f, "Darwin"),
            OsKind::Windows => write!(f, "Windows"),
            OsKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A single package-manager invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PackageCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Run through `sudo`.
    pub fn elevated(program: &str, args: &[&str]) -> Self {
        let mut full = vec![program];
        full.extend_from_slice(args);
        Self::new("sudo", &full)
    }

    pub fn is_elevated(&self) -> bool {
        self.program == "sudo"
    }
}

impl fmt::Display for PackageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// What the installer decided to do for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallPlan {
    /// Run these commands in order, after showing `notice` if there is one.
    Commands {
        commands: Vec<PackageCommand>,
        notice: Option<String>,
    },
    /// Nothing can be run automatically; tell the user what to do.
    Manual(String),
}

impl InstallPlan {
    pub fn commands(commands: Vec<PackageCommand>) -> Self {
        InstallPlan::Commands {
            commands,
            notice: None,
        }
    }

    /// Message to show before the commands run.
    pub fn notice(&self) -> Option<&str> {
        match self {
            InstallPlan::Commands { notice, .. } => notice.as_deref(),
            InstallPlan::Manual(_) => None,
        }
    }

    /// True if any command goes through `sudo`.
    pub fn needs_elevation(&self) -> bool {
        match self {
            InstallPlan::Commands { commands, .. } => commands.iter().any(|c| c.is_elevated()),
            InstallPlan::Manual(_) => false,
        }
    }
}

/// Why a package-manager command did not succeed.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {}", describe_code(.code))]
    ExitStatus { command: String, code: Option<i32> },
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Result of installing or removing one tool.
#[derive(Debug)]
pub enum ProvisionOutcome {
    /// Every planned command exited successfully.
    Completed,
    /// No command was run; the user has to act.
    ManualActionRequired(String),
    /// At least one command failed. The remaining commands still ran.
    CommandFailed(Vec<CommandError>),
}

impl ProvisionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ProvisionOutcome::Completed)
    }
}
