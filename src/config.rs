//! Settings for the provisioning workflow (`~/.cppinit/config.toml`).
//!
//! Every key is optional; anything missing falls back to the built-in default.
//!
//! ```toml
//! tools = ["make", "g++"]
//!
//! [connectivity]
//! endpoint = "https://github.com"
//! timeout_secs = 5
//!
//! [progress]
//! interval_ms = 200
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Executables every generated project needs.
    pub tools: Vec<String>,
    pub connectivity: ConnectivityConfig,
    pub progress: ProgressConfig,
    pub author: AuthorConfig,
    #[serde(skip)]
    pub version: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ConnectivityConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    pub interval_ms: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub website: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tools: vec!["make".to_string(), "g++".to_string()],
            connectivity: ConnectivityConfig::default(),
            progress: ProgressConfig::default(),
            author: AuthorConfig::default(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://github.com".to_string(),
            timeout_secs: 5,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self { interval_ms: 200 }
    }
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "Kaan Ergun".to_string(),
            website: "https://kaanergun.com/".to_string(),
        }
    }
}

impl ConnectivityConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ProgressConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when `path` is `None`.
    ///
    /// A missing default file is not an error. An explicitly requested file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => {
                let default_path = default_config_path();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    log::debug!("no settings file at {}", default_path.display());
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::parse(&contents)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        log::debug!("loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let mut settings: Settings = toml::from_str(contents)?;
        settings.version = env!("CARGO_PKG_VERSION").to_string();
        Ok(settings)
    }
}

/// `~/.cppinit/config.toml`
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cppinit")
        .join("config.toml")
}
