//! `cppinit <name>` handler
//!
//! Provisions the toolchain, then writes the project files.

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::Settings;
use crate::net::ConnectivityProbe;
use crate::scaffold::{self, ExistingAction, ScaffoldOutcome};
use crate::toolchain::{OsKind, PathProbe, SystemRunner};
use crate::ui;

use super::provision::{OFFLINE_MESSAGE, ProgressMode, Provisioner};

/// Exit status of a `cppinit <name>` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewStatus {
    Created,
    Cancelled,
    Offline,
}

/// Install missing tools from `settings.tools` using the real system.
///
/// Returns `false` when a missing tool could not be installed because the
/// network is down.
pub fn provision_system_tools(settings: &Settings) -> bool {
    let locator = PathProbe::new();
    let network = ConnectivityProbe::from_config(&settings.connectivity);
    let mut runner = SystemRunner;
    let mut provisioner = Provisioner {
        os: OsKind::current(),
        locator: &locator,
        network: &network,
        runner: &mut runner,
        interval: settings.progress.interval(),
        progress: ProgressMode::Terminal,
    };

    match provisioner.ensure_tools(&settings.tools) {
        Ok(report) => {
            log::info!("provisioned {} tool(s)", report.len());
            true
        }
        Err(e) => {
            log::info!("{}", e);
            false
        }
    }
}

/// Run the full `cppinit <name>` flow in the current directory.
pub fn run(settings: &Settings, name: &str, install_tools: bool) -> Result<NewStatus> {
    if install_tools && !provision_system_tools(settings) {
        eprintln!("{}", OFFLINE_MESSAGE.red());
        return Ok(NewStatus::Offline);
    }

    create(Path::new("."), name, prompt_existing)
}

/// Write the project under `root`, asking `on_existing` if it is already there.
pub fn create(
    root: &Path,
    name: &str,
    on_existing: impl FnOnce(&Path) -> ExistingAction,
) -> Result<NewStatus> {
    match scaffold::create_project(root, name, on_existing)? {
        ScaffoldOutcome::Created(_) => {
            println!(
                "{} C++ project successfully created in the '{}' directory!",
                "✓".green(),
                name
            );
            Ok(NewStatus::Created)
        }
        ScaffoldOutcome::Cancelled => {
            println!("{} Project creation cancelled.", "→".dimmed());
            Ok(NewStatus::Cancelled)
        }
    }
}

fn prompt_existing(dir: &Path) -> ExistingAction {
    let name = dir
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string());
    let question = format!(
        "The project '{}' already exists. Do you want to override (O) or cancel (C)? [default: C]:",
        name
    );
    match ui::ask(&question, "C") {
        Ok(answer) => ExistingAction::from_answer(&answer),
        Err(e) => {
            log::warn!("{:#}", e);
            ExistingAction::Cancel
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reports_created() {
        let root = tempfile::tempdir().unwrap();
        let status = create(root.path(), "demo", |_| ExistingAction::Cancel).unwrap();
        assert_eq!(status, NewStatus::Created);
        assert!(root.path().join("demo").join("Makefile").exists());
    }

    #[test]
    fn test_create_reports_cancelled() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("demo")).unwrap();
        let status = create(root.path(), "demo", |_| ExistingAction::Cancel).unwrap();
        assert_eq!(status, NewStatus::Cancelled);
    }

    #[test]
    fn test_create_rejects_invalid_name() {
        let root = tempfile::tempdir().unwrap();
        assert!(create(root.path(), "../escape", |_| ExistingAction::Override).is_err());
    }
}
