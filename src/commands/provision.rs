//! Toolchain provisioning driver
//!
//! For each required tool: probe, check connectivity if it is missing, then
//! install it behind a spinner. One pass, no retries.

use colored::*;
use std::time::Duration;

use crate::net::Reachability;
use crate::toolchain::{
    CommandRunner, OsKind, PackageCommand, ProvisionOutcome, ToolLocator, execute_plan,
    plan_install,
};
use crate::ui;

pub const OFFLINE_MESSAGE: &str = "Error: No internet connection detected. Please ensure you are connected to the internet and try again.";

#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("No internet connection detected while '{tool}' is missing")]
    Offline { tool: String },
}

/// How the install spinner is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressMode {
    Terminal,
    Hidden,
}

/// Everything the driver talks to, passed in so it can run against fakes.
pub struct Provisioner<'a> {
    pub os: OsKind,
    pub locator: &'a dyn ToolLocator,
    pub network: &'a dyn Reachability,
    pub runner: &'a mut dyn CommandRunner,
    pub interval: Duration,
    pub progress: ProgressMode,
}

/// What happened to one tool.
#[derive(Debug)]
pub enum ToolStatus {
    AlreadyInstalled,
    Installed(ProvisionOutcome),
}

impl Provisioner<'_> {
    /// Make sure every tool in `tools` is on the search path.
    ///
    /// Returns [`ProvisionError::Offline`] as soon as a missing tool cannot be
    /// downloaded. Failed package-manager commands are reported but not fatal.
    pub fn ensure_tools(
        &mut self,
        tools: &[String],
    ) -> Result<Vec<(String, ToolStatus)>, ProvisionError> {
        let mut report = Vec::with_capacity(tools.len());
        for tool in tools {
            let status = self.ensure_tool(tool)?;
            report.push((tool.clone(), status));
        }
        Ok(report)
    }

    fn ensure_tool(&mut self, tool: &str) -> Result<ToolStatus, ProvisionError> {
        if self.locator.is_installed(tool) {
            log::debug!("{} already installed", tool);
            return Ok(ToolStatus::AlreadyInstalled);
        }

        if !self.network.is_reachable() {
            return Err(ProvisionError::Offline {
                tool: tool.to_string(),
            });
        }

        println!("'{}' is not installed. Installing now...", tool);
        let outcome = self.install_with_progress(tool);
        self.report(tool, &outcome);
        Ok(ToolStatus::Installed(outcome))
    }

    fn install_with_progress(&mut self, tool: &str) -> ProvisionOutcome {
        let plan = plan_install(&self.os, tool, self.locator);
        log::debug!("install plan for {} on {}: {:?}", tool, self.os, plan);
        if let Some(notice) = plan.notice() {
            println!("{}", notice);
        }

        match self.progress {
            ProgressMode::Terminal => {
                // Ask for the sudo password now so the spinner does not draw over it.
                if plan.needs_elevation() {
                    let refresh = PackageCommand::new("sudo", &["-v"]);
                    if let Err(e) = self.runner.run(&refresh) {
                        log::warn!("{}", e);
                        println!("{} {}", "!".yellow(), e);
                    }
                }
                let runner = &mut *self.runner;
                ui::with_progress(&format!("Installing {}", tool), self.interval, || {
                    execute_plan(&plan, runner)
                })
            }
            ProgressMode::Hidden => execute_plan(&plan, &mut *self.runner),
        }
    }

    fn report(&self, tool: &str, outcome: &ProvisionOutcome) {
        match outcome {
            ProvisionOutcome::ManualActionRequired(instructions) => {
                println!("{} {}", "!".yellow(), instructions);
            }
            ProvisionOutcome::CommandFailed(failures) => {
                println!(
                    "{} {} command(s) failed while installing '{}'",
                    "!".yellow(),
                    failures.len(),
                    tool
                );
            }
            ProvisionOutcome::Completed => {}
        }

        // An aborted install (denied sudo, unknown package) still lets us continue.
        if !matches!(outcome, ProvisionOutcome::ManualActionRequired(_))
            && !self.locator.is_installed(tool)
        {
            log::warn!("{} still missing after install", tool);
            println!(
                "{} '{}' is still not available on PATH; continuing anyway.",
                "!".yellow(),
                tool
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::install::testing::{FakeLocator, RecordingRunner};
    use std::cell::Cell;

    struct FakeNetwork {
        online: bool,
        calls: Cell<usize>,
    }

    impl FakeNetwork {
        fn new(online: bool) -> Self {
            Self {
                online,
                calls: Cell::new(0),
            }
        }
    }

    impl Reachability for FakeNetwork {
        fn is_reachable(&self) -> bool {
            self.calls.set(self.calls.get() + 1);
            self.online
        }
    }

    fn tools() -> Vec<String> {
        vec!["make".to_string(), "g++".to_string()]
    }

    fn provisioner<'a>(
        os: OsKind,
        locator: &'a FakeLocator,
        network: &'a FakeNetwork,
        runner: &'a mut RecordingRunner,
    ) -> Provisioner<'a> {
        Provisioner {
            os,
            locator,
            network,
            runner,
            interval: Duration::from_millis(5),
            progress: ProgressMode::Hidden,
        }
    }

    #[test]
    fn test_present_tools_skip_network_and_install() {
        let locator = FakeLocator::with(&["make", "g++"]);
        let network = FakeNetwork::new(false);
        let mut runner = RecordingRunner::default();

        let report = provisioner(OsKind::Linux, &locator, &network, &mut runner)
            .ensure_tools(&tools())
            .unwrap();

        assert_eq!(report.len(), 2);
        assert!(
            report
                .iter()
                .all(|(_, s)| matches!(s, ToolStatus::AlreadyInstalled))
        );
        assert_eq!(network.calls.get(), 0);
        assert!(runner.commands.is_empty());
    }

    #[test]
    fn test_offline_aborts_before_any_command() {
        let locator = FakeLocator::with(&["make"]);
        let network = FakeNetwork::new(false);
        let mut runner = RecordingRunner::default();

        let err = provisioner(OsKind::Linux, &locator, &network, &mut runner)
            .ensure_tools(&tools())
            .unwrap_err();

        let ProvisionError::Offline { tool } = err;
        assert_eq!(tool, "g++");
        assert!(runner.commands.is_empty());
    }

    #[test]
    fn test_missing_tools_are_installed_in_order() {
        let locator = FakeLocator::default();
        let network = FakeNetwork::new(true);
        let mut runner = RecordingRunner::default();

        let report = provisioner(OsKind::Linux, &locator, &network, &mut runner)
            .ensure_tools(&tools())
            .unwrap();

        assert_eq!(network.calls.get(), 2);
        let installed: Vec<String> = runner
            .commands
            .iter()
            .filter(|c| c.args.contains(&"install".to_string()))
            .map(|c| c.args.last().cloned().unwrap_or_default())
            .collect();
        assert_eq!(installed, vec!["make", "g++"]);
        assert!(
            report
                .iter()
                .all(|(_, s)| matches!(s, ToolStatus::Installed(o) if o.is_completed()))
        );
    }

    #[test]
    fn test_failed_install_continues_with_next_tool() {
        let locator = FakeLocator::default();
        let network = FakeNetwork::new(true);
        let mut runner = RecordingRunner::failing(&["sudo"]);

        let report = provisioner(OsKind::Linux, &locator, &network, &mut runner)
            .ensure_tools(&tools())
            .unwrap();

        assert_eq!(runner.commands.len(), 4);
        assert!(matches!(
            report[0].1,
            ToolStatus::Installed(ProvisionOutcome::CommandFailed(_))
        ));
    }

    #[test]
    fn test_windows_reports_manual_action() {
        let locator = FakeLocator::default();
        let network = FakeNetwork::new(true);
        let mut runner = RecordingRunner::default();

        let report = provisioner(OsKind::Windows, &locator, &network, &mut runner)
            .ensure_tools(&["g++".to_string()])
            .unwrap();

        assert!(runner.commands.is_empty());
        assert!(matches!(
            report[0].1,
            ToolStatus::Installed(ProvisionOutcome::ManualActionRequired(_))
        ));
    }

    #[test]
    fn test_terminal_mode_refreshes_sudo_before_installing() {
        let locator = FakeLocator::default();
        let network = FakeNetwork::new(true);
        let mut runner = RecordingRunner::default();

        let mut p = provisioner(OsKind::Linux, &locator, &network, &mut runner);
        p.progress = ProgressMode::Terminal;
        p.ensure_tools(&["make".to_string()]).unwrap();

        let rendered: Vec<String> = runner.commands.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "sudo -v",
                "sudo apt-get update",
                "sudo apt-get install -y make"
            ]
        );
    }

    #[test]
    fn test_hidden_mode_runs_only_planned_commands() {
        let locator = FakeLocator::default();
        let network = FakeNetwork::new(true);
        let mut runner = RecordingRunner::default();

        provisioner(OsKind::Linux, &locator, &network, &mut runner)
            .ensure_tools(&["make".to_string()])
            .unwrap();

        assert_eq!(runner.commands.len(), 2);
        assert_eq!(runner.commands[0].to_string(), "sudo apt-get update");
    }

    #[test]
    fn test_terminal_progress_mode_still_installs() {
        let locator = FakeLocator::default();
        let network = FakeNetwork::new(true);
        let mut runner = RecordingRunner::default();

        let mut p = provisioner(OsKind::MacOs, &locator, &network, &mut runner);
        p.progress = ProgressMode::Terminal;
        p.ensure_tools(&["g++".to_string()]).unwrap();

        assert_eq!(
            runner.commands.last().map(|c| c.to_string()).as_deref(),
            Some("brew install gcc")
        );
    }
}
