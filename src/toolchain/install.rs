//! System package-manager installation and removal.
//!
//! Each platform gets its own planning function that turns a tool name into
//! an [`InstallPlan`]. Plans are executed by [`execute_plan`] through a
//! [`CommandRunner`], which the tests replace with a recorder.
//!
//! ## Supported Platforms
//!
//! - Linux - `apt-get` through `sudo`
//! - macOS - Homebrew (installed on demand)
//! - Windows and others - manual instructions only

use colored::*;
use std::process::Command;

use super::probe::ToolLocator;
use super::types::{CommandError, InstallPlan, OsKind, PackageCommand, ProvisionOutcome};

const HOMEBREW_INSTALL_SCRIPT: &str =
    "https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh";

/// Runs package-manager commands.
pub trait CommandRunner {
    fn run(&mut self, command: &PackageCommand) -> Result<(), CommandError>;
}

/// Spawns real processes, inheriting the terminal so `sudo` can prompt.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &PackageCommand) -> Result<(), CommandError> {
        log::info!("running `{}`", command);
        let status = Command::new(&command.program)
            .args(&command.args)
            .status()
            .map_err(|source| CommandError::Spawn {
                command: command.to_string(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::ExitStatus {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}

/// Commands needed to install `tool` on `os`.
pub fn plan_install(os: &OsKind, tool: &str, locator: &dyn ToolLocator) -> InstallPlan {
    match os {
        OsKind::Linux => linux_install(tool),
        OsKind::MacOs => macos_install(tool, locator.is_installed("brew")),
        OsKind::Windows => InstallPlan::Manual(format!(
            "For Windows, please install '{}' using MinGW or Cygwin.",
            tool
        )),
        OsKind::Other(name) => unsupported(name),
    }
}

/// Commands needed to remove `tool` from `os`.
pub fn plan_uninstall(os: &OsKind, tool: &str) -> InstallPlan {
    match os {
        OsKind::Linux => linux_uninstall(tool),
        OsKind::MacOs => macos_uninstall(tool),
        OsKind::Windows => InstallPlan::Manual(format!(
            "For Windows, please uninstall '{}' manually.",
            tool
        )),
        OsKind::Other(name) => unsupported(name),
    }
}

fn linux_install(tool: &str) -> InstallPlan {
    InstallPlan::commands(vec![
        PackageCommand::elevated("apt-get", &["update"]),
        PackageCommand::elevated("apt-get", &["install", "-y", tool]),
    ])
}

fn linux_uninstall(tool: &str) -> InstallPlan {
    InstallPlan::commands(vec![PackageCommand::elevated(
        "apt-get",
        &["remove", "--purge", tool],
    )])
}

fn macos_install(tool: &str, has_brew: bool) -> InstallPlan {
    let package = OsKind::MacOs.package_name(tool);
    let mut commands = Vec::new();
    let mut notice = None;
    if !has_brew {
        let script = format!("$(curl -fsSL {})", HOMEBREW_INSTALL_SCRIPT);
        commands.push(PackageCommand::new("/bin/bash", &["-c", script.as_str()]));
        notice = Some("Homebrew is not installed. Installing now...".to_string());
    }
    commands.push(PackageCommand::new("brew", &["install", package]));
    InstallPlan::Commands { commands, notice }
}

fn macos_uninstall(tool: &str) -> InstallPlan {
    let package = OsKind::MacOs.package_name(tool);
    InstallPlan::commands(vec![PackageCommand::new("brew", &["uninstall", package])])
}

fn unsupported(name: &str) -> InstallPlan {
    InstallPlan::Manual(format!("Unsupported OS: {}", name))
}

/// Run every command of `plan`, continuing past failures.
///
/// Each failed command is logged and reported as a warning. The plan's notice
/// is left to the caller so it can be shown before any spinner starts.
pub fn execute_plan(plan: &InstallPlan, runner: &mut dyn CommandRunner) -> ProvisionOutcome {
    let commands = match plan {
        InstallPlan::Manual(instructions) => {
            return ProvisionOutcome::ManualActionRequired(instructions.clone());
        }
        InstallPlan::Commands { commands, .. } => commands,
    };

    let mut failures = Vec::new();
    for command in commands {
        if let Err(e) = runner.run(command) {
            log::warn!("{}", e);
            println!("\r{} {}", "!".yellow(), e);
            failures.push(e);
        }
    }

    if failures.is_empty() {
        ProvisionOutcome::Completed
    } else {
        ProvisionOutcome::CommandFailed(failures)
    }
}

/// Plan and run the removal of `tool`.
pub fn uninstall_tool(os: &OsKind, tool: &str, runner: &mut dyn CommandRunner) -> ProvisionOutcome {
    let plan = plan_uninstall(os, tool);
    log::debug!("uninstall plan for {} on {}: {:?}", tool, os, plan);
    execute_plan(&plan, runner)
}


#[cfg(test)]
mod tests {
    use super::testing::{FakeLocator, RecordingRunner};
    use super::*;

    fn install_tool(
        os: &OsKind,
        tool: &str,
        locator: &FakeLocator,
        runner: &mut RecordingRunner,
    ) -> ProvisionOutcome {
        execute_plan(&plan_install(os, tool, locator), runner)
    }

    #[test]
    fn test_linux_install_updates_then_installs_with_sudo() {
        let mut runner = RecordingRunner::default();
        let outcome = install_tool(&OsKind::Linux, "make", &FakeLocator::default(), &mut runner);

        assert!(outcome.is_completed());
        assert_eq!(runner.commands.len(), 2);
        assert_eq!(runner.commands[0].to_string(), "sudo apt-get update");
        assert_eq!(runner.commands[1].to_string(), "sudo apt-get install -y make");
        assert!(runner.commands.iter().all(|c| c.is_elevated()));
    }

    #[test]
    fn test_macos_remaps_gpp_to_gcc() {
        let mut runner = RecordingRunner::default();
        let locator = FakeLocator::with(&["brew"]);
        install_tool(&OsKind::MacOs, "g++", &locator, &mut runner);

        assert_eq!(
            runner.commands,
            vec![PackageCommand::new("brew", &["install", "gcc"])]
        );
    }

    #[test]
    fn test_macos_installs_homebrew_first_when_missing() {
        let plan = plan_install(&OsKind::MacOs, "make", &FakeLocator::default());
        assert_eq!(
            plan.notice(),
            Some("Homebrew is not installed. Installing now...")
        );
        let InstallPlan::Commands { commands, .. } = plan else {
            panic!("expected commands");
        };
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].program, "/bin/bash");
        assert!(commands[0].args[1].contains(HOMEBREW_INSTALL_SCRIPT));
        assert_eq!(commands[1], PackageCommand::new("brew", &["install", "make"]));
    }

    #[test]
    fn test_brew_present_has_no_notice() {
        let plan = plan_install(&OsKind::MacOs, "make", &FakeLocator::with(&["brew"]));
        assert_eq!(plan.notice(), None);
        assert!(!plan.needs_elevation());
    }

    #[test]
    fn test_linux_plan_needs_elevation() {
        let plan = plan_install(&OsKind::Linux, "make", &FakeLocator::default());
        assert!(plan.needs_elevation());
        assert_eq!(plan.notice(), None);
    }

    #[test]
    fn test_windows_needs_manual_action() {
        let mut runner = RecordingRunner::default();
        let outcome = install_tool(&OsKind::Windows, "g++", &FakeLocator::default(), &mut runner);

        assert!(runner.commands.is_empty());
        match outcome {
            ProvisionOutcome::ManualActionRequired(msg) => {
                assert_eq!(msg, "For Windows, please install 'g++' using MinGW or Cygwin.");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_unsupported_os() {
        let plan = plan_uninstall(&OsKind::Other("Haiku".to_string()), "make");
        assert_eq!(plan, InstallPlan::Manual("Unsupported OS: Haiku".to_string()));
    }

    #[test]
    fn test_failed_command_does_not_stop_the_sequence() {
        let mut runner = RecordingRunner::failing(&["sudo"]);
        let outcome = install_tool(&OsKind::Linux, "g++", &FakeLocator::default(), &mut runner);

        assert_eq!(runner.commands.len(), 2);
        match outcome {
            ProvisionOutcome::CommandFailed(failures) => assert_eq!(failures.len(), 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_linux_uninstall_purges() {
        let mut runner = RecordingRunner::default();
        uninstall_tool(&OsKind::Linux, "g++", &mut runner);
        assert_eq!(
            runner.commands,
            vec![PackageCommand::elevated("apt-get", &["remove", "--purge", "g++"])]
        );
    }

    #[test]
    fn test_macos_uninstall_remaps() {
        let mut runner = RecordingRunner::default();
        uninstall_tool(&OsKind::MacOs, "g++", &mut runner);
        assert_eq!(
            runner.commands,
            vec![PackageCommand::new("brew", &["uninstall", "gcc"])]
        );
    }

    #[test]
    fn test_windows_uninstall_message() {
        let plan = plan_uninstall(&OsKind::Windows, "make");
        assert_eq!(
            plan,
            InstallPlan::Manual("For Windows, please uninstall 'make' manually.".to_string())
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_spawn_failure() {
        let mut runner = SystemRunner;
        let err = runner
            .run(&PackageCommand::new("definitely-not-a-real-tool-3f9a", &[]))
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }
}
