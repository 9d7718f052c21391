//! `cppinit-uninstall` handler
//!
//! Removes the tools the main binary installs, after explicit confirmation.

use colored::*;

use crate::toolchain::{CommandRunner, OsKind, ProvisionOutcome, uninstall_tool};

pub const INTRO: &str = "This script will uninstall the tools installed by the main script.";
pub const QUESTION: &str = "Are you sure you want to continue? [yes/NO]";

#[derive(Debug)]
pub enum UninstallSummary {
    Cancelled,
    Completed(Vec<(String, ProvisionOutcome)>),
}

/// Only a literal `yes` (any case, surrounding whitespace ignored) confirms.
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Turn a failed or aborted prompt (Esc, Ctrl-C, closed terminal) into a refusal.
pub fn answer_or_decline(prompted: anyhow::Result<String>) -> String {
    prompted.unwrap_or_else(|e| {
        log::info!("confirmation prompt aborted: {:#}", e);
        "NO".to_string()
    })
}

/// Remove `tools` if `answer` confirms, without any progress spinner.
pub fn run(
    answer: &str,
    tools: &[String],
    os: &OsKind,
    runner: &mut dyn CommandRunner,
) -> UninstallSummary {
    if !is_confirmed(answer) {
        println!("Uninstallation cancelled.");
        return UninstallSummary::Cancelled;
    }

    let mut results = Vec::with_capacity(tools.len());
    for tool in tools {
        let outcome = uninstall_tool(os, tool, runner);
        match &outcome {
            ProvisionOutcome::ManualActionRequired(instructions) => println!("{}", instructions),
            ProvisionOutcome::CommandFailed(failures) => println!(
                "{} {} command(s) failed while removing '{}'",
                "!".yellow(),
                failures.len(),
                tool
            ),
            ProvisionOutcome::Completed => log::info!("removed {}", tool),
        }
        results.push((tool.clone(), outcome));
    }

    println!("Uninstallation completed.");
    UninstallSummary::Completed(results)
}
