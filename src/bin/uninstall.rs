//! # cppinit-uninstall
//!
//! Removes `make` and `g++` through the system package manager after asking
//! for confirmation.

use anyhow::Result;
use clap::Parser;
use colored::*;

use cppinit::cli::{UninstallCli, init_logging};
use cppinit::commands::uninstall::{self, INTRO, QUESTION};
use cppinit::config::Settings;
use cppinit::toolchain::{OsKind, SystemRunner};
use cppinit::ui;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = UninstallCli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config.as_deref())?;

    println!("{}", INTRO);
    let answer = if cli.yes {
        "yes".to_string()
    } else {
        uninstall::answer_or_decline(ui::ask(QUESTION, "NO"))
    };

    let mut runner = SystemRunner;
    uninstall::run(&answer, &settings.tools, &OsKind::current(), &mut runner);
    Ok(())
}
