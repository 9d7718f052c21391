//! # cppinit CLI Entry Point
//!
//! Parses arguments, makes sure `make` and `g++` are installed and writes the
//! project skeleton.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::*;

use cppinit::cli::{Cli, init_logging};
use cppinit::commands::new::{self, NewStatus};
use cppinit::config::Settings;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "cppinit", &mut std::io::stdout());
        return Ok(());
    }

    let settings = Settings::load(cli.config.as_deref())?;

    if cli.author {
        display_author(&settings);
        return Ok(());
    }
    if cli.version {
        println!("Version: {}", settings.version);
        return Ok(());
    }

    let Some(name) = cli.project_name.as_deref() else {
        println!("Invalid usage. Use -h or --help for more information.");
        return Ok(());
    };

    match new::run(&settings, name, !cli.no_install)? {
        NewStatus::Offline => std::process::exit(1),
        NewStatus::Created | NewStatus::Cancelled => Ok(()),
    }
}

fn display_author(settings: &Settings) {
    println!("Author: {}", settings.author.name);
    println!("Website: {}", settings.author.website.underline());
}
