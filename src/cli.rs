//! Command-line definitions shared by both binaries.

use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cppinit")]
#[command(about = "Create a minimal C++ project with a Makefile")]
#[command(override_usage = "cppinit <project_name>")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Name of the project directory to create
    pub project_name: Option<String>,

    /// Display this help menu
    #[arg(short = 'h', long = "help", short_alias = 'u', alias = "usage", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Display author information
    #[arg(short, long)]
    pub author: bool,

    /// Display version information
    #[arg(short, long)]
    pub version: bool,

    /// Do not install missing tools, only write the project files
    #[arg(long)]
    pub no_install: bool,

    /// Read settings from this file instead of ~/.cppinit/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// More log output (-V info, -VV debug, -VVV trace)
    #[arg(short = 'V', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Parser, Debug)]
#[command(name = "cppinit-uninstall")]
#[command(about = "Remove the tools installed by cppinit")]
pub struct UninstallCli {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Read settings from this file instead of ~/.cppinit/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// More log output (-V info, -VV debug, -VVV trace)
    #[arg(short = 'V', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
        UninstallCli::command().debug_assert();
    }

    #[test]
    fn test_project_name_and_flags() {
        let cli = Cli::try_parse_from(["cppinit", "foo", "--no-install", "-VV"]).unwrap();
        assert_eq!(cli.project_name.as_deref(), Some("foo"));
        assert!(cli.no_install);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_short_flags() {
        assert!(Cli::try_parse_from(["cppinit", "-v"]).unwrap().version);
        assert!(Cli::try_parse_from(["cppinit", "-a"]).unwrap().author);
    }

    #[test]
    fn test_usage_alias_shows_help() {
        for flag in ["-h", "--help", "-u", "--usage"] {
            let err = Cli::try_parse_from(["cppinit", flag]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp, "{}", flag);
        }
    }
}
