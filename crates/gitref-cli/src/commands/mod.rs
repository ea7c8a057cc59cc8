//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod create;
pub mod doctor;
pub mod show;

use clap::{Parser, Subcommand};
use gitref_core::config::Config;
use std::path::PathBuf;

/// gitref - write the HEAD commit reference to a text file
#[derive(Debug, Parser)]
#[command(name = "gitref")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GITREF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write the HEAD commit reference to <commit>.txt
    Create(create::CreateArgs),

    /// Show HEAD of the current repository
    Show(show::ShowArgs),

    /// Diagnose git, repository and destination folder
    Doctor(doctor::DoctorArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application. `Ok(false)` means a failure was already reported.
pub fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.unwrap_or_else(Config::default_path);
    tracing::debug!("Using configuration file {:?}", config_path);

    // Dispatch to command handler
    match cli.command {
        Commands::Create(args) => create::execute(args, &config_path),
        Commands::Show(args) => show::execute(args, &config_path),
        Commands::Doctor(args) => doctor::execute(args, &config_path),
        Commands::Config(cmd) => config::execute(cmd, &config_path),
    }
}

/// Folders searched for a repository, the current directory when none given
pub(crate) fn workspace_folders(repos: &[PathBuf]) -> Vec<PathBuf> {
    if repos.is_empty() {
        vec![std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))]
    } else {
        repos.to_vec()
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_create_takes_no_required_arguments() {
        let cli = Cli::try_parse_from(["gitref", "create"]).unwrap();
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn test_workspace_folders_default() {
        let folders = workspace_folders(&[]);
        assert_eq!(folders.len(), 1);

        let given = vec![PathBuf::from("/a"), PathBuf::from("/b")];
        assert_eq!(workspace_folders(&given), given);
    }
}
