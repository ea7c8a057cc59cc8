//! Config command
//!
//! Manage gitref configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;

use gitref_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the configuration file location
    Path,

    /// Reset to default configuration
    Reset {
        /// Force reset without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Validate configuration
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: &Path) -> Result<bool> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Path => {
            println!("{}", config_path.display());
            Ok(true)
        }
        ConfigCommand::Reset { force } => reset_config(config_path, force),
        ConfigCommand::Validate => validate_config(config_path),
    }
}

fn show_config(config_path: &Path, as_json: bool) -> Result<bool> {
    use colored::Colorize;

    let config = Config::load(config_path)?;

    if as_json {
        let json = serde_json::to_string_pretty(&config)?;
        println!("{}", json);
        return Ok(true);
    }

    println!("{}", "Configuration:".bold().underline());
    if config_path.exists() {
        println!("{}", config_path.display().to_string().dimmed());
    } else {
        println!(
            "{}",
            format!("{} (not found, showing defaults)", config_path.display()).dimmed()
        );
    }
    println!();
    println!("{}", config.to_toml_string()?);

    Ok(true)
}

fn reset_config(config_path: &Path, force: bool) -> Result<bool> {
    use colored::Colorize;

    if !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(true);
        }
    }

    // Backup existing
    if config_path.exists() {
        let backup_path = format!(
            "{}.backup-{}",
            config_path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(config_path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(config_path, default_config_file()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    println!("{} Configuration reset to defaults.", "✓".green());

    Ok(true)
}

fn default_config_file() -> Result<String> {
    Ok(format!(
        "# gitref configuration\n#\n\
         # folderAbsolutePath = \"/path/to/folder\"  # defaults to ~/Desktop, or ~\n\n{}",
        Config::default().to_toml_string()?
    ))
}

fn validate_config(config_path: &Path) -> Result<bool> {
    use colored::Colorize;

    if !config_path.exists() {
        eprintln!(
            "{} Configuration not found at {}",
            "✗".red(),
            config_path.display()
        );
        return Ok(false);
    }

    let content = fs::read_to_string(config_path)?;

    let value = match toml::from_str::<toml::Value>(&content) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("{} Invalid TOML: {}", "✗".red(), e);
            return Ok(false);
        }
    };
    println!("{} Configuration is valid TOML", "✓".green());

    if let Err(e) = toml::from_str::<Config>(&content) {
        eprintln!("{} Unexpected value: {}", "✗".red(), e);
        return Ok(false);
    }

    let mut warnings = Vec::new();

    match value.get("gitReferenceToTxt") {
        None => warnings.push("[gitReferenceToTxt] section not found".to_string()),
        Some(section) => {
            if let Some(folder) = section.get("folderAbsolutePath").and_then(|v| v.as_str()) {
                if !folder.is_empty() && !Path::new(folder).is_dir() {
                    warnings.push(format!(
                        "folderAbsolutePath '{}' is not a directory, the default folder will be used",
                        folder
                    ));
                }
            }
        }
    }

    if warnings.is_empty() {
        println!("{} All settings look good", "✓".green());
    } else {
        for warning in warnings {
            println!("{} {}", "⚠".yellow(), warning);
        }
    }

    Ok(true)
}
