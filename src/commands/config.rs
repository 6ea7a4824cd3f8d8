use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::print_guard_error;
use crate::{CopyrightGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config, cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: &Path, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            if !cli.quiet {
                println!("Configuration is valid: {}", config_path.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_guard_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(CopyrightGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    FileConfigLoader::new().load_from_path(config_path)?;
    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: ConfigOutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            print_guard_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;

    match format {
        ConfigOutputFormat::Json => {
            let json = serde_json::to_string_pretty(&loaded.config)?;
            Ok(format!("{json}\n"))
        }
        ConfigOutputFormat::Text => Ok(format_config_text(
            &loaded.config,
            loaded.source.as_deref(),
        )),
    }
}

#[must_use]
pub fn format_config_text(config: &Config, source: Option<&Path>) -> String {
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");
    match source {
        Some(path) => {
            let _ = writeln!(output, "# source: {}", path.display());
        }
        None => output.push_str("# source: built-in defaults\n"),
    }
    if let Some(version) = &config.version {
        let _ = writeln!(output, "version = {version:?}");
    }
    let _ = writeln!(output, "organization = {:?}", config.organization);
    match config.year {
        Some(year) => {
            let _ = writeln!(output, "year = {year}");
        }
        None => output.push_str("# year: system clock\n"),
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
