use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::output::print_guard_error;
use crate::{CopyrightGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::color_choice_to_mode;

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            print_guard_error(&e, color_choice_to_mode(cli.color));
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(CopyrightGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        CopyrightGuardError::FileAccess {
            path: output_path.clone(),
            source,
        }
    })?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    format!(
        r#"# copyright-guard configuration file

# Config format version
version = "{version}"

# Organization whose claim must appear in every checked file:
#   Copyright (c) [YYYY, ]YYYY by <organization>. All rights reserved.
organization = "{organization}"

# Pin the year treated as current (default: system clock)
# year = 2024
"#,
        version = crate::config::CONFIG_VERSION,
        organization = crate::checker::DEFAULT_ORGANIZATION,
    )
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
