use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "copyright-guard")]
#[command(author, version, about = "Check a source file for a current organization copyright")]
#[command(long_about = "Checks that a file carries a copyright line of the form\n\
    'Copyright (c) [YYYY, ]YYYY by <Organization>. All rights reserved.'\n\
    that mentions the current year.\n\n\
    Exit codes:\n  \
    0 - Copyright check passed\n  \
    1 - Copyright check failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check one file for a current organization copyright
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// File to check ("-" or omitted reads standard input)
    pub file: Option<PathBuf>,

    /// Name used in diagnostics (defaults to the file path, or "<stdin>")
    #[arg(long)]
    pub label: Option<String>,

    /// Organization whose copyright is required (overrides config)
    #[arg(long)]
    pub organization: Option<String>,

    /// Year treated as current (overrides config and the system clock)
    #[arg(long)]
    pub year: Option<u16>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

impl CheckArgs {
    /// The file to read, `None` for standard input.
    #[must_use]
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.file
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".copyright-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file (default: .copyright-guard.toml)
        #[arg(short, long, default_value = ".copyright-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
