use std::io::{self, BufRead, Write};

use crate::checker::{CheckReport, CopyrightChecker, STDIN_LABEL, current_year};
use crate::cli::{CheckArgs, Cli};
use crate::config::{Config, LoadResult, validate_organization, validate_year};
use crate::output::{
    ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter, print_guard_error,
};
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{color_choice_to_mode, load_config};

/// Organization and year a check runs against, after applying overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    pub organization: String,
    pub year: u16,
    /// Set when the year came from `--year` or the config instead of the clock.
    pub year_pinned: bool,
}

impl CheckSettings {
    /// Resolve settings: CLI flags, then the config file, then built-in defaults.
    ///
    /// # Errors
    /// Returns an error if the organization is blank or a pinned year is not
    /// four digits.
    pub fn resolve(args: &CheckArgs, config: &Config, clock_year: u16) -> Result<Self> {
        let organization = args
            .organization
            .clone()
            .unwrap_or_else(|| config.organization.clone());
        validate_organization(&organization)?;

        let pinned = args.year.or(config.year);
        if let Some(year) = pinned {
            validate_year(year)?;
        }

        Ok(Self {
            organization,
            year: pinned.unwrap_or(clock_year),
            year_pinned: pinned.is_some(),
        })
    }
}

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    let result = {
        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        let mut stderr = io::stderr().lock();
        run_check_impl(args, cli, stdin.lock(), &mut stdout, &mut stderr)
    };

    result.unwrap_or_else(|e| {
        print_guard_error(&e, color_choice_to_mode(cli.color));
        EXIT_CONFIG_ERROR
    })
}

/// Run a single-file check with explicit streams.
///
/// Returns the check's exit code (0 or 1). Only configuration problems and
/// failures writing the JSON report are errors; an unreadable input file is
/// checked as empty.
///
/// # Errors
/// Returns an error if configuration cannot be loaded or is invalid, or if
/// the report cannot be written to `stdout`.
pub fn run_check_impl<R, O, E>(
    args: &CheckArgs,
    cli: &Cli,
    stdin: R,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<i32>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let loaded = load_config(args.config.as_deref(), cli.no_config)?;
    let settings = CheckSettings::resolve(args, &loaded.config, current_year())?;
    let checker = CopyrightChecker::new(&settings.organization)?;

    let verbose = if cli.quiet { 0 } else { cli.verbose };
    let warnings = ErrorOutput::new(color_choice_to_mode(cli.color));

    if verbose > 1 {
        log_config_source(stderr, &loaded);
    }
    if verbose > 0 && settings.year_pinned {
        warnings.write_warning(
            stderr,
            &format!("checking against pinned year {}", settings.year),
        );
    }

    let report = match args.input_path() {
        None => {
            let label = args.label.as_deref().unwrap_or(STDIN_LABEL);
            checker.inspect(stdin, label, settings.year)
        }
        Some(path) => {
            let (report, open_error) =
                checker.inspect_path(path, args.label.as_deref(), settings.year);
            if let Some(e) = open_error
                && verbose > 0
            {
                warnings.write_warning(stderr, &format!("cannot read {}: {e}", path.display()));
            }
            report
        }
    };

    write_report(&report, args.format, verbose, stdout, stderr)?;
    Ok(report.exit_code())
}

fn log_config_source<E: Write>(stderr: &mut E, loaded: &LoadResult) {
    let _ = match &loaded.source {
        Some(path) => writeln!(stderr, "using config: {}", path.display()),
        None => writeln!(stderr, "using config: built-in defaults"),
    };
}

fn write_report<O: Write, E: Write>(
    report: &CheckReport,
    format: OutputFormat,
    verbose: u8,
    stdout: &mut O,
    stderr: &mut E,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let text = TextFormatter::with_verbose(verbose).format(report)?;
            // The verdict is carried by the exit code even if stderr is gone.
            let _ = stderr.write_all(text.as_bytes());
        }
        OutputFormat::Json => {
            let json = JsonFormatter.format(report)?;
            stdout.write_all(json.as_bytes())?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
