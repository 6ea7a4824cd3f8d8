//! Runtime error output with color support.
//!
//! Copyright verdicts are not errors and never pass through here; this is for
//! configuration and I/O failures only.
//! Format: ✖ Error Type / × Detail / help: Suggestion

use std::io::{IsTerminal, Write};

use crate::error::CopyrightGuardError;

use super::ColorMode;
use super::ansi;

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a new error output formatter with the specified color mode.
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: Self::stderr_supports_color(),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        }
    }

    fn stderr_supports_color() -> bool {
        // Respect NO_COLOR environment variable (https://no-color.org/)
        if std::env::var("NO_COLOR").is_ok() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints a crate error, including its detail and suggestion.
    pub fn print_guard_error(&self, err: &CopyrightGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_guard_error(&mut stderr, err);
    }

    /// Writes a crate error to a writer.
    pub fn write_guard_error<W: Write>(&self, w: &mut W, err: &CopyrightGuardError) {
        let detail = err.detail();
        self.write_error(
            w,
            err.error_type(),
            &err.message(),
            detail.as_deref(),
            err.suggestion(),
        );
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on the error stream are ignored; there is nowhere
        // left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Writes a warning to a writer.
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Convenience function: prints a crate error with the given color mode.
pub fn print_guard_error(err: &CopyrightGuardError, mode: ColorMode) {
    ErrorOutput::new(mode).print_guard_error(err);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
