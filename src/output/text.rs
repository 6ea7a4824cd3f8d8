use std::fmt::Write;

use crate::checker::CheckReport;
use crate::error::Result;

use super::OutputFormatter;

/// Plain diagnostic output: `<label>: <message>` for a failure, nothing on
/// success. Never colored, since build tooling parses these lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter {
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { verbose: 0 }
    }

    #[must_use]
    pub const fn with_verbose(verbose: u8) -> Self {
        Self { verbose }
    }

    /// One-line account of what the scan saw.
    #[must_use]
    pub fn summary(report: &CheckReport) -> String {
        let tally = &report.tally;
        let mut line = format!(
            "{}: scanned {} lines: {} copyright, {} {}, {} current year ({})",
            report.label,
            tally.lines_scanned,
            tally.copyright_lines,
            tally.organization_lines,
            report.organization,
            tally.current_year_lines,
            report.year
        );
        if let Some(matched) = tally.matched_line {
            let _ = write!(line, "; claim on line {matched}");
        }
        line.push('\n');
        line
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();
        if self.verbose > 0 {
            output.push_str(&Self::summary(report));
        }
        if let Some(diagnostic) = report.diagnostic() {
            output.push_str(&diagnostic);
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
