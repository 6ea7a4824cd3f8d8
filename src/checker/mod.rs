mod lines;
mod predicate;
mod result;
mod year;

pub use predicate::{OrganizationLine, is_copyright_line, mentions_year};
pub use result::{CheckOutcome, CheckReport, CopyrightTally, Violation};
pub use year::{current_year, year_of};

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{CopyrightGuardError, Result};

use lines::LossyLines;

/// Organization whose claim is required when none is configured.
pub const DEFAULT_ORGANIZATION: &str = "Delphix";

/// Label used for diagnostics when reading standard input.
pub const STDIN_LABEL: &str = "<stdin>";

/// Validates that a file carries an up-to-date organization copyright claim.
///
/// The checker is immutable once built and can be shared between threads;
/// every call keeps its own counters.
#[derive(Debug, Clone)]
pub struct CopyrightChecker {
    organization: String,
    organization_line: OrganizationLine,
}

impl CopyrightChecker {
    /// Create a checker requiring claims by `organization`.
    ///
    /// # Errors
    /// Returns an error if the organization name is blank or cannot be
    /// compiled into a line pattern.
    pub fn new(organization: &str) -> Result<Self> {
        if organization.trim().is_empty() {
            return Err(CopyrightGuardError::Config(
                "organization name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            organization: organization.to_string(),
            organization_line: OrganizationLine::new(organization)?,
        })
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Scan lines in order, stopping at the first line that is an
    /// organization-form claim mentioning `year`.
    pub fn scan<I>(&self, lines: I, year: u16) -> CopyrightTally
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let year_text = format!("{year:04}");
        let mut tally = CopyrightTally::new();

        for line in lines {
            tally.lines_scanned += 1;
            let line = trim_line_ending(line.as_ref());

            if !is_copyright_line(line) {
                continue;
            }
            tally.copyright_lines += 1;

            if !self.organization_line.is_match(line) {
                continue;
            }
            tally.organization_lines += 1;

            if mentions_year(line, &year_text) {
                tally.current_year_lines += 1;
                tally.matched_line = Some(tally.lines_scanned);
                break;
            }
        }

        tally
    }

    /// Scan and classify.
    pub fn evaluate<I>(&self, lines: I, year: u16) -> CheckOutcome
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.scan(lines, year).classify()
    }

    /// Scan a reader and collect a full report.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected. A read error ends the scan as
    /// if the input stopped there.
    pub fn inspect<R: BufRead>(&self, reader: R, label: &str, year: u16) -> CheckReport {
        let tally = self.scan(LossyLines::new(reader), year);
        let outcome = tally.classify();
        CheckReport {
            label: label.to_string(),
            organization: self.organization.clone(),
            year,
            tally,
            outcome,
        }
    }

    /// Check a reader, writing at most one `<label>: <message>` line to
    /// `sink`. Returns 0 on pass and 1 on failure.
    pub fn check<R: BufRead, W: Write>(
        &self,
        reader: R,
        label: &str,
        sink: &mut W,
        year: u16,
    ) -> i32 {
        let report = self.inspect(reader, label, year);
        Self::emit(&report, sink)
    }

    /// Inspect a file on disk. The label defaults to the path as given.
    ///
    /// A file that cannot be opened is inspected as empty input; the open
    /// error is returned alongside the report.
    pub fn inspect_path(
        &self,
        path: &Path,
        label: Option<&str>,
        year: u16,
    ) -> (CheckReport, Option<io::Error>) {
        let label = label.map_or_else(|| path.display().to_string(), str::to_string);
        match File::open(path) {
            Ok(file) => (self.inspect(BufReader::new(file), &label, year), None),
            Err(e) => (self.inspect(io::empty(), &label, year), Some(e)),
        }
    }

    /// Check a file on disk, writing at most one diagnostic to `sink`.
    pub fn check_path<W: Write>(
        &self,
        path: &Path,
        label: Option<&str>,
        sink: &mut W,
        year: u16,
    ) -> i32 {
        let (report, _) = self.inspect_path(path, label, year);
        Self::emit(&report, sink)
    }

    fn emit<W: Write>(report: &CheckReport, sink: &mut W) -> i32 {
        if let Some(diagnostic) = report.diagnostic() {
            // The verdict stands even if the sink is closed.
            let _ = sink.write_all(diagnostic.as_bytes());
        }
        report.exit_code()
    }
}

fn trim_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
