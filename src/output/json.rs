use serde::Serialize;

use crate::checker::CheckReport;
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    label: &'a str,
    organization: &'a str,
    year: u16,
    status: &'static str,
    violation: Option<&'static str>,
    message: Option<String>,
    tally: Tally,
}

#[derive(Serialize)]
struct Tally {
    lines_scanned: usize,
    copyright_lines: usize,
    organization_lines: usize,
    current_year_lines: usize,
    matched_line: Option<usize>,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let tally = &report.tally;
        let output = JsonOutput {
            label: &report.label,
            organization: &report.organization,
            year: report.year,
            status: if report.outcome.is_passed() {
                "passed"
            } else {
                "failed"
            },
            violation: report.outcome.violation().map(|v| v.code()),
            message: report.message(),
            tally: Tally {
                lines_scanned: tally.lines_scanned,
                copyright_lines: tally.copyright_lines,
                organization_lines: tally.organization_lines,
                current_year_lines: tally.current_year_lines,
                matched_line: tally.matched_line,
            },
        };

        let mut text = serde_json::to_string_pretty(&output)?;
        text.push('\n');
        Ok(text)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
