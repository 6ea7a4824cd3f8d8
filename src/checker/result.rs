use crate::{EXIT_CHECK_FAILED, EXIT_SUCCESS};

/// Why a file failed the copyright check.
///
/// Variants are ordered by priority: when several apply, the first one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    /// No line carries a copyright claim.
    NoCopyrightFound,
    /// Copyright lines exist but none is in the organization form.
    OrganizationMismatch,
    /// Organization-form lines exist but none mentions the current year.
    StaleYear,
}

impl Violation {
    /// Human-readable message, as printed after `<label>: `.
    #[must_use]
    pub fn message(self, organization: &str) -> String {
        match self {
            Self::NoCopyrightFound => "no copyright message found".to_string(),
            Self::OrganizationMismatch => {
                format!("missing or mistyped {organization} copyright")
            }
            Self::StaleYear => "no copyright claim for current year found".to_string(),
        }
    }

    /// Stable machine-readable identifier.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NoCopyrightFound => "no_copyright",
            Self::OrganizationMismatch => "organization_mismatch",
            Self::StaleYear => "stale_year",
        }
    }

    /// The full diagnostic line: `<label>: <message>\n`.
    #[must_use]
    pub fn diagnostic(self, label: &str, organization: &str) -> String {
        format!("{label}: {}\n", self.message(organization))
    }
}

/// Verdict of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Passed,
    Failed(Violation),
}

impl CheckOutcome {
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    #[must_use]
    pub const fn violation(&self) -> Option<Violation> {
        match self {
            Self::Passed => None,
            Self::Failed(violation) => Some(*violation),
        }
    }

    /// Process exit status for this verdict: 0 on pass, 1 on failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Passed => EXIT_SUCCESS,
            Self::Failed(_) => EXIT_CHECK_FAILED,
        }
    }
}

/// Counters accumulated by one scan.
///
/// Lines after the first fully matching line are never visited, so the
/// counts only cover the scanned prefix of the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyrightTally {
    pub lines_scanned: usize,
    pub copyright_lines: usize,
    pub organization_lines: usize,
    pub current_year_lines: usize,
    /// 1-based number of the line that ended the scan early.
    pub matched_line: Option<usize>,
}

impl CopyrightTally {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines_scanned: 0,
            copyright_lines: 0,
            organization_lines: 0,
            current_year_lines: 0,
            matched_line: None,
        }
    }

    #[must_use]
    pub const fn classify(&self) -> CheckOutcome {
        if self.copyright_lines == 0 {
            CheckOutcome::Failed(Violation::NoCopyrightFound)
        } else if self.organization_lines == 0 {
            CheckOutcome::Failed(Violation::OrganizationMismatch)
        } else if self.current_year_lines == 0 {
            CheckOutcome::Failed(Violation::StaleYear)
        } else {
            CheckOutcome::Passed
        }
    }
}

/// Everything known about one checked input, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub label: String,
    pub organization: String,
    pub year: u16,
    pub tally: CopyrightTally,
    pub outcome: CheckOutcome,
}

impl CheckReport {
    /// Diagnostic line for a failed check, `None` when it passed.
    #[must_use]
    pub fn diagnostic(&self) -> Option<String> {
        self.outcome
            .violation()
            .map(|violation| violation.diagnostic(&self.label, &self.organization))
    }

    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.outcome
            .violation()
            .map(|violation| violation.message(&self.organization))
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.outcome.exit_code()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
