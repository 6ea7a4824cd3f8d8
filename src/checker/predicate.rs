//! Line predicates used by the copyright scan.
//!
//! The generic and current-year predicates are explicit string scans; the
//! organization form is a compiled regex built once per checker.

use regex::Regex;

use crate::error::{CopyrightGuardError, Result};

const COPYRIGHT_TOKEN: &str = "Copyright ";
const COPYRIGHT_WORD: &str = "Copyright";
const PLACEHOLDER_TOKEN: &str = "[yyyy]";

/// True if the line carries a copyright claim.
///
/// Matches `Copyright ` anywhere in the line, unless that occurrence is
/// directly followed by the unfilled template token `[yyyy]`. A line with
/// both a placeholder and a real claim still matches.
#[must_use]
pub fn is_copyright_line(line: &str) -> bool {
    line.match_indices(COPYRIGHT_TOKEN)
        .any(|(idx, token)| !line[idx + token.len()..].starts_with(PLACEHOLDER_TOKEN))
}

/// True if `year` appears as a whole word somewhere after the first
/// `Copyright` in the line.
///
/// The test runs over the full line text, not just the year list of an
/// organization-form claim.
#[must_use]
pub fn mentions_year(line: &str, year: &str) -> bool {
    if year.is_empty() {
        return false;
    }
    let Some(start) = line.find(COPYRIGHT_WORD) else {
        return false;
    };
    let search_from = start + COPYRIGHT_WORD.len();

    line[search_from..].match_indices(year).any(|(offset, _)| {
        let idx = search_from + offset;
        let before = line[..idx].chars().next_back();
        let after = line[idx + year.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Compiled matcher for the canonical organization claim:
/// `Copyright (c) [YYYY, ]YYYY by <Organization>. All rights reserved.`
#[derive(Debug, Clone)]
pub struct OrganizationLine {
    regex: Regex,
}

impl OrganizationLine {
    /// Build the matcher for `organization`. The name is matched literally.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the resulting expression cannot be compiled.
    pub fn new(organization: &str) -> Result<Self> {
        let pattern = format!(
            r"Copyright \(c\) (20\d\d, )?20\d\d by {}\. All rights reserved\.$",
            regex::escape(organization)
        );
        let regex = Regex::new(&pattern)
            .map_err(|source| CopyrightGuardError::InvalidPattern { pattern, source })?;
        Ok(Self { regex })
    }

    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

#[cfg(test)]
#[path = "predicate_tests.rs"]
mod tests;
