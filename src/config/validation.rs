//! Configuration semantic validation.
//!
//! Checks values that parse correctly but cannot be used.

use crate::config::Config;
use crate::config::model::{CONFIG_VERSION, MAX_YEAR, MIN_YEAR};
use crate::{CopyrightGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the version is unsupported, the organization is blank,
/// or a pinned year is not four digits.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_version(config)?;
    validate_organization(&config.organization)?;
    if let Some(year) = config.year {
        validate_year(year)?;
    }
    Ok(())
}

fn validate_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(CopyrightGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// # Errors
/// Returns an error if the organization name is empty or only whitespace.
pub fn validate_organization(organization: &str) -> Result<()> {
    if organization.trim().is_empty() {
        return Err(CopyrightGuardError::Config(
            "organization must not be empty".to_string(),
        ));
    }
    if organization.contains('\n') {
        return Err(CopyrightGuardError::Config(
            "organization must be a single line".to_string(),
        ));
    }
    Ok(())
}

/// # Errors
/// Returns an error if `year` is not a four-digit year.
pub fn validate_year(year: u16) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(CopyrightGuardError::Config(format!(
            "year must be a four-digit year ({MIN_YEAR}-{MAX_YEAR}), got {year}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
