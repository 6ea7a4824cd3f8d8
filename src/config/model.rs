use serde::{Deserialize, Serialize};

use crate::checker::DEFAULT_ORGANIZATION;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Smallest and largest years accepted for a pinned `year`.
pub const MIN_YEAR: u16 = 1000;
pub const MAX_YEAR: u16 = 9999;

/// Settings read from `.copyright-guard.toml`.
///
/// Every key is optional; an empty file is equivalent to `Config::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version. Only "1" is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Organization whose claim must appear in every checked file.
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Pin the year treated as "current" (for reproducible builds).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: None,
            organization: default_organization(),
            year: None,
        }
    }
}

fn default_organization() -> String {
    DEFAULT_ORGANIZATION.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
