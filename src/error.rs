use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyrightGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to access file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid copyright pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CopyrightGuardError {
    /// Short category name used as the heading of rendered errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileAccess { .. } => "FileAccess",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TOML",
            Self::JsonSerialize(_) => "JSON",
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::FileAccess { path, .. } => path.display().to_string(),
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::TomlParse(e) => e
                .span()
                .map(|span| format!("at bytes {}..{}", span.start, span.end)),
            Self::Config(_) | Self::Io(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Actionable hint for the user, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("Check the config file format and allowed keys"),
            Self::FileAccess { source, .. } | Self::Io(source) => io_suggestion(source),
            Self::InvalidPattern { .. } => {
                Some("Check the organization name passed to the checker")
            }
            Self::TomlParse(_) => Some("Check TOML syntax: strings must be quoted, keys unique"),
            Self::JsonSerialize(_) => None,
        }
    }
}

fn io_suggestion(source: &std::io::Error) -> Option<&'static str> {
    match source.kind() {
        std::io::ErrorKind::NotFound => Some("Check that the file path exists"),
        std::io::ErrorKind::PermissionDenied => Some("Check file permissions"),
        _ => None,
    }
}

pub type Result<T> = std::result::Result<T, CopyrightGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
