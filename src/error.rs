//! Error types for the plan conversion pipeline.
//!
//! The document builder itself never fails. Everything that can go wrong
//! lives at the edges: settings, reading the plan export, and emitting the
//! finished document.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for tfjson.
#[derive(Debug, Error)]
pub enum TfjsonError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Plan loading errors.
    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),

    /// Document serialization errors.
    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting has an invalid value.
    #[error("Invalid value for {field}: {message}")]
    Invalid {
        /// Name of the offending setting.
        field: String,
        /// Description of the problem.
        message: String,
    },

    /// The `.env` file exists but could not be loaded.
    #[error("Failed to load {path}: {message}")]
    Dotenv {
        /// Path to the `.env` file.
        path: PathBuf,
        /// Description of the load failure.
        message: String,
    },
}

/// Errors raised while reading a plan export.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The plan file was not found.
    #[error("Plan file not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// The plan file exists but could not be read.
    #[error("Failed to read plan file {path}: {source}")]
    Read {
        /// Path to the unreadable file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The plan content could not be decoded.
    #[error("Failed to parse plan{}: {message}", format_location(.location))]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Optional source location.
        location: Option<String>,
    },

    /// The plan was written by a newer exporter.
    #[error("Unsupported plan format version: found {found}, supported up to {supported}")]
    UnsupportedVersion {
        /// Version declared by the plan.
        found: u32,
        /// Highest version this reader understands.
        supported: u32,
    },
}

/// Errors raised while serializing a document.
#[derive(Debug, Error)]
pub enum EmitError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization failed.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The serializer produced bytes that are not UTF-8.
    #[error("Serialized output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Renders an optional source location as a parenthesized suffix.
fn format_location(location: &Option<String>) -> String {
    location
        .as_ref()
        .map(|l| format!(" ({l})"))
        .unwrap_or_default()
}

/// Result type alias for tfjson operations.
pub type Result<T> = std::result::Result<T, TfjsonError>;

impl ConfigError {
    /// Creates an invalid-setting error.
    #[must_use]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl PlanError {
    /// Creates a parse error for the given source location.
    #[must_use]
    pub fn parse(message: impl Into<String>, location: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_with_location() {
        let err = PlanError::parse("expected value", Some(String::from("plan.json")));
        assert_eq!(
            err.to_string(),
            "Failed to parse plan (plan.json): expected value"
        );
    }

    #[test]
    fn test_parse_error_without_location() {
        let err = PlanError::parse("expected value", None);
        assert_eq!(err.to_string(), "Failed to parse plan: expected value");
    }

    #[test]
    fn test_top_level_wrapping() {
        let err: TfjsonError = ConfigError::invalid("indent", "must be at most 16").into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for indent: must be at most 16"
        );
    }
}
