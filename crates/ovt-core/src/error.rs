//! # Error Types
//!
//! Only genuinely exceptional conditions are errors here: a file that is not
//! there when opened, bytes that are not JSON, a build version that cannot
//! name a directory. Data-shape problems inside a parsed document are
//! validation findings, reported by `ovt-validate`, not errors.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for taxonomy loading and path resolution.
#[derive(Error, Debug)]
pub enum TaxonomyError {
    /// A required file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// The path that was opened.
        path: PathBuf,
    },

    /// The file exists but does not contain valid JSON.
    #[error("invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser error with line and column.
        #[source]
        source: serde_json::Error,
    },

    /// The JSON is well-formed but does not match the taxonomy model.
    #[error("document shape error in {}: {source}", path.display())]
    Shape {
        /// The file that failed to deserialize.
        path: PathBuf,
        /// Deserializer error naming the offending field.
        #[source]
        source: serde_json::Error,
    },

    /// The build version cannot be used as a directory name.
    #[error("invalid build version '{value}': {reason}")]
    InvalidVersion {
        /// The rejected label.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TaxonomyError {
    /// Returns true for the missing-resource failure class.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::FileNotFound { .. })
    }

    /// Returns true for the malformed-input failure class.
    pub fn is_invalid_json(&self) -> bool {
        matches!(self, Self::InvalidJson { .. })
    }
}
