//! # Build Version
//!
//! The version label selects `<spec_dir>/<version>/`. It is validated at
//! construction so it can never escape the specification root.

use serde::{Deserialize, Serialize};

use crate::error::TaxonomyError;

/// The version of the taxonomy being built, e.g. `"1.1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildVersion(String);

impl BuildVersion {
    /// Create a build version, validating that it is a plain directory name.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::InvalidVersion`] if the label is empty,
    /// is `.` or `..`, or contains a path separator.
    pub fn new(value: impl Into<String>) -> Result<Self, TaxonomyError> {
        let raw = value.into();
        let trimmed = raw.trim();
        let reason = if trimmed.is_empty() {
            Some("must not be empty")
        } else if trimmed == "." || trimmed == ".." {
            Some("must not be a relative directory reference")
        } else if trimmed.contains(['/', '\\']) {
            Some("must not contain path separators")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(TaxonomyError::InvalidVersion { value: raw, reason }),
            None => Ok(Self(trimmed.to_string())),
        }
    }

    /// Access the version label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BuildVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BuildVersion {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for BuildVersion {
    type Error = TaxonomyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BuildVersion> for String {
    fn from(v: BuildVersion) -> Self {
        v.0
    }
}

impl PartialEq<str> for BuildVersion {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
