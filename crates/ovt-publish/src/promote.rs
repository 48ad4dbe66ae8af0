//! # Promotion
//!
//! Makes a version the current published one by copying its
//! `specification.json` and `specification.md` into the specification root.
//!
//! The JSON is re-read from disk so the checks apply to the exact file being
//! copied. Copies happen in [`PROMOTED_FILES`] order and are not rolled back:
//! if the second copy fails, the first stays in place.

use std::path::PathBuf;

use ovt_core::{load_document, BuildVersion, SpecLayout, TaxonomyDocument, PROMOTED_FILES};

use crate::error::PublishError;

/// Check that `document` may be promoted as `version`.
///
/// # Errors
///
/// [`PublishError::NotAccepted`] unless `status` is `accepted`;
/// [`PublishError::VersionMismatch`] unless `version` matches.
pub fn check_promotable(
    document: &TaxonomyDocument,
    version: &BuildVersion,
) -> Result<(), PublishError> {
    let taxonomy = &document.taxonomy;
    if !taxonomy.is_accepted() {
        return Err(PublishError::NotAccepted {
            status: taxonomy.status.clone(),
        });
    }
    if *version != *taxonomy.version {
        return Err(PublishError::VersionMismatch {
            build_version: version.to_string(),
            document_version: taxonomy.version.clone(),
        });
    }
    Ok(())
}

/// Promote `version` to current. Returns the destination paths written.
pub fn promote(layout: &SpecLayout, version: &BuildVersion) -> Result<Vec<PathBuf>, PublishError> {
    let document = load_document(&layout.json_path(version))?;
    check_promotable(&document, version)?;

    tracing::info!(%version, "promoting to current");
    let source_dir = layout.version_dir(version);
    let mut copied = Vec::with_capacity(PROMOTED_FILES.len());
    for file_name in PROMOTED_FILES {
        let from = source_dir.join(file_name);
        let to = layout.current_path(file_name);
        std::fs::copy(&from, &to).map_err(|source| PublishError::Copy {
            from: from.clone(),
            to: to.clone(),
            source,
        })?;
        tracing::info!(from = %from.display(), to = %to.display(), "copied");
        copied.push(to);
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ovt_core::{Specification, Taxonomy};

    fn document(version: &str, status: &str) -> TaxonomyDocument {
        TaxonomyDocument {
            taxonomy: Taxonomy {
                version: version.to_string(),
                repository: "r".to_string(),
                organization: "o".to_string(),
                status: status.to_string(),
                specification: Specification { categories: vec![] },
            },
        }
    }

    #[test]
    fn accepted_matching_version_is_promotable() {
        let version = BuildVersion::new("1.1").unwrap();
        assert!(check_promotable(&document("1.1", "accepted"), &version).is_ok());
    }

    #[test]
    fn draft_is_not_promotable() {
        let version = BuildVersion::new("1.1").unwrap();
        let err = check_promotable(&document("1.1", "draft"), &version).unwrap_err();
        assert!(matches!(err, PublishError::NotAccepted { ref status } if status == "draft"));
    }

    #[test]
    fn status_comparison_is_exact() {
        let version = BuildVersion::new("1.1").unwrap();
        assert!(check_promotable(&document("1.1", "Accepted"), &version).is_err());
    }

    #[test]
    fn version_mismatch_is_not_promotable() {
        let version = BuildVersion::new("1.1").unwrap();
        let err = check_promotable(&document("1.0", "accepted"), &version).unwrap_err();
        assert_eq!(err.to_string(), "build version 1.1 does not match JSON version 1.0");
    }
}
