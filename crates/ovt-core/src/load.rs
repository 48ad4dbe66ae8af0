//! # Document Loading
//!
//! Reads `specification.json` either as untyped JSON (for validation) or as
//! the typed [`TaxonomyDocument`] (for rendering and promotion).

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::error::TaxonomyError;
use crate::model::TaxonomyDocument;

fn read(path: &Path) -> Result<Vec<u8>, TaxonomyError> {
    std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => TaxonomyError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => TaxonomyError::Io(e),
    })
}

/// Load a document as untyped JSON.
///
/// # Errors
///
/// [`TaxonomyError::FileNotFound`] if the file is missing,
/// [`TaxonomyError::InvalidJson`] if it is not valid JSON, including bytes
/// that are not UTF-8.
pub fn load_document_value(path: &Path) -> Result<Value, TaxonomyError> {
    let content = read(path)?;
    let value = serde_json::from_slice(&content).map_err(|source| TaxonomyError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "loaded taxonomy JSON");
    Ok(value)
}

/// Convert an already-parsed value into the typed model.
///
/// `path` is only used for error context.
pub fn parse_document(value: Value, path: &Path) -> Result<TaxonomyDocument, TaxonomyError> {
    serde_json::from_value(value).map_err(|source| TaxonomyError::Shape {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and deserialize a document into the typed model.
///
/// # Errors
///
/// As [`load_document_value`], plus [`TaxonomyError::Shape`] if the JSON
/// does not match the model.
pub fn load_document(path: &Path) -> Result<TaxonomyDocument, TaxonomyError> {
    let value = load_document_value(path)?;
    parse_document(value, path)
}
