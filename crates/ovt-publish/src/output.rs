//! # Writing `specification.md`
//!
//! The generated document is the hand-written header, a newline, the
//! rendered tables and a trailing newline. An existing `specification.md` is
//! only replaced after the [`ConfirmOverwrite`] collaborator agrees.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ovt_core::{BuildVersion, SpecLayout, TaxonomyDocument, TaxonomyError};

use crate::error::PublishError;
use crate::markdown::render_markdown;

/// Asks whether an existing output file may be replaced.
pub trait ConfirmOverwrite {
    /// Return `Ok(true)` to overwrite `path`.
    fn confirm_overwrite(&mut self, path: &Path) -> std::io::Result<bool>;
}

/// Overwrites without asking (`--yes`).
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysOverwrite;

impl ConfirmOverwrite for AlwaysOverwrite {
    fn confirm_overwrite(&mut self, _path: &Path) -> std::io::Result<bool> {
        Ok(true)
    }
}

/// What [`write_specification`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was written.
    Written(PathBuf),
    /// The file existed and the operator declined to overwrite it.
    Declined(PathBuf),
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Declined(path) => path,
        }
    }
}

/// `header + "\n" + markup + "\n"`.
pub fn assemble_specification(header: &str, markup: &str) -> String {
    let mut out = String::with_capacity(header.len() + markup.len() + 2);
    out.push_str(header);
    out.push('\n');
    out.push_str(markup);
    out.push('\n');
    out
}

/// Read the version's header and combine it with the rendered tables.
///
/// # Errors
///
/// [`TaxonomyError::FileNotFound`] if the header file is missing.
pub fn build_specification(
    layout: &SpecLayout,
    version: &BuildVersion,
    document: &TaxonomyDocument,
) -> Result<String, PublishError> {
    let header_path = layout.header_path(version);
    let header = std::fs::read_to_string(&header_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PublishError::Taxonomy(TaxonomyError::FileNotFound {
            path: header_path.clone(),
        }),
        _ => PublishError::Io(e),
    })?;
    Ok(assemble_specification(&header, &render_markdown(document)))
}

/// Write `contents` to the version's `specification.md`.
///
/// If the file exists, `confirm` decides whether it is replaced. A declined
/// overwrite is not an error.
pub fn write_specification(
    layout: &SpecLayout,
    version: &BuildVersion,
    contents: &str,
    confirm: &mut dyn ConfirmOverwrite,
) -> Result<WriteOutcome, PublishError> {
    let path = layout.markdown_path(version);
    if path.exists() && !confirm.confirm_overwrite(&path)? {
        tracing::info!(path = %path.display(), "overwrite declined; specification not written");
        return Ok(WriteOutcome::Declined(path));
    }
    std::fs::write(&path, contents)?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "specification markdown written");
    Ok(WriteOutcome::Written(path))
}
