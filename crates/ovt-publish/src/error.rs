use std::path::PathBuf;

use ovt_core::TaxonomyError;
use thiserror::Error;

/// Failure while writing or promoting a specification.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Only accepted versions may be promoted.
    #[error("cannot promote: status is '{status}', expected 'accepted'")]
    NotAccepted {
        /// The document's actual status.
        status: String,
    },

    /// The document describes a different version than the one requested.
    #[error("build version {build_version} does not match JSON version {document_version}")]
    VersionMismatch {
        build_version: String,
        document_version: String,
    },

    /// Copying a file into the specification root failed.
    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Loading the document or header failed.
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
