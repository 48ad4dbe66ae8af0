//! # ovt-publish — Generating and Promoting Specification Documents
//!
//! Everything here assumes the version directory already passed
//! `ovt-validate`.
//!
//! - [`markdown`] — pure rendering of the category tree into three tables.
//! - [`output`] — assembling header + tables and writing `specification.md`,
//!   asking before an existing file is overwritten.
//! - [`mod@promote`] — copying an accepted version's `specification.json` and
//!   `specification.md` into the specification root.

pub mod error;
pub mod markdown;
pub mod output;
pub mod promote;

pub use error::PublishError;
pub use markdown::render_markdown;
pub use output::{
    assemble_specification, build_specification, write_specification, AlwaysOverwrite,
    ConfirmOverwrite, WriteOutcome,
};
pub use promote::{check_promotable, promote};
