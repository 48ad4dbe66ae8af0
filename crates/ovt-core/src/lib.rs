//! # ovt-core — Foundational Types for the Venue Taxonomy Toolchain
//!
//! Every other crate in the workspace depends on `ovt-core`; it depends on
//! nothing internal.
//!
//! ## Contents
//!
//! - [`model`] — the typed taxonomy document (`openooh_venue_taxonomy` root,
//!   categories, child categories, grandchild categories) and the well-known
//!   key names used when inspecting the untyped JSON.
//! - [`version`] — the [`BuildVersion`] newtype naming the version directory
//!   being built.
//! - [`layout`] — [`SpecLayout`], which maps a specification root and a
//!   build version to the files the toolchain reads and writes.
//! - [`load`] — reading `specification.json` as raw JSON or typed model,
//!   with distinguishable `FileNotFound` / `InvalidJson` failures.
//!
//! ## Crate Policy
//!
//! - No process-wide state. The build version and layout are always passed
//!   explicitly.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod layout;
pub mod load;
pub mod model;
pub mod version;

pub use error::TaxonomyError;
pub use layout::{
    discover_spec_dir, SpecLayout, PROMOTED_FILES, SPECIFICATION_HEADER, SPECIFICATION_JSON,
    SPECIFICATION_MARKDOWN,
};
pub use load::{load_document, load_document_value, parse_document};
pub use model::{
    Category, ChildCategory, GrandchildCategory, Specification, Taxonomy, TaxonomyDocument,
    ACCEPTED_STATUS, CATEGORY_KEYS, ROOT_KEY, TOP_LEVEL_KEYS,
};
pub use version::BuildVersion;
