//! # ovt-validate — Taxonomy Validation Pipeline
//!
//! Validates a version directory of the venue taxonomy before anything is
//! generated from it. The standard pipeline runs these checks in order:
//!
//! | # | Check                    | Fails when                                        |
//! |---|--------------------------|---------------------------------------------------|
//! | 1 | `version-directory`      | `<spec_dir>/<version>/` is absent                 |
//! | 2 | `specification-json`     | `specification.json` is absent                    |
//! | 3 | `specification-header`   | `specification.header.md` is absent               |
//! | 4 | `json-syntax`            | the JSON does not parse                           |
//! | 5 | `structure`              | a required key is missing or has the wrong type   |
//! | 6 | `enumeration-ranges`     | a child id is outside `[parent*100+1, parent*100+99]` |
//! | 7 | `enumeration-uniqueness` | an `enumeration_id` appears more than once        |
//! | 8 | `version-match`          | the document version differs from the build version |
//!
//! The pipeline stops at the first failing check. Checks flagged
//! [`Check::always_run`] (uniqueness) still run after a failure, as long as a
//! parsed document is available, so that every duplicate id is reported in a
//! single pass.
//!
//! Each check returns a [`CheckResult`] with one [`Finding`] per item
//! inspected; [`ValidationReport::passed`] is the overall verdict.

pub mod check;
pub mod enumeration;
pub mod files;
pub mod pipeline;
pub mod structure;
pub mod version;

pub use check::{Check, CheckContext, CheckResult, CheckStatus, Finding, FindingLevel};
pub use enumeration::{collect_enumeration_ids, duplicate_enumeration_ids, enumeration_range};
pub use pipeline::{ValidationOptions, ValidationReport, Validator};
