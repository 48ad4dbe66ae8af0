//! # ovt-cli — Venue Taxonomy Command-Line Interface
//!
//! ```bash
//! ovt --build-version 1.1 --test-only   # validate only
//! ovt -b 1.1                            # validate, then write specification.md
//! ovt -b 1.1 --promote                  # ... and copy it to the current spec
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; [`generate::run_generate`] holds the
//!   orchestration and takes its console and working directory as
//!   parameters so it can be driven from tests.
//! - Validation, rendering and promotion are delegated to `ovt-validate` and
//!   `ovt-publish`.

pub mod config;
pub mod console;
pub mod generate;
pub mod report;
