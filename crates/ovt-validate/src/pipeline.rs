//! # Validation Pipeline
//!
//! Runs an ordered list of checks, short-circuiting on the first failure
//! except for checks that declare [`Check::always_run`].

use ovt_core::{BuildVersion, SpecLayout};
use serde_json::Value;

use crate::check::{Check, CheckContext, CheckResult, CheckStatus, FindingLevel};
use crate::enumeration::{EnumerationRangeCheck, EnumerationUniquenessCheck};
use crate::files::{HeaderFileCheck, JsonFileCheck, JsonSyntaxCheck, VersionDirectoryCheck};
use crate::structure::StructureCheck;
use crate::version::VersionMatchCheck;

/// Policy knobs for the standard checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Treat out-of-range child enumeration ids as failures rather than
    /// warnings.
    pub strict_enumeration_ranges: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            strict_enumeration_ranges: true,
        }
    }
}

/// Ordered collection of checks.
pub struct Validator {
    options: ValidationOptions,
    checks: Vec<Box<dyn Check>>,
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("options", &self.options)
            .field("checks", &self.check_names())
            .finish()
    }
}

impl Validator {
    /// An empty pipeline. Add checks with [`Validator::with_check`].
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            checks: Vec::new(),
        }
    }

    /// The eight standard checks in their fixed order.
    pub fn standard(options: ValidationOptions) -> Self {
        Self::new(options)
            .with_check(VersionDirectoryCheck)
            .with_check(JsonFileCheck)
            .with_check(HeaderFileCheck)
            .with_check(JsonSyntaxCheck)
            .with_check(StructureCheck)
            .with_check(EnumerationRangeCheck)
            .with_check(EnumerationUniquenessCheck)
            .with_check(VersionMatchCheck)
    }

    /// Append a check to the end of the pipeline.
    pub fn with_check(mut self, check: impl Check + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run every check against `<layout>/<version>/`.
    pub fn run(&self, layout: &SpecLayout, version: &BuildVersion) -> ValidationReport {
        let mut ctx = CheckContext::new(layout, version, self.options);
        let mut results = Vec::with_capacity(self.checks.len());
        let mut failed = false;

        for check in &self.checks {
            let check = check.as_ref();
            let result = if failed && !check.always_run() {
                CheckResult::skipped(check, "skipped after an earlier failure")
            } else if check.requires_document() && ctx.document().is_none() {
                CheckResult::skipped(check, "no parsed specification document available")
            } else {
                tracing::debug!(check = check.name(), "running check");
                check.run(&mut ctx)
            };

            match result.status {
                CheckStatus::Failed => {
                    tracing::warn!(
                        check = result.name,
                        failures = result.findings_at(FindingLevel::Fail).count(),
                        "check failed"
                    );
                    failed = true;
                }
                CheckStatus::Passed => tracing::debug!(check = result.name, "check passed"),
                CheckStatus::Skipped => tracing::debug!(check = result.name, "check skipped"),
            }
            results.push(result);
        }

        ValidationReport {
            results,
            document: ctx.take_document(),
        }
    }
}

/// Results of one pipeline run, in check order.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    results: Vec<CheckResult>,
    document: Option<Value>,
}

impl ValidationReport {
    /// True iff every check ran and passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(CheckResult::passed)
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Look up a result by check name.
    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// The first check that failed, if any.
    pub fn first_failure(&self) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.failed())
    }

    /// The parsed document, if the syntax check succeeded.
    pub fn document(&self) -> Option<&Value> {
        self.document.as_ref()
    }

    pub fn into_document(self) -> Option<Value> {
        self.document
    }
}
