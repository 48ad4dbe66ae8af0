//! # Check Contract
//!
//! A check inspects the version directory or the parsed document and
//! produces a [`CheckResult`]. Checks never return `Err`: a missing file or a
//! bad field is a finding, not an exception.

use std::fmt;

use ovt_core::{BuildVersion, SpecLayout};
use serde_json::Value;

use crate::pipeline::ValidationOptions;

/// Severity of a single finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingLevel {
    Ok,
    Warn,
    Fail,
}

impl FindingLevel {
    /// Fixed-width tag used in console reports.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Ok => "  OK  ",
            Self::Warn => " WARN ",
            Self::Fail => " FAIL ",
        }
    }
}

/// One line of a check's report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub level: FindingLevel,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.level.tag(), self.message)
    }
}

/// Outcome of a whole check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    Failed,
    /// Not run because an earlier check failed or no document was loaded.
    Skipped,
}

/// Structured result of running one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: &'static str,
    pub description: &'static str,
    pub status: CheckStatus,
    pub findings: Vec<Finding>,
}

impl CheckResult {
    /// Start a result for `check`. It passes until a failure is recorded.
    pub fn new(check: &(impl Check + ?Sized)) -> Self {
        Self {
            name: check.name(),
            description: check.description(),
            status: CheckStatus::Passed,
            findings: Vec::new(),
        }
    }

    /// A result for a check that did not run.
    pub fn skipped(check: &(impl Check + ?Sized), reason: impl Into<String>) -> Self {
        Self {
            name: check.name(),
            description: check.description(),
            status: CheckStatus::Skipped,
            findings: vec![Finding {
                level: FindingLevel::Warn,
                message: reason.into(),
            }],
        }
    }

    pub fn ok(&mut self, message: impl Into<String>) {
        self.push(FindingLevel::Ok, message);
    }

    /// Record a warning. Does not affect the status.
    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(FindingLevel::Warn, message);
    }

    /// Record a failure and mark the check failed.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.status = CheckStatus::Failed;
        self.push(FindingLevel::Fail, message);
    }

    fn push(&mut self, level: FindingLevel, message: impl Into<String>) {
        self.findings.push(Finding {
            level,
            message: message.into(),
        });
    }

    pub fn passed(&self) -> bool {
        self.status == CheckStatus::Passed
    }

    pub fn failed(&self) -> bool {
        self.status == CheckStatus::Failed
    }

    /// Findings at the given level.
    pub fn findings_at(&self, level: FindingLevel) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.level == level)
    }
}

/// State shared by the checks of one pipeline run.
#[derive(Debug)]
pub struct CheckContext<'a> {
    pub layout: &'a SpecLayout,
    pub version: &'a BuildVersion,
    pub options: ValidationOptions,
    document: Option<Value>,
}

impl<'a> CheckContext<'a> {
    pub fn new(layout: &'a SpecLayout, version: &'a BuildVersion, options: ValidationOptions) -> Self {
        Self {
            layout,
            version,
            options,
            document: None,
        }
    }

    /// The parsed `specification.json`, once the syntax check has run.
    pub fn document(&self) -> Option<&Value> {
        self.document.as_ref()
    }

    pub fn set_document(&mut self, document: Value) {
        self.document = Some(document);
    }

    pub(crate) fn take_document(&mut self) -> Option<Value> {
        self.document.take()
    }
}

/// A single named validation step.
pub trait Check {
    /// Stable identifier, e.g. `structure`.
    fn name(&self) -> &'static str;

    /// Heading printed before the findings.
    fn description(&self) -> &'static str;

    /// Run even when an earlier check has failed.
    fn always_run(&self) -> bool {
        false
    }

    /// Needs the parsed document; skipped when none is available.
    fn requires_document(&self) -> bool {
        false
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dummy;

    impl Check for Dummy {
        fn name(&self) -> &'static str {
            "dummy"
        }
        fn description(&self) -> &'static str {
            "Dummy check"
        }
        fn run(&self, _ctx: &mut CheckContext<'_>) -> CheckResult {
            CheckResult::new(self)
        }
    }

    #[test]
    fn warnings_do_not_fail() {
        let mut result = CheckResult::new(&Dummy);
        result.ok("first");
        result.warn("second");
        assert!(result.passed());
        assert_eq!(result.findings_at(FindingLevel::Warn).count(), 1);
    }

    #[test]
    fn failure_sticks() {
        let mut result = CheckResult::new(&Dummy);
        result.fail("broken");
        result.ok("later item fine");
        assert!(result.failed());
    }

    #[test]
    fn finding_display_uses_tag() {
        let finding = Finding {
            level: FindingLevel::Fail,
            message: "key missing".to_string(),
        };
        assert_eq!(finding.to_string(), " FAIL  : key missing");
    }

    #[test]
    fn skipped_is_neither_passed_nor_failed() {
        let result = CheckResult::skipped(&Dummy, "earlier check failed");
        assert!(!result.passed());
        assert!(!result.failed());
    }
}
