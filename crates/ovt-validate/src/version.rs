//! # Version Match Check

use ovt_core::ROOT_KEY;
use serde_json::Value;

use crate::check::{Check, CheckContext, CheckResult};

/// The document's `version` equals the build version requested.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionMatchCheck;

impl Check for VersionMatchCheck {
    fn name(&self) -> &'static str {
        "version-match"
    }

    fn description(&self) -> &'static str {
        "Verifying that the json version matches the build version"
    }

    fn requires_document(&self) -> bool {
        true
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self);
        let build_version = ctx.version;
        let json_version = ctx
            .document()
            .and_then(|doc| doc.get(ROOT_KEY))
            .and_then(|root| root.get("version"))
            .and_then(Value::as_str);
        match json_version {
            Some(v) if *build_version == *v => {
                result.ok(format!("Build version {build_version} matches json"));
            }
            Some(v) => result.fail(format!(
                "Build version {build_version} does not match JSON version {v}"
            )),
            None => result.fail(format!(
                "JSON has no `{ROOT_KEY}.version` to compare with build version {build_version}"
            )),
        }
        result
    }
}
