//! # File Presence and Syntax Checks
//!
//! Checks 1–4: the version directory, both input files, and JSON syntax.

use ovt_core::load_document_value;

use crate::check::{Check, CheckContext, CheckResult};

/// The version directory exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionDirectoryCheck;

impl Check for VersionDirectoryCheck {
    fn name(&self) -> &'static str {
        "version-directory"
    }

    fn description(&self) -> &'static str {
        "Verifying that the version directory exists"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self);
        let path = ctx.layout.version_dir(ctx.version);
        if path.is_dir() {
            result.ok(format!("Directory {} exists", path.display()));
        } else {
            result.fail(format!("Directory {} does not exist", path.display()));
        }
        result
    }
}

/// `specification.json` exists in the version directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileCheck;

impl Check for JsonFileCheck {
    fn name(&self) -> &'static str {
        "specification-json"
    }

    fn description(&self) -> &'static str {
        "Verifying that the json file exists"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self);
        let path = ctx.layout.json_path(ctx.version);
        if path.is_file() {
            result.ok(format!("json file {} exists", path.display()));
        } else {
            result.fail(format!("{} does not exist", path.display()));
        }
        result
    }
}

/// `specification.header.md` exists in the version directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderFileCheck;

impl Check for HeaderFileCheck {
    fn name(&self) -> &'static str {
        "specification-header"
    }

    fn description(&self) -> &'static str {
        "Verifying that the header file exists"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self);
        let path = ctx.layout.header_path(ctx.version);
        if path.is_file() {
            result.ok(format!("header {} exists", path.display()));
        } else {
            result.fail(format!("{} does not exist", path.display()));
        }
        result
    }
}

/// `specification.json` parses. Stores the parsed value in the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSyntaxCheck;

impl Check for JsonSyntaxCheck {
    fn name(&self) -> &'static str {
        "json-syntax"
    }

    fn description(&self) -> &'static str {
        "Validating json data"
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self);
        let path = ctx.layout.json_path(ctx.version);
        match load_document_value(&path) {
            Ok(value) => {
                ctx.set_document(value);
                result.ok("json data ok");
            }
            Err(e) => result.fail(e.to_string()),
        }
        result
    }
}
