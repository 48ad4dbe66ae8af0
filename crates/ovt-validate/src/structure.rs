//! # Structural Key Validation
//!
//! Walks the untyped document and reports every missing or mistyped key.
//!
//! - A missing root key, or any missing top-level key, fails the check
//!   without descending into the categories.
//! - Below `categories`, each node is checked independently: a bad node is
//!   reported and its siblings are still visited.
//! - Grandchild categories must not carry `children`.

use ovt_core::{CATEGORY_KEYS, ROOT_KEY, TOP_LEVEL_KEYS};
use serde_json::{Map, Value};

use crate::check::{Check, CheckContext, CheckResult};

/// Depth of a node in the category tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Depth {
    Category,
    Child,
    Grandchild,
}

impl Depth {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Child => "child category",
            Self::Grandchild => "grandchild category",
        }
    }

    pub(crate) fn indent(self) -> &'static str {
        match self {
            Self::Category => "",
            Self::Child => "    ",
            Self::Grandchild => "        ",
        }
    }

    /// Depth of this node's children, `None` for leaves.
    pub(crate) fn next(self) -> Option<Self> {
        match self {
            Self::Category => Some(Self::Child),
            Self::Child => Some(Self::Grandchild),
            Self::Grandchild => None,
        }
    }
}

/// Display name of a node: its `name` when it is a string, else its position.
pub(crate) fn node_label(node: &Value, index: usize) -> String {
    node.get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{index}"))
}

/// Required keys are present with the expected JSON types.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructureCheck;

impl Check for StructureCheck {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn description(&self) -> &'static str {
        "Validating json keys"
    }

    fn requires_document(&self) -> bool {
        true
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self);
        if let Some(document) = ctx.document() {
            check_document(&mut result, document);
        }
        result
    }
}

fn check_document(result: &mut CheckResult, document: &Value) {
    let root = match document.get(ROOT_KEY) {
        Some(Value::Object(root)) => root,
        Some(_) => {
            result.fail(format!("Base key `{ROOT_KEY}` must be an object"));
            return;
        }
        None => {
            result.fail(format!("Base key `{ROOT_KEY}` is missing"));
            return;
        }
    };
    result.ok(format!("{ROOT_KEY} key ok"));

    if !check_top_level(result, root) {
        return;
    }

    let categories = match root.get("specification").and_then(|s| s.get("categories")) {
        Some(Value::Array(categories)) => categories,
        Some(_) => {
            result.fail(format!(
                "key `{ROOT_KEY}.specification.categories` must be an array"
            ));
            return;
        }
        None => {
            result.fail(format!(
                "key `{ROOT_KEY}.specification.categories` is missing"
            ));
            return;
        }
    };
    result.ok(format!("{ROOT_KEY}.specification.categories ok"));

    for (index, category) in categories.iter().enumerate() {
        check_node(result, category, index, Depth::Category);
    }
}

/// Returns false if any top-level key is missing or mistyped.
fn check_top_level(result: &mut CheckResult, root: &Map<String, Value>) -> bool {
    let mut keys_ok = true;
    for key in TOP_LEVEL_KEYS {
        let expected = if key == "specification" { "an object" } else { "a string" };
        match root.get(key) {
            None => {
                result.fail(format!("key `{ROOT_KEY}.{key}` is missing"));
                keys_ok = false;
            }
            Some(value) if !top_level_type_ok(key, value) => {
                result.fail(format!("key `{ROOT_KEY}.{key}` must be {expected}"));
                keys_ok = false;
            }
            Some(_) => result.ok(format!("{ROOT_KEY}.{key} ok")),
        }
    }
    keys_ok
}

fn top_level_type_ok(key: &str, value: &Value) -> bool {
    if key == "specification" {
        value.is_object()
    } else {
        value.is_string()
    }
}

fn field_type_ok(key: &str, value: &Value) -> bool {
    if key == "enumeration_id" {
        value.as_i64().is_some()
    } else {
        value.is_string()
    }
}

fn check_node(result: &mut CheckResult, node: &Value, index: usize, depth: Depth) {
    let label = depth.label();
    let indent = depth.indent();
    let name = node_label(node, index);

    let Some(fields) = node.as_object() else {
        result.fail(format!("{indent}{label} {name} must be an object"));
        return;
    };

    for key in CATEGORY_KEYS {
        match fields.get(key) {
            None => result.fail(format!("{indent}key `{label} {name}.{key}` is missing")),
            Some(value) if !field_type_ok(key, value) => {
                let expected = if key == "enumeration_id" { "an integer" } else { "a string" };
                result.fail(format!("{indent}{label} {name}.{key} must be {expected}"));
            }
            Some(_) => result.ok(format!("{indent}{label} {name}.{key} ok")),
        }
    }

    let Some(children) = fields.get("children") else {
        return;
    };
    match (children, depth.next()) {
        (_, None) => result.fail(format!(
            "{indent}{label} {name} cannot have children beneath it"
        )),
        (Value::Array(children), Some(next)) => {
            for (index, child) in children.iter().enumerate() {
                check_node(result, child, index, next);
            }
        }
        (_, Some(_)) => result.fail(format!("{indent}{label} {name}.children must be an array")),
    }
}
