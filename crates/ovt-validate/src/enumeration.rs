//! # Enumeration ID Checks
//!
//! Every node carries an integer `enumeration_id`. A child's id must lie in
//! `[parent*100 + 1, parent*100 + 99]`, and ids are unique across the whole
//! tree.
//!
//! Both checks read the untyped document and tolerate shape problems (those
//! belong to the structure check): nodes without an integer id are skipped.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use ovt_core::ROOT_KEY;
use serde_json::Value;

use crate::check::{Check, CheckContext, CheckResult};
use crate::structure::{node_label, Depth};

/// The inclusive id range allowed for children of `parent_id`.
///
/// Returns `None` if the bounds overflow `i64`.
pub fn enumeration_range(parent_id: i64) -> Option<RangeInclusive<i64>> {
    let base = parent_id.checked_mul(100)?;
    Some(base.checked_add(1)?..=base.checked_add(99)?)
}

fn categories(document: &Value) -> &[Value] {
    document
        .get(ROOT_KEY)
        .and_then(|root| root.get("specification"))
        .and_then(|spec| spec.get("categories"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn children(node: &Value) -> &[Value] {
    node.get("children")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn enumeration_id(node: &Value) -> Option<i64> {
    node.get("enumeration_id").and_then(Value::as_i64)
}

/// Child and grandchild ids fall inside their parent's range.
///
/// Strict mode reports violations as failures; otherwise as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerationRangeCheck;

impl Check for EnumerationRangeCheck {
    fn name(&self) -> &'static str {
        "enumeration-ranges"
    }

    fn description(&self) -> &'static str {
        "Validating enumeration_id ranges"
    }

    fn requires_document(&self) -> bool {
        true
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self);
        let strict = ctx.options.strict_enumeration_ranges;
        if let Some(document) = ctx.document() {
            for category in categories(document) {
                check_children(&mut result, category, Depth::Child, strict);
            }
        }
        result
    }
}

fn check_children(result: &mut CheckResult, parent: &Value, depth: Depth, strict: bool) {
    let Some(parent_id) = enumeration_id(parent) else {
        return;
    };
    for (index, child) in children(parent).iter().enumerate() {
        let Some(id) = enumeration_id(child) else {
            continue;
        };
        let name = node_label(child, index);
        let indent = depth.indent();
        match enumeration_range(parent_id) {
            Some(range) if range.contains(&id) => result.ok(format!(
                "{indent}enumeration_id {id} for {name} is within {}-{}",
                range.start(),
                range.end()
            )),
            Some(range) => {
                let message = format!(
                    "{indent}enumeration_id {id} for {name} must be between {} - {}",
                    range.start(),
                    range.end()
                );
                if strict {
                    result.fail(message);
                } else {
                    result.warn(message);
                }
            }
            None => {
                let message = format!(
                    "{indent}enumeration_id range for children of {parent_id} overflows"
                );
                if strict {
                    result.fail(message);
                } else {
                    result.warn(message);
                }
            }
        }
        if let Some(next) = depth.next() {
            check_children(result, child, next, strict);
        }
    }
}

/// Every integer `enumeration_id` in the tree, in document order
/// (depth first, parent before its children).
pub fn collect_enumeration_ids(document: &Value) -> Vec<i64> {
    fn walk(node: &Value, remaining_depth: usize, ids: &mut Vec<i64>) {
        ids.extend(enumeration_id(node));
        if remaining_depth > 0 {
            for child in children(node) {
                walk(child, remaining_depth - 1, ids);
            }
        }
    }

    let mut ids = Vec::new();
    for category in categories(document) {
        walk(category, 2, &mut ids);
    }
    ids
}

/// Ids that occur more than once, ascending, each listed once with its count.
pub fn duplicate_enumeration_ids(document: &Value) -> Vec<(i64, usize)> {
    count_duplicates(collect_enumeration_ids(document))
}

fn count_duplicates(ids: Vec<i64>) -> Vec<(i64, usize)> {
    let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
    for id in ids {
        *counts.entry(id).or_default() += 1;
    }
    counts.into_iter().filter(|&(_, n)| n > 1).collect()
}

/// No `enumeration_id` appears twice.
///
/// Runs even after an earlier failure so that every duplicate is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerationUniquenessCheck;

impl Check for EnumerationUniquenessCheck {
    fn name(&self) -> &'static str {
        "enumeration-uniqueness"
    }

    fn description(&self) -> &'static str {
        "Validation of unique enumeration_ids"
    }

    fn always_run(&self) -> bool {
        true
    }

    fn requires_document(&self) -> bool {
        true
    }

    fn run(&self, ctx: &mut CheckContext<'_>) -> CheckResult {
        let mut result = CheckResult::new(self);
        let Some(document) = ctx.document() else {
            return result;
        };
        let ids = collect_enumeration_ids(document);
        if ids.is_empty() {
            result.warn("no categories with an enumeration_id to inspect");
            return result;
        }
        let duplicates = count_duplicates(ids);
        if duplicates.is_empty() {
            result.ok("enumeration_id list is unique");
        } else {
            result.fail("enumeration_id list is not unique, there are duplicated ids in the spec");
            for (id, count) in duplicates {
                result.fail(format!("duplicate enumeration_id {id} (used {count} times)"));
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::FindingLevel;
    use crate::pipeline::ValidationOptions;
    use ovt_core::{BuildVersion, SpecLayout};
    use serde_json::json;

    fn node(name: &str, id: i64, children: Value) -> Value {
        json!({
            "name": name,
            "description": "d",
            "enumeration_id": id,
            "string_value": name,
            "children": children,
        })
    }

    fn leaf(name: &str, id: i64) -> Value {
        json!({ "name": name, "description": "d", "enumeration_id": id, "string_value": name })
    }

    fn document(categories: Value) -> Value {
        json!({ "openooh_venue_taxonomy": { "specification": { "categories": categories } } })
    }

    fn run_check(check: &dyn Check, document: Value, strict: bool) -> CheckResult {
        let layout = SpecLayout::new("/unused");
        let version = BuildVersion::new("1.0").unwrap();
        let options = ValidationOptions {
            strict_enumeration_ranges: strict,
        };
        let mut ctx = CheckContext::new(&layout, &version, options);
        ctx.set_document(document);
        check.run(&mut ctx)
    }

    #[test]
    fn range_bounds() {
        assert_eq!(enumeration_range(2), Some(201..=299));
        assert_eq!(enumeration_range(201), Some(20101..=20199));
        assert_eq!(enumeration_range(i64::MAX), None);
    }

    #[test]
    fn in_range_tree_passes() {
        let doc = document(json!([node("Retail", 2, json!([node("Mall", 201, json!([leaf("Food", 20101)]))]))]));
        let result = run_check(&EnumerationRangeCheck, doc, true);
        assert!(result.passed());
        assert_eq!(result.findings_at(FindingLevel::Ok).count(), 2);
    }

    #[test]
    fn child_out_of_range_fails_when_strict() {
        let doc = document(json!([node("Retail", 2, json!([leaf("Mall", 301)]))]));
        let result = run_check(&EnumerationRangeCheck, doc, true);
        assert!(result.failed());
        let fail = result.findings_at(FindingLevel::Fail).next().unwrap();
        assert_eq!(
            fail.message,
            "    enumeration_id 301 for Mall must be between 201 - 299"
        );
    }

    #[test]
    fn child_out_of_range_warns_when_advisory() {
        let doc = document(json!([node("Retail", 2, json!([leaf("Mall", 200)]))]));
        let result = run_check(&EnumerationRangeCheck, doc, false);
        assert!(result.passed());
        assert_eq!(result.findings_at(FindingLevel::Warn).count(), 1);
    }

    #[test]
    fn grandchild_range_uses_child_id() {
        let doc = document(json!([node("Retail", 2, json!([node("Mall", 201, json!([leaf("Food", 20201)]))]))]));
        let result = run_check(&EnumerationRangeCheck, doc, true);
        assert!(result.failed());
        assert!(result
            .findings_at(FindingLevel::Fail)
            .any(|f| f.message.contains("20101 - 20199")));
    }

    #[test]
    fn ids_collected_in_document_order() {
        let doc = document(json!([
            node("A", 1, json!([node("A1", 101, json!([leaf("A1a", 10101)]))])),
            leaf("B", 2),
        ]));
        assert_eq!(collect_enumeration_ids(&doc), vec![1, 101, 10101, 2]);
    }

    #[test]
    fn collection_ignores_malformed_nodes() {
        let doc = document(json!([
            { "name": "no id" },
            { "enumeration_id": "7" },
            leaf("ok", 3),
        ]));
        assert_eq!(collect_enumeration_ids(&doc), vec![3]);
    }

    #[test]
    fn duplicates_reported_across_levels() {
        let doc = document(json!([
            node("A", 1, json!([leaf("A1", 101), leaf("A2", 101)])),
            node("B", 2, json!([leaf("B1", 1), leaf("B2", 201)])),
            leaf("C", 201),
        ]));
        assert_eq!(duplicate_enumeration_ids(&doc), vec![(1, 2), (101, 2), (201, 2)]);

        let result = run_check(&EnumerationUniquenessCheck, doc, true);
        assert!(result.failed());
        let messages: Vec<_> = result
            .findings_at(FindingLevel::Fail)
            .map(|f| f.message.as_str())
            .collect();
        assert!(messages.contains(&"duplicate enumeration_id 1 (used 2 times)"));
        assert!(messages.contains(&"duplicate enumeration_id 101 (used 2 times)"));
        assert!(messages.contains(&"duplicate enumeration_id 201 (used 2 times)"));
    }

    #[test]
    fn unique_ids_pass() {
        let doc = document(json!([leaf("A", 1), leaf("B", 2)]));
        assert!(run_check(&EnumerationUniquenessCheck, doc, true).passed());
    }

    #[test]
    fn uniqueness_without_categories_warns_instead_of_passing_silently() {
        let doc = json!({
            "wrong_root": { "specification": { "categories": [leaf("A", 1), leaf("B", 1)] } }
        });
        let result = run_check(&EnumerationUniquenessCheck, doc, true);
        assert!(result.passed());
        assert_eq!(result.findings_at(FindingLevel::Ok).count(), 0);
        let warnings: Vec<_> = result
            .findings_at(FindingLevel::Warn)
            .map(|f| f.message.as_str())
            .collect();
        assert_eq!(warnings, ["no categories with an enumeration_id to inspect"]);
    }

    #[test]
    fn uniqueness_is_always_run() {
        assert!(EnumerationUniquenessCheck.always_run());
        assert!(!EnumerationRangeCheck.always_run());
    }
}
