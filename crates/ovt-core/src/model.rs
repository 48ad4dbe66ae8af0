//! # Taxonomy Document Model
//!
//! Typed view of `specification.json`. The tree has a fixed depth of three:
//! [`Category`] → [`ChildCategory`] → [`GrandchildCategory`].
//!
//! The typed model is only deserialized once the untyped document has passed
//! validation; the validator works on `serde_json::Value` so that it can
//! report every missing field rather than stopping at the first one.
//!
//! `children` is an `Option<Vec<_>>` on purpose: a node with an empty
//! `children` array still gets a (empty) table in the rendered document,
//! while a node without the key gets none.

use serde::{Deserialize, Serialize};

/// Name of the single key at the root of the document.
pub const ROOT_KEY: &str = "openooh_venue_taxonomy";

/// Keys required directly under [`ROOT_KEY`].
pub const TOP_LEVEL_KEYS: [&str; 5] = [
    "version",
    "repository",
    "organization",
    "status",
    "specification",
];

/// Keys required on every category node, at every depth.
pub const CATEGORY_KEYS: [&str; 4] = ["name", "description", "enumeration_id", "string_value"];

/// The `status` value that makes a version eligible for promotion.
pub const ACCEPTED_STATUS: &str = "accepted";

/// The whole `specification.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyDocument {
    /// Content under the `openooh_venue_taxonomy` key.
    #[serde(rename = "openooh_venue_taxonomy")]
    pub taxonomy: Taxonomy,
}

/// Document metadata plus the category tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// Version label; must match the directory it lives in.
    pub version: String,
    /// Source repository URL.
    pub repository: String,
    /// Publishing organization.
    pub organization: String,
    /// Lifecycle status, e.g. `draft` or `accepted`.
    pub status: String,
    /// The category tree.
    pub specification: Specification,
}

/// Wrapper holding the ordered top-level categories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specification {
    /// Top-level categories in document order.
    pub categories: Vec<Category>,
}

/// Top-level category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub description: String,
    pub enumeration_id: i64,
    pub string_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ChildCategory>>,
}

/// Second-level category. Its id lies in `[parent*100+1, parent*100+99]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildCategory {
    pub name: String,
    pub description: String,
    pub enumeration_id: i64,
    pub string_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<GrandchildCategory>>,
}

/// Third-level category. Leaf of the tree; never has children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrandchildCategory {
    pub name: String,
    pub description: String,
    pub enumeration_id: i64,
    pub string_value: String,
}

impl Taxonomy {
    /// Returns true if the document may be promoted.
    pub fn is_accepted(&self) -> bool {
        self.status == ACCEPTED_STATUS
    }
}

impl TaxonomyDocument {
    /// Top-level categories in document order.
    pub fn categories(&self) -> &[Category] {
        &self.taxonomy.specification.categories
    }

    /// Total number of nodes across all three levels.
    pub fn node_count(&self) -> usize {
        self.categories()
            .iter()
            .map(|c| {
                1 + c
                    .children()
                    .iter()
                    .map(|child| 1 + child.children().len())
                    .sum::<usize>()
            })
            .sum()
    }
}

impl Category {
    /// Child categories, empty when the key is absent.
    pub fn children(&self) -> &[ChildCategory] {
        self.children.as_deref().unwrap_or_default()
    }
}

impl ChildCategory {
    /// Grandchild categories, empty when the key is absent.
    pub fn children(&self) -> &[GrandchildCategory] {
        self.children.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "openooh_venue_taxonomy": {
                "version": "1.1",
                "repository": "https://github.com/openooh/venue-taxonomy",
                "organization": "OpenOOH",
                "status": "accepted",
                "specification": {
                    "categories": [
                        {
                            "name": "Retail",
                            "description": "Shops",
                            "enumeration_id": 2,
                            "string_value": "retail",
                            "children": [
                                {
                                    "name": "Mall",
                                    "description": "Indoor mall",
                                    "enumeration_id": 201,
                                    "string_value": "retail.mall",
                                    "children": [
                                        {
                                            "name": "Food Court",
                                            "description": "Eating area",
                                            "enumeration_id": 20101,
                                            "string_value": "retail.mall.food_court"
                                        }
                                    ]
                                }
                            ]
                        },
                        {
                            "name": "Transit",
                            "description": "Stations",
                            "enumeration_id": 1,
                            "string_value": "transit"
                        }
                    ]
                }
            }
        })
    }

    #[test]
    fn deserializes_three_levels() {
        let doc: TaxonomyDocument = serde_json::from_value(sample()).unwrap();
        assert_eq!(doc.taxonomy.version, "1.1");
        assert_eq!(doc.categories().len(), 2);
        let retail = &doc.categories()[0];
        assert_eq!(retail.children()[0].children()[0].enumeration_id, 20101);
        assert!(doc.categories()[1].children.is_none());
        assert_eq!(doc.node_count(), 4);
    }

    #[test]
    fn accepted_status() {
        let mut doc: TaxonomyDocument = serde_json::from_value(sample()).unwrap();
        assert!(doc.taxonomy.is_accepted());
        doc.taxonomy.status = "draft".to_string();
        assert!(!doc.taxonomy.is_accepted());
    }

    #[test]
    fn empty_children_array_is_kept_distinct_from_absent() {
        let mut value = sample();
        value["openooh_venue_taxonomy"]["specification"]["categories"][1]["children"] =
            serde_json::json!([]);
        let doc: TaxonomyDocument = serde_json::from_value(value).unwrap();
        assert_eq!(doc.categories()[1].children, Some(Vec::new()));
        assert!(doc.categories()[1].children().is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let mut value = sample();
        value["openooh_venue_taxonomy"]["specification"]["categories"][1]["notes"] =
            serde_json::json!("internal");
        assert!(serde_json::from_value::<TaxonomyDocument>(value).is_ok());
    }

    #[test]
    fn serialization_omits_absent_children() {
        let doc: TaxonomyDocument = serde_json::from_value(sample()).unwrap();
        let out = serde_json::to_value(&doc).unwrap();
        let transit = &out["openooh_venue_taxonomy"]["specification"]["categories"][1];
        assert!(transit.get("children").is_none());
    }
}
