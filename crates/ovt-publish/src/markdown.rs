//! # Markdown Tables
//!
//! Renders the category tree as three sections:
//!
//! 1. `## Parent Categories & IDs` — one table row per top-level category.
//! 2. `## Child Categories & IDs` — one `###` heading and table per category
//!    that has a `children` key.
//! 3. `## Grandchild Categories & IDs` — one `### <category> : <child>`
//!    heading and table per child category that has a `children` key.
//!
//! Every table is followed by a blank line. Section headings are emitted even
//! when a section has no tables.

use std::borrow::Cow;
use std::fmt;

use ovt_core::{Category, ChildCategory, TaxonomyDocument};

const PARENT_HEADER: &str = "|Parent Category|Enumeration ID|String Value|\n|---|---|---|\n";
const CHILD_HEADER: &str =
    "|Child Category|Category Definition|Enumeration ID|String Value|\n|---|---|---|---|\n";
const GRANDCHILD_HEADER: &str =
    "|Grandchild Category|Category Definition|Enumeration ID|String Value|\n|---|---|---|---|\n";

/// Render the three category sections for `document`.
pub fn render_markdown(document: &TaxonomyDocument) -> String {
    MarkdownTables(document).to_string()
}

/// `Display` adapter so rendering composes with `write!`.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownTables<'a>(pub &'a TaxonomyDocument);

impl fmt::Display for MarkdownTables<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let categories = self.0.categories();

        writeln!(f, "## Parent Categories & IDs")?;
        f.write_str(PARENT_HEADER)?;
        for category in categories {
            writeln!(
                f,
                "|{}|{}|{}|",
                cell(&category.name),
                category.enumeration_id,
                cell(&category.string_value)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "## Child Categories & IDs")?;
        for category in categories {
            if let Some(children) = &category.children {
                writeln!(f, "### {}", heading(&category.name))?;
                f.write_str(CHILD_HEADER)?;
                for child in children {
                    write_row(f, &child.name, &child.description, child.enumeration_id, &child.string_value)?;
                }
                writeln!(f)?;
            }
        }

        writeln!(f, "## Grandchild Categories & IDs")?;
        for (category, child) in children_with_grandchildren(categories) {
            writeln!(f, "### {} : {}", heading(&category.name), heading(&child.name))?;
            f.write_str(GRANDCHILD_HEADER)?;
            for grandchild in child.children() {
                write_row(
                    f,
                    &grandchild.name,
                    &grandchild.description,
                    grandchild.enumeration_id,
                    &grandchild.string_value,
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Child categories that carry a `children` key, paired with their parent.
fn children_with_grandchildren(
    categories: &[Category],
) -> impl Iterator<Item = (&Category, &ChildCategory)> {
    categories.iter().flat_map(|category| {
        category
            .children()
            .iter()
            .filter(|child| child.children.is_some())
            .map(move |child| (category, child))
    })
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    description: &str,
    enumeration_id: i64,
    string_value: &str,
) -> fmt::Result {
    writeln!(
        f,
        "|{}|{}|{}|{}|",
        cell(name),
        cell(description),
        enumeration_id,
        cell(string_value)
    )
}

/// Escape text for a table cell: pipes would split the cell and line breaks
/// would end the row.
fn cell(text: &str) -> Cow<'_, str> {
    if !text.contains(['|', '\n', '\r']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        match ch {
            '|' => out.push_str("\\|"),
            '\r' => {}
            '\n' => out.push(' '),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// Headings are single-line.
fn heading(text: &str) -> Cow<'_, str> {
    if text.contains(['\n', '\r']) {
        Cow::Owned(text.replace("\r\n", " ").replace(['\n', '\r'], " "))
    } else {
        Cow::Borrowed(text)
    }
}
