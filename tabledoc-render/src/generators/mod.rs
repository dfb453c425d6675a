//! Format-specific generators sharing the same layout rules.
//!
//! Layout rules common to every view:
//! - a field's type cell is prefixed with `PK, ` and/or `FK, `, primary key
//!   first when both apply, followed by the engine-reported physical type
//! - composite constraint entries render their comma-joined columns with a
//!   space after each comma

mod markdown;
mod plantuml;

pub use markdown::MarkdownGenerator;
pub use plantuml::PlantUmlGenerator;

use tabledoc_schema::Field;

/// Key tag prefix for a field's type: `PK, `, `FK, `, both, or empty.
pub(crate) fn key_tags(field: &Field) -> String {
    let mut tags = String::new();
    if field.is_primary_key {
        tags.push_str("PK, ");
    }
    if field.is_foreign_key {
        tags.push_str("FK, ");
    }
    tags
}

/// Rewrite a comma-joined constraint entry with a space after each comma.
pub(crate) fn spaced_columns(entry: &str) -> String {
    entry.replace(',', ", ")
}
