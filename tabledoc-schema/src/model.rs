//! The normalized per-table documentation model.

use serde::{Deserialize, Serialize};

use crate::field::Field;

/// The complete normalized schema snapshot for one table.
///
/// Constructed once from an immutable metadata snapshot, held in memory for
/// the duration of a render session, and discarded after use. Never mutated
/// after construction and never shared across tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableModel {
    /// Physical storage name, used verbatim as the render heading.
    pub table_name: String,
    /// Free-text table description with all whitespace removed.
    pub table_description: String,
    /// Fields ordered with the key run at the front: primary keys first,
    /// then foreign keys, declaration order within each group.
    pub fields: Vec<Field>,
    /// Individually indexed non-primary-key columns, in declaration order.
    pub single_indexes: Vec<String>,
    /// Comma-joined column groups forming multi-column indexes.
    pub composite_indexes: Vec<String>,
    /// Individually unique non-primary-key columns, in declaration order.
    pub single_uniques: Vec<String>,
    /// Comma-joined column groups forming multi-column uniqueness constraints.
    pub composite_uniques: Vec<String>,
}

impl TableModel {
    /// Check if the model has no fields.
    ///
    /// An empty table is unusual but not invalid; it renders as a heading or
    /// entity block with an empty body.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Number of fields in the key run at the front of `fields`.
    pub fn key_field_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_key()).count()
    }

    /// All index entries in render order: single-column first, then composite.
    pub fn index_entries(&self) -> impl Iterator<Item = &str> {
        self.single_indexes
            .iter()
            .chain(self.composite_indexes.iter())
            .map(String::as_str)
    }

    /// All uniqueness entries in render order: single-column first, then composite.
    pub fn unique_entries(&self) -> impl Iterator<Item = &str> {
        self.single_uniques
            .iter()
            .chain(self.composite_uniques.iter())
            .map(String::as_str)
    }
}
