//! The schema metadata source interface.
//!
//! A metadata source exposes, per table, the ordered list of raw columns
//! with their engine-reported types and flags, the table's physical name
//! and description, and the declared composite constraint groups. The
//! normalizer reads it once and never mutates it. How a snapshot is
//! obtained (driver introspection, static declaration, catalog query) is
//! the source's concern, not this crate's.

use serde::{Deserialize, Serialize};

/// Raw metadata for one column, as reported by the metadata source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMeta {
    /// Column name.
    pub name: String,
    /// Engine-reported physical type. `None` when the engine cannot
    /// resolve a type for the column.
    #[serde(default)]
    pub db_type: Option<String>,
    /// Verbose human label. `None` when the source has no label beyond
    /// the column name.
    #[serde(default)]
    pub verbose_name: Option<String>,
    /// Whether the column accepts NULL.
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Whether the column is part of the primary key.
    #[serde(default)]
    pub primary_key: bool,
    /// Whether the source carries a relation indicator for the column.
    #[serde(default)]
    pub foreign_key: bool,
    /// Whether the column has a single-column uniqueness constraint.
    #[serde(default)]
    pub unique: bool,
    /// Whether the column has a single-column index.
    #[serde(default)]
    pub indexed: bool,
    /// Enumerated allowed values, if any.
    #[serde(default)]
    pub choices: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl ColumnMeta {
    /// Create a column with a resolved physical type.
    pub fn new(name: impl Into<String>, db_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db_type: Some(db_type.into()),
            verbose_name: None,
            nullable: true,
            primary_key: false,
            foreign_key: false,
            unique: false,
            indexed: false,
            choices: Vec::new(),
        }
    }

    /// Create a column whose physical type the engine cannot resolve.
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            db_type: None,
            verbose_name: None,
            nullable: true,
            primary_key: false,
            foreign_key: false,
            unique: false,
            indexed: false,
            choices: Vec::new(),
        }
    }

    /// Mark the column as part of the primary key.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    /// Mark the column with a relation indicator.
    pub fn foreign_key(mut self) -> Self {
        self.foreign_key = true;
        self
    }

    /// Mark the column as individually unique.
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Mark the column as individually indexed.
    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    /// Set the verbose human label.
    pub fn verbose_name(mut self, label: impl Into<String>) -> Self {
        self.verbose_name = Some(label.into());
        self
    }

    /// Set the enumerated allowed values.
    pub fn choices(mut self, choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }
}

/// Capability interface for per-table schema metadata.
///
/// Engine-agnostic: the normalizer only needs these five reads. All methods
/// are synchronous because the snapshot is already resolved in memory; a
/// binding that talks to a live catalog resolves its metadata before
/// exposing it through this trait.
pub trait SchemaSource {
    /// Physical table name.
    fn table_name(&self) -> &str;

    /// Free-text table description. Layout whitespace carries no meaning.
    fn table_description(&self) -> &str;

    /// Raw columns in declaration order.
    fn columns(&self) -> &[ColumnMeta];

    /// Declared multi-column index groups, each in declared column order.
    fn composite_indexes(&self) -> &[Vec<String>];

    /// Declared multi-column uniqueness groups, each in declared column order.
    fn composite_uniques(&self) -> &[Vec<String>];
}

/// An in-memory, serde-backed metadata snapshot for one table.
///
/// This is the concrete `SchemaSource` used by the CLI (deserialized from a
/// snapshot file) and by tests (assembled with the builder methods).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSnapshot {
    /// Physical table name.
    pub table_name: String,
    /// Free-text table description.
    #[serde(default)]
    pub description: String,
    /// Raw columns in declaration order.
    #[serde(default)]
    pub columns: Vec<ColumnMeta>,
    /// Declared multi-column index groups.
    #[serde(default)]
    pub composite_indexes: Vec<Vec<String>>,
    /// Declared multi-column uniqueness groups.
    #[serde(default)]
    pub composite_uniques: Vec<Vec<String>>,
}

impl TableSnapshot {
    /// Create an empty snapshot for a table.
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Set the table description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a column.
    pub fn with_column(mut self, column: ColumnMeta) -> Self {
        self.columns.push(column);
        self
    }

    /// Append a declared multi-column index group.
    pub fn with_composite_index(
        mut self,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.composite_indexes
            .push(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Append a declared multi-column uniqueness group.
    pub fn with_composite_unique(
        mut self,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.composite_uniques
            .push(columns.into_iter().map(Into::into).collect());
        self
    }
}

impl SchemaSource for TableSnapshot {
    fn table_name(&self) -> &str {
        &self.table_name
    }

    fn table_description(&self) -> &str {
        &self.description
    }

    fn columns(&self) -> &[ColumnMeta] {
        &self.columns
    }

    fn composite_indexes(&self) -> &[Vec<String>] {
        &self.composite_indexes
    }

    fn composite_uniques(&self) -> &[Vec<String>] {
        &self.composite_uniques
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ColumnMeta Builder Tests ====================

    #[test]
    fn test_column_new() {
        let column = ColumnMeta::new("id", "BIGINT");

        assert_eq!(column.name, "id");
        assert_eq!(column.db_type.as_deref(), Some("BIGINT"));
        assert!(column.verbose_name.is_none());
        assert!(column.nullable);
        assert!(!column.primary_key);
        assert!(!column.foreign_key);
        assert!(!column.unique);
        assert!(!column.indexed);
    }

    #[test]
    fn test_column_unresolved() {
        let column = ColumnMeta::unresolved("blob_data");
        assert!(column.db_type.is_none());
    }

    #[test]
    fn test_column_primary_key_not_nullable() {
        let column = ColumnMeta::new("id", "BIGINT").primary_key();
        assert!(column.primary_key);
        assert!(!column.nullable);
    }

    #[test]
    fn test_column_flags() {
        let column = ColumnMeta::new("customer_id", "BIGINT")
            .foreign_key()
            .indexed()
            .unique();
        assert!(column.foreign_key);
        assert!(column.indexed);
        assert!(column.unique);
    }

    #[test]
    fn test_column_choices() {
        let column = ColumnMeta::new("status", "VARCHAR(20)").choices(["OPEN", "CLOSED"]);
        assert_eq!(column.choices, vec!["OPEN", "CLOSED"]);
    }

    // ==================== TableSnapshot Tests ====================

    #[test]
    fn test_snapshot_builder() {
        let snapshot = TableSnapshot::new("orders")
            .description("Customer order header")
            .with_column(ColumnMeta::new("id", "BIGINT").primary_key())
            .with_composite_index(["status", "customer_id"])
            .with_composite_unique(["customer_id", "external_ref"]);

        assert_eq!(snapshot.table_name(), "orders");
        assert_eq!(snapshot.table_description(), "Customer order header");
        assert_eq!(snapshot.columns().len(), 1);
        assert_eq!(snapshot.composite_indexes().len(), 1);
        assert_eq!(snapshot.composite_indexes()[0], vec!["status", "customer_id"]);
        assert_eq!(snapshot.composite_uniques().len(), 1);
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_snapshot_from_json_defaults() {
        let snapshot: TableSnapshot = serde_json::from_str(
            r#"{
                "table_name": "audit_log",
                "columns": [
                    { "name": "id", "db_type": "BIGINT", "primary_key": true },
                    { "name": "payload" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(snapshot.table_name, "audit_log");
        assert_eq!(snapshot.description, "");
        assert!(snapshot.composite_indexes.is_empty());

        let payload = &snapshot.columns[1];
        assert!(payload.db_type.is_none());
        assert!(payload.nullable);
        assert!(!payload.primary_key);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = TableSnapshot::new("orders")
            .with_column(ColumnMeta::new("id", "BIGINT").primary_key());

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: TableSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }
}
