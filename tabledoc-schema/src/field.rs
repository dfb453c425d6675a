//! Normalized field records for table documentation.

use serde::{Deserialize, Serialize};

/// One column's documentation-relevant facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Column name, unique within a table.
    pub name: String,
    /// Uppercase type string as reported by the underlying engine
    /// (e.g. `BIGINT AUTO_INCREMENT`, `NUMERIC(18, 2)`).
    pub physical_type: String,
    /// Human description; empty when the source's verbose label carries no
    /// information beyond the column name itself.
    pub description: String,
    /// Whether the column is part of the primary key.
    pub is_primary_key: bool,
    /// Whether the source marks the column with a relation indicator.
    /// Never inferred from naming.
    pub is_foreign_key: bool,
    /// Enumerated allowed values. Carried but not rendered (reserved).
    pub choices: Vec<String>,
}

impl Field {
    /// Create a plain field with no keys, description, or choices.
    pub fn new(name: impl Into<String>, physical_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            physical_type: physical_type.into(),
            description: String::new(),
            is_primary_key: false,
            is_foreign_key: false,
            choices: Vec::new(),
        }
    }

    /// Check if the field belongs to the key run (primary or foreign key).
    pub fn is_key(&self) -> bool {
        self.is_primary_key || self.is_foreign_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_field(name: &str) -> Field {
        Field::new(name, "BIGINT")
    }

    // ==================== Field Construction Tests ====================

    #[test]
    fn test_field_new() {
        let field = Field::new("id", "BIGINT AUTO_INCREMENT");

        assert_eq!(field.name, "id");
        assert_eq!(field.physical_type, "BIGINT AUTO_INCREMENT");
        assert!(field.description.is_empty());
        assert!(!field.is_primary_key);
        assert!(!field.is_foreign_key);
        assert!(field.choices.is_empty());
    }

    // ==================== Key Classification Tests ====================

    #[test]
    fn test_is_key_primary() {
        let mut field = make_field("id");
        field.is_primary_key = true;
        assert!(field.is_key());
    }

    #[test]
    fn test_is_key_foreign() {
        let mut field = make_field("customer_id");
        field.is_foreign_key = true;
        assert!(field.is_key());
    }

    #[test]
    fn test_is_key_both() {
        let mut field = make_field("customer_id");
        field.is_primary_key = true;
        field.is_foreign_key = true;
        assert!(field.is_key());
    }

    #[test]
    fn test_is_key_neither() {
        let field = make_field("status");
        assert!(!field.is_key());
    }
}
