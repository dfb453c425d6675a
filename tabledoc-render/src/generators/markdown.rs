//! Markdown generation for table documentation.

use tabledoc_schema::{Field, TableModel};

use super::{key_tags, spaced_columns};

/// Markdown generator for a normalized table model.
///
/// Output is a heading plus two pipe-delimited tables: the per-field schema
/// table, and an "additional info" table listing index and uniqueness
/// entries. Suitable for direct inclusion in version-controlled docs.
pub struct MarkdownGenerator;

impl MarkdownGenerator {
    /// Generate the Markdown document for a table model.
    ///
    /// Example output:
    ///
    /// ```text
    /// ## orders
    /// Customerorderheader
    ///
    /// #### schema
    /// | field_name | type | description |
    /// |---|---|---|
    /// | id | PK, BIGINT |  |
    /// | customer_id | FK, BIGINT |  |
    /// | status | VARCHAR(20) |  |
    ///
    ///
    /// #### additional info
    /// | type | value | description |
    /// |---|---|---|
    /// | index | customer_id | |
    /// | unique | status | |
    /// ```
    pub fn generate(&self, model: &TableModel) -> String {
        let mut doc = format!(
            "## {}\n{}\n\n#### schema\n| field_name | type | description |\n|---|---|---|\n",
            model.table_name, model.table_description
        );

        for field in &model.fields {
            doc.push_str(&self.field_row(field));
        }

        doc.push_str("\n\n#### additional info\n| type | value | description |\n|---|---|---|\n");

        for entry in model.index_entries() {
            doc.push_str(&self.info_row("index", entry));
        }
        for entry in model.unique_entries() {
            doc.push_str(&self.info_row("unique", entry));
        }

        doc
    }

    /// One schema-table row for a field.
    fn field_row(&self, field: &Field) -> String {
        format!(
            "| {} | {}{} | {} |\n",
            field.name,
            key_tags(field),
            field.physical_type,
            field.description
        )
    }

    /// One additional-info row for an index or uniqueness entry.
    fn info_row(&self, kind: &str, entry: &str) -> String {
        format!("| {} | {} | |\n", kind, spaced_columns(entry))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use tabledoc_schema::{describe_table, ColumnMeta, TableSnapshot};

    use super::*;

    fn orders_model() -> TableModel {
        let snapshot = TableSnapshot::new("orders")
            .description("Customer order header")
            .with_column(ColumnMeta::new("id", "BIGINT").primary_key())
            .with_column(
                ColumnMeta::new("customer_id", "BIGINT")
                    .foreign_key()
                    .indexed(),
            )
            .with_column(ColumnMeta::new("status", "VARCHAR(20)").unique());
        describe_table(&snapshot).unwrap()
    }

    // ==================== Document Shape Tests ====================

    #[test]
    fn test_generate_orders_document() {
        let doc = MarkdownGenerator.generate(&orders_model());

        let expected = "\
## orders
Customerorderheader

#### schema
| field_name | type | description |
|---|---|---|
| id | PK, BIGINT |  |
| customer_id | FK, BIGINT |  |
| status | VARCHAR(20) |  |


#### additional info
| type | value | description |
|---|---|---|
| index | customer_id | |
| unique | status | |
";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let model = orders_model();
        assert_eq!(
            MarkdownGenerator.generate(&model),
            MarkdownGenerator.generate(&model)
        );
    }

    #[test]
    fn test_empty_model_renders_empty_tables() {
        let model = describe_table(&TableSnapshot::new("empty_tab")).unwrap();
        let doc = MarkdownGenerator.generate(&model);

        let expected = "\
## empty_tab


#### schema
| field_name | type | description |
|---|---|---|


#### additional info
| type | value | description |
|---|---|---|
";
        assert_eq!(doc, expected);
    }

    // ==================== Row Formatting Tests ====================

    #[test]
    fn test_field_row_with_description() {
        let snapshot = TableSnapshot::new("history").with_column(
            ColumnMeta::new("water_mark", "NUMERIC(18, 2)").verbose_name("Own funds level"),
        );
        let model = describe_table(&snapshot).unwrap();
        let doc = MarkdownGenerator.generate(&model);
        assert!(doc.contains("| water_mark | NUMERIC(18, 2) | Own funds level |\n"));
    }

    #[test]
    fn test_field_row_both_key_tags() {
        let snapshot = TableSnapshot::new("memberships").with_column(
            ColumnMeta::new("user_id", "BIGINT").primary_key().foreign_key(),
        );
        let model = describe_table(&snapshot).unwrap();
        let doc = MarkdownGenerator.generate(&model);
        assert!(doc.contains("| user_id | PK, FK, BIGINT |  |\n"));
    }

    #[test]
    fn test_composite_entries_render_spaced() {
        let snapshot = TableSnapshot::new("orders")
            .with_column(ColumnMeta::new("a", "INT"))
            .with_column(ColumnMeta::new("b", "INT"))
            .with_composite_index(["a", "b"])
            .with_composite_unique(["b", "a"]);
        let model = describe_table(&snapshot).unwrap();
        let doc = MarkdownGenerator.generate(&model);

        assert!(doc.contains("| index | a, b | |\n"));
        assert!(doc.contains("| unique | b, a | |\n"));
    }

    #[test]
    fn test_single_entries_precede_composite_entries() {
        let snapshot = TableSnapshot::new("orders")
            .with_column(ColumnMeta::new("a", "INT").indexed())
            .with_column(ColumnMeta::new("b", "INT"))
            .with_composite_index(["a", "b"]);
        let model = describe_table(&snapshot).unwrap();
        let doc = MarkdownGenerator.generate(&model);

        let single = doc.find("| index | a | |").unwrap();
        let composite = doc.find("| index | a, b | |").unwrap();
        assert!(single < composite);
    }

    #[test]
    fn test_indexes_precede_uniques() {
        let model = orders_model();
        let doc = MarkdownGenerator.generate(&model);

        let index = doc.find("| index |").unwrap();
        let unique = doc.find("| unique |").unwrap();
        assert!(index < unique);
    }
}
