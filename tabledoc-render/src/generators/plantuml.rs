//! PlantUML entity-block generation for table diagrams.

use tabledoc_schema::{Field, TableModel};

use super::key_tags;

/// PlantUML generator for a normalized table model.
///
/// Emits one `entity <name> { ... }` block with key fields listed before a
/// single `--` separator and non-key fields after it. The separator sits
/// immediately after the contiguous key run the normalizer establishes.
pub struct PlantUmlGenerator;

impl PlantUmlGenerator {
    /// Generate the PlantUML entity block for a table model.
    ///
    /// Example output:
    ///
    /// ```text
    /// entity orders {
    /// 	id: PK, BIGINT
    /// 	customer_id: FK, BIGINT
    /// 	--
    /// 	status: VARCHAR(20)
    /// }
    /// ```
    pub fn generate(&self, model: &TableModel) -> String {
        let mut entity = format!("entity {} {{\n", model.table_name);

        let key_run = model.key_field_count();
        for (i, field) in model.fields.iter().enumerate() {
            entity.push_str(&self.field_line(field));

            // One separator line between the key run and the other fields,
            // placed by position; none when no field is a key.
            if i + 1 == key_run {
                entity.push_str("\t--\n");
            }
        }

        entity.push_str("}\n");
        entity
    }

    /// One entity-body line for a field.
    fn field_line(&self, field: &Field) -> String {
        format!("\t{}: {}{}\n", field.name, key_tags(field), field.physical_type)
    }
}
