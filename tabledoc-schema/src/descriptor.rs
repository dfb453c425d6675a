//! The field normalizer: raw table metadata to a `TableModel`.

use tracing::{debug, instrument, warn};

use crate::error::{DescribeError, DescribeResult};
use crate::field::Field;
use crate::model::TableModel;
use crate::source::{ColumnMeta, SchemaSource};

/// Normalize one table's raw metadata into a [`TableModel`].
///
/// Reads the source exactly once. Fails with
/// [`DescribeError::UnsupportedSchema`] when a column's physical type is
/// unresolved; the whole build aborts, no partial model is produced.
///
/// The resulting field order is a presentation invariant the renderers rely
/// on: primary-key fields first, then foreign-key fields, then the rest,
/// with declaration order breaking ties within each group. Key fields form
/// a contiguous run at the front.
#[instrument(skip(source), fields(table = %source.table_name()))]
pub fn describe_table<S: SchemaSource + ?Sized>(source: &S) -> DescribeResult<TableModel> {
    let table_name = source.table_name().to_string();
    let table_description: String = source
        .table_description()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let columns = source.columns();
    let mut fields = Vec::with_capacity(columns.len());
    let mut single_indexes = Vec::new();
    let mut single_uniques = Vec::new();

    for column in columns {
        let physical_type = column
            .db_type
            .clone()
            .ok_or_else(|| DescribeError::unsupported_schema(&table_name, &column.name))?;

        fields.push(Field {
            name: column.name.clone(),
            physical_type,
            description: field_description(column),
            is_primary_key: column.primary_key,
            is_foreign_key: column.foreign_key,
            choices: column.choices.clone(),
        });

        if !column.primary_key && column.indexed {
            single_indexes.push(column.name.clone());
        }
        if !column.primary_key && column.unique {
            single_uniques.push(column.name.clone());
        }
    }

    // Single stable sort encoding the full priority: primary keys first,
    // then foreign keys; stability keeps declaration order within each
    // group, so key fields end up as one contiguous run at the front.
    fields.sort_by_key(|f| (!f.is_primary_key, !f.is_foreign_key));

    let composite_indexes: Vec<String> = source
        .composite_indexes()
        .iter()
        .map(|group| group.join(","))
        .collect();
    let composite_uniques: Vec<String> = source
        .composite_uniques()
        .iter()
        .map(|group| group.join(","))
        .collect();

    if fields.is_empty() {
        warn!("normalized model has no fields");
    }
    debug!(
        fields = fields.len(),
        indexes = single_indexes.len() + composite_indexes.len(),
        uniques = single_uniques.len() + composite_uniques.len(),
        "normalized table metadata"
    );

    Ok(TableModel {
        table_name,
        table_description,
        fields,
        single_indexes,
        composite_indexes,
        single_uniques,
        composite_uniques,
    })
}

/// Compute a field's documentation text from the source's verbose label.
///
/// A label equal to the column name with underscores replaced by spaces adds
/// no information and is suppressed to an empty description.
fn field_description(column: &ColumnMeta) -> String {
    match &column.verbose_name {
        Some(label) if *label != column.name.replace('_', " ") => label.clone(),
        _ => String::new(),
    }
}
