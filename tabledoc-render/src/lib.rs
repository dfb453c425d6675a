//! # tabledoc-render
//!
//! Textual renderers for tabledoc table models.
//!
//! Two structurally different views are produced from the same normalized
//! [`TableModel`]: a Markdown documentation block and a PlantUML entity
//! block. Both are pure functions of the model with no side effects or
//! I/O; identical input always yields byte-identical output, so rendered
//! documents diff cleanly in version control.
//!
//! ## Example
//!
//! ```rust
//! use tabledoc_schema::{describe_table, ColumnMeta, TableSnapshot};
//! use tabledoc_render::{render_markdown, render_plantuml};
//!
//! let snapshot = TableSnapshot::new("orders")
//!     .with_column(ColumnMeta::new("id", "BIGINT").primary_key());
//! let model = describe_table(&snapshot)?;
//!
//! let markdown = render_markdown(&model);
//! let diagram = render_plantuml(&model);
//! assert!(markdown.starts_with("## orders"));
//! assert!(diagram.starts_with("entity orders {"));
//! # Ok::<(), tabledoc_schema::DescribeError>(())
//! ```

pub mod generators;

pub use generators::{MarkdownGenerator, PlantUmlGenerator};

use tabledoc_schema::TableModel;

/// Render a table model as a Markdown documentation block.
pub fn render_markdown(model: &TableModel) -> String {
    MarkdownGenerator.generate(model)
}

/// Render a table model as a PlantUML entity block.
pub fn render_plantuml(model: &TableModel) -> String {
    PlantUmlGenerator.generate(model)
}
