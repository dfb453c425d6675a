//! # Tabledoc
//!
//! Deterministic schema documentation from table metadata.
//!
//! Tabledoc turns a relational table's schema metadata (columns, keys,
//! indexes, uniqueness constraints, human descriptions) into two
//! version-controllable textual artifacts:
//! - a Markdown documentation block (heading plus schema and
//!   additional-info tables)
//! - a PlantUML entity block with key fields grouped above a `--`
//!   separator
//!
//! Both views are rendered from one normalized [`TableModel`]; identical
//! metadata always produces byte-identical documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use tabledoc::prelude::*;
//!
//! let snapshot = TableSnapshot::new("orders")
//!     .description("Customer order header")
//!     .with_column(ColumnMeta::new("id", "BIGINT").primary_key())
//!     .with_column(ColumnMeta::new("customer_id", "BIGINT").foreign_key().indexed())
//!     .with_column(ColumnMeta::new("status", "VARCHAR(20)").unique());
//!
//! let model = describe_table(&snapshot)?;
//! let markdown = render_markdown(&model);
//! let diagram = render_plantuml(&model);
//!
//! assert!(markdown.starts_with("## orders"));
//! assert!(diagram.contains("\t--\n"));
//! # Ok::<(), tabledoc::DescribeError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Normalized model, metadata source interface, and field normalizer.
pub mod schema {
    pub use tabledoc_schema::*;
}

/// Markdown and PlantUML renderers.
pub mod render {
    pub use tabledoc_render::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::render::{render_markdown, render_plantuml};
    pub use crate::schema::{describe_table, ColumnMeta, SchemaSource, TableSnapshot};
}

// Re-export key types at the crate root
pub use render::{render_markdown, render_plantuml, MarkdownGenerator, PlantUmlGenerator};
pub use schema::{describe_table, DescribeError, Field, TableModel};
