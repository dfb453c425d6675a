//! # tabledoc-schema
//!
//! Normalized table documentation model for tabledoc.
//!
//! This crate provides:
//! - The `SchemaSource` capability trait for reading per-table metadata
//!   snapshots, with an in-memory `TableSnapshot` implementation
//! - The field normalizer that turns a metadata snapshot into an ordered,
//!   classified `TableModel`
//! - The `Field` and `TableModel` types consumed by the renderers
//!
//! ## Example
//!
//! ```rust
//! use tabledoc_schema::{describe_table, ColumnMeta, TableSnapshot};
//!
//! let snapshot = TableSnapshot::new("orders")
//!     .description("Customer order header")
//!     .with_column(ColumnMeta::new("id", "BIGINT").primary_key())
//!     .with_column(ColumnMeta::new("customer_id", "BIGINT").foreign_key().indexed());
//!
//! let model = describe_table(&snapshot)?;
//! assert_eq!(model.fields[0].name, "id");
//! # Ok::<(), tabledoc_schema::DescribeError>(())
//! ```

pub mod descriptor;
pub mod error;
pub mod field;
pub mod model;
pub mod source;

pub use descriptor::describe_table;
pub use error::{DescribeError, DescribeResult};
pub use field::Field;
pub use model::TableModel;
pub use source::{ColumnMeta, SchemaSource, TableSnapshot};
