//! Error types for table metadata normalization.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for normalization operations.
pub type DescribeResult<T> = Result<T, DescribeError>;

/// Errors that can occur while normalizing table metadata.
#[derive(Error, Debug, Diagnostic)]
pub enum DescribeError {
    /// The metadata source cannot resolve a column's physical type.
    ///
    /// Schema metadata is assumed static and correct per call, so this is
    /// surfaced immediately and never retried: it indicates a defect in the
    /// caller or its environment, not a transient condition.
    #[error("cannot resolve a physical type for column `{table}.{column}`")]
    #[diagnostic(code(tabledoc::schema::unsupported_schema))]
    UnsupportedSchema {
        /// Table the column belongs to.
        table: String,
        /// The column whose type is unresolved.
        column: String,
    },
}

impl DescribeError {
    /// Create an unsupported-schema error.
    pub fn unsupported_schema(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnsupportedSchema {
            table: table.into(),
            column: column.into(),
        }
    }
}
