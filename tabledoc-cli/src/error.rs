//! CLI error types and result alias.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(tabledoc::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(tabledoc::config))]
    Config(String),

    /// Snapshot file error
    #[error("Snapshot error: {0}")]
    #[diagnostic(code(tabledoc::snapshot))]
    Snapshot(String),

    /// Metadata normalization error
    #[error("Describe error: {0}")]
    #[diagnostic(code(tabledoc::describe))]
    Describe(#[from] tabledoc_schema::DescribeError),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<toml::ser::Error> for CliError {
    fn from(err: toml::ser::Error) -> Self {
        CliError::Config(format!("Failed to serialize TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Snapshot(format!("Failed to parse JSON: {}", err))
    }
}
