//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tabledoc CLI - schema documentation from table metadata
#[derive(Parser, Debug)]
#[command(name = "tabledoc")]
#[command(author = "Pegasus Heavy Industries LLC")]
#[command(version)]
#[command(about = "Tabledoc CLI - schema documentation from table metadata", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate documentation files from a metadata snapshot
    Generate(GenerateArgs),

    /// Display version information
    Version,
}

// =============================================================================
// Generate Command
// =============================================================================

/// Arguments for the `generate` command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Path to the metadata snapshot file (JSON or TOML)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,

    /// Output directory for generated documents
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Formats to render (e.g. markdown,plantuml)
    #[arg(short, long, value_delimiter = ',')]
    pub format: Vec<DocFormat>,
}

/// Supported documentation formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocFormat {
    Markdown,
    Plantuml,
}

impl DocFormat {
    /// File extension for documents in this format.
    pub fn extension(self) -> &'static str {
        match self {
            DocFormat::Markdown => "md",
            DocFormat::Plantuml => "puml",
        }
    }
}

impl std::fmt::Display for DocFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocFormat::Markdown => write!(f, "markdown"),
            DocFormat::Plantuml => write!(f, "plantuml"),
        }
    }
}
