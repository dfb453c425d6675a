//! `tabledoc generate` command - Render documentation from a snapshot file.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Deserialize;

use tabledoc_render::{render_markdown, render_plantuml};
use tabledoc_schema::{describe_table, TableSnapshot};

use crate::cli::{DocFormat, GenerateArgs};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::error::{CliError, CliResult};
use crate::output::{self, success};

/// TOML snapshot files carry their tables under a `[[tables]]` array.
#[derive(Debug, Deserialize)]
struct SnapshotDoc {
    #[serde(default)]
    tables: Vec<TableSnapshot>,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> CliResult<()> {
    output::header("Generate schema docs");

    let cwd = std::env::current_dir()?;

    // Load config
    let config_path = cwd.join(CONFIG_FILE_NAME);
    let config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        Config::default()
    };

    // Resolve snapshot path
    let snapshot_path = args
        .snapshot
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.snapshot.path));
    if !snapshot_path.exists() {
        return Err(CliError::Config(format!(
            "Snapshot file not found: {}",
            snapshot_path.display()
        )));
    }

    // Resolve output directory and formats
    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.dir));
    let formats = resolve_formats(&args, &config)?;

    output::kv("Snapshot", &snapshot_path.display().to_string());
    output::kv("Output", &output_dir.display().to_string());
    output::newline();

    output::step(1, 3, "Reading snapshot...");
    let tables = load_snapshot(&snapshot_path)?;

    output::step(2, 3, "Rendering documents...");
    let mut documents = Vec::new();
    for table in &tables {
        let model = describe_table(table)?;
        if model.is_empty() {
            output::warn(&format!("table `{}` has no columns", model.table_name));
        }
        for format in &formats {
            let contents = match format {
                DocFormat::Markdown => render_markdown(&model),
                DocFormat::Plantuml => render_plantuml(&model),
            };
            let path = output_dir.join(format!("{}.{}", model.table_name, format.extension()));
            documents.push((path, contents));
        }
    }

    output::step(3, 3, "Writing files...");
    std::fs::create_dir_all(&output_dir)?;
    for (path, contents) in &documents {
        std::fs::write(path, contents)?;
    }

    output::newline();
    output::section("Generated files");
    for (path, _) in &documents {
        let relative_path = path.strip_prefix(&cwd).unwrap_or(path).display().to_string();
        output::list_item(&relative_path);
    }

    output::newline();
    success(&format!(
        "Documented {} tables ({} files)",
        tables.len(),
        documents.len()
    ));

    Ok(())
}

/// Formats from the command line, falling back to the config file.
fn resolve_formats(args: &GenerateArgs, config: &Config) -> CliResult<Vec<DocFormat>> {
    if !args.format.is_empty() {
        return Ok(args.format.clone());
    }

    config
        .output
        .formats
        .iter()
        .map(|name| {
            DocFormat::from_str(name, true)
                .map_err(|_| CliError::Config(format!("Unknown format: {}", name)))
        })
        .collect()
}

/// Read the table snapshots from a JSON or TOML snapshot file.
fn load_snapshot(path: &Path) -> CliResult<Vec<TableSnapshot>> {
    let content = std::fs::read_to_string(path)?;

    match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => {
            let doc: SnapshotDoc = toml::from_str(&content)?;
            Ok(doc.tables)
        }
        _ => Ok(serde_json::from_str(&content)?),
    }
}
