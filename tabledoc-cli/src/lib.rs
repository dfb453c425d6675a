//! Tabledoc CLI - Command-line interface for tabledoc.
//!
//! This crate provides the CLI tool that turns schema metadata snapshot
//! files into version-controllable Markdown and PlantUML documents.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
