//! Command-line argument definitions for the Relata CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use relata::config::OutputFormat;

/// Command-line arguments for the Relata ERD tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input ERD file
    #[arg(help = "Path to the input .erd file")]
    pub input: String,

    /// Path to the output file; standard output when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format; the configured default when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Output formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Mermaid ER diagram
    Mermaid,
    /// Mermaid ER diagram with inferred cardinality
    MermaidDetailed,
    /// JSON with positions, zoom and connectors
    Layout,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Mermaid => Self::Mermaid,
            Format::MermaidDetailed => Self::MermaidDetailed,
            Format::Layout => Self::Layout,
        }
    }
}
