//! Error types for Relata operations.
//!
//! This module provides the main error type [`RelataError`] which wraps
//! the error conditions that can occur while a diagram is processed.

use std::io;

use thiserror::Error;

use relata_parser::error::ParseError;

/// The main error type for Relata operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the parser's diagnostics together with the
/// source text, so callers can render labelled snippets.
///
/// Layout, relocation and Mermaid serialization are total and never produce
/// an error.
#[derive(Debug, Error)]
pub enum RelataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for RelataError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl RelataError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
