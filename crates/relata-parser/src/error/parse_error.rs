//! The failure result of [`crate::parse`].

use std::fmt;

use crate::error::{Diagnostic, ErrorCode};

/// A document that could not be turned into a diagram.
///
/// Only `E` codes end a parse, and the first one found stops it, so a
/// failed parse always has exactly one diagnostic.
#[derive(Debug)]
pub struct ParseError {
    diagnostic: Diagnostic,
}

impl ParseError {
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn code(&self) -> ErrorCode {
        self.diagnostic.code()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagnostic, f)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.diagnostic)
    }
}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }
}
