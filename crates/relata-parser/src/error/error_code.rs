//! Diagnostic codes and their severities.
//!
//! - `E0xx` - the file is not readable XML
//! - `E1xx` - the XML is not an ERD document
//! - `W0xx` - the document loads, but part of it will not be drawn as written

use std::fmt;

/// How a diagnostic affects the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// No diagram is produced.
    Error,
    /// The diagram is produced anyway.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// Every condition the parser reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The source is not well-formed XML.
    E001,

    /// The root element is not `<diagram>`.
    E100,

    /// Two or more entities share an `id`. Lookups resolve to the last one.
    W001,

    /// A relation's `pk-ref` or `fk-ref` names no entity. The relation is
    /// kept in the model but skipped by layout and export.
    W002,
}

impl ErrorCode {
    /// Fixed per code: `E` codes abort the parse, `W` codes do not.
    pub fn severity(self) -> Severity {
        match self {
            ErrorCode::E001 | ErrorCode::E100 => Severity::Error,
            ErrorCode::W001 | ErrorCode::W002 => Severity::Warning,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
