//! Diagnostics reported while reading ERD documents.
//!
//! Only two conditions are fatal: XML that cannot be tokenized
//! ([`ErrorCode::E001`]) and a root element other than `<diagram>`
//! ([`ErrorCode::E100`]). Either one ends the parse with a [`ParseError`].
//! Missing attributes are never reported; they read as empty strings.
//! Duplicate entity ids ([`ErrorCode::W001`]) and relations naming unknown
//! entities ([`ErrorCode::W002`]) come back as warnings next to the
//! diagram from [`crate::parse_with_warnings`].
//!
//! Every [`Diagnostic`] points at the offending element through a
//! [`Label`], so a front end can show the XML in question.

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::Diagnostic;
pub use error_code::{ErrorCode, Severity};
pub use label::Label;
pub use parse_error::ParseError;
