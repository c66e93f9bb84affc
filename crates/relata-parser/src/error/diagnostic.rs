//! A single reported problem in an ERD document.

use std::fmt;

use crate::error::{ErrorCode, Label, Severity};

/// One problem found while reading a document.
///
/// Every diagnostic has a code, which fixes its severity, and a label on
/// the element at fault. Duplicate ids also carry a context label on the
/// entity that first used the id.
///
/// ```text
/// warning[W001]: entity id `E1` is defined multiple times
///    |
///  4 |     <entity id="E1" name="orders"/>
///    |     ------------------------------- <entity>: first defined here
///  5 |     <entity id="E1" name="orders_v2"/>
///    |     ^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^^ <entity>: duplicate definition
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    code: ErrorCode,
    message: String,
    label: Label,
    context: Option<Label>,
}

impl Diagnostic {
    pub(crate) fn new(code: ErrorCode, message: impl Into<String>, label: Label) -> Self {
        Self {
            code,
            message: message.into(),
            label,
            context: None,
        }
    }

    pub(crate) fn with_context(mut self, label: Label) -> Self {
        self.context = Some(label);
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The element or position at fault.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// A related element, such as the first definition of a duplicated id.
    pub fn context(&self) -> Option<&Label> {
        self.context.as_ref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity(), self.code, self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    #[test]
    fn test_display_includes_severity_and_code() {
        let diag = Diagnostic::new(
            ErrorCode::W002,
            "relation `fk_x` refers to unknown entity `E9`",
            Label::at_position(Span::new(0..1), "here"),
        );

        assert_eq!(
            diag.to_string(),
            "warning[W002]: relation `fk_x` refers to unknown entity `E9`"
        );
        assert!(diag.context().is_none());
    }

    #[test]
    fn test_context_label() {
        let diag = Diagnostic::new(
            ErrorCode::W001,
            "entity id `E1` is defined multiple times",
            Label::at_position(Span::new(20..30), "duplicate definition"),
        )
        .with_context(Label::at_position(Span::new(0..10), "first defined here"));

        assert_eq!(diag.severity(), Severity::Warning);
        assert_eq!(diag.label().note(), "duplicate definition");
        assert_eq!(diag.context().map(Label::note), Some("first defined here"));
    }
}
