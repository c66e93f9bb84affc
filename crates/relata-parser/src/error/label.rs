//! Source locations attached to diagnostics.

use std::fmt;

use roxmltree::Node;

use crate::span::Span;

/// A note pinned to part of the document.
///
/// Most labels cover a whole element (`<entity>`, `<relation>`, the root)
/// and remember its tag so the note reads naturally without the source.
/// Tokenizer failures have no element yet and point at a bare position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    element: Option<String>,
    note: String,
}

impl Label {
    /// Covers `node` from its opening `<` to the end of its closing tag.
    pub(crate) fn on_element(node: Node<'_, '_>, note: impl Into<String>) -> Self {
        Self {
            span: Span::new(node.range()),
            element: Some(node.tag_name().name().to_string()),
            note: note.into(),
        }
    }

    /// Points at `span` without naming an element.
    pub(crate) fn at_position(span: Span, note: impl Into<String>) -> Self {
        Self {
            span,
            element: None,
            note: note.into(),
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Local name of the labelled element, if the label covers one.
    pub fn element(&self) -> Option<&str> {
        self.element.as_deref()
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

/// `<entity>: duplicate definition`, or just the note for positions.
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.element {
            Some(element) => write!(f, "<{element}>: {}", self.note),
            None => f.write_str(&self.note),
        }
    }
}
