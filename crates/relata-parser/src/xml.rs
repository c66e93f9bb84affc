//! XML tokenization and the attribute extractor.
//!
//! The document is parsed into a `roxmltree` tree once; the collectors then
//! read it through the small helpers below, which normalize every lookup to
//! an owned `String` and never fail. A missing attribute or element reads as
//! the empty string.

use log::trace;
use roxmltree::{Document, Node, ParsingOptions};

use crate::{
    error::{Diagnostic, ErrorCode, Label},
    span::Span,
};

/// Parse `source` into an XML tree.
///
/// DTDs are accepted so exported files carrying a `<!DOCTYPE>` still load.
pub(crate) fn tokenize(source: &str) -> Result<Document<'_>, Diagnostic> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;

    Document::parse_with_options(source, options).map_err(|err| {
        let pos = err.pos();
        trace!(row = pos.row, col = pos.col; "XML tokenization failed");

        Diagnostic::new(
            ErrorCode::E001,
            "invalid XML format",
            Label::at_position(Span::at_text_pos(source, pos.row, pos.col), err.to_string()),
        )
    })
}

/// Returns `true` if `node` is an element with the given local name.
pub(crate) fn is_element(node: Node<'_, '_>, tag: &str) -> bool {
    node.is_element() && node.tag_name().name() == tag
}

/// Iterates the direct child elements of `node` named `tag`, in document order.
///
/// A single child and repeated children are handled alike, so callers never
/// distinguish "one" from "many".
pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |child| is_element(*child, tag))
}

/// Returns the first direct child element of `node` named `tag`.
pub(crate) fn first_child<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: &'a str,
) -> Option<Node<'a, 'input>> {
    children(node, tag).next()
}

/// Reads attribute `name` of `node`, defaulting to the empty string.
pub(crate) fn attr(node: Node<'_, '_>, name: &str) -> String {
    node.attribute(name).unwrap_or_default().to_string()
}

/// Reads attribute `name` of the first `tag` child of `node`.
///
/// Used for nested values such as `<path name="public"/>`.
pub(crate) fn child_attr(node: Node<'_, '_>, tag: &str, name: &str) -> String {
    first_child(node, tag)
        .map(|child| attr(child, name))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_rejects_malformed_xml() {
        let diag = tokenize("<diagram><entities></diagram>").unwrap_err();

        assert_eq!(diag.code(), ErrorCode::E001);
        assert_eq!(diag.label().element(), None);
        assert!(!diag.label().note().is_empty());
    }

    #[test]
    fn test_tokenize_rejects_empty_input() {
        assert!(tokenize("").is_err());
        assert!(tokenize("   \n").is_err());
    }

    #[test]
    fn test_tokenize_accepts_doctype() {
        let source = "<!DOCTYPE diagram><diagram/>";
        assert!(tokenize(source).is_ok());
    }

    #[test]
    fn test_attr_defaults_to_empty() {
        let doc = tokenize(r#"<entity id="E1"/>"#).unwrap();
        let root = doc.root_element();

        assert_eq!(attr(root, "id"), "E1");
        assert_eq!(attr(root, "name"), "");
    }

    #[test]
    fn test_children_filters_by_name() {
        let doc = tokenize("<r><a/><b/><a/>text<!-- c --></r>").unwrap();
        let root = doc.root_element();

        assert_eq!(children(root, "a").count(), 2);
        assert_eq!(children(root, "b").count(), 1);
        assert_eq!(children(root, "c").count(), 0);
    }

    #[test]
    fn test_child_attr_reads_first_child() {
        let doc =
            tokenize(r#"<entity><path name="public"/><path name="sakila"/></entity>"#).unwrap();
        let root = doc.root_element();

        assert_eq!(child_attr(root, "path", "name"), "public");
        assert_eq!(child_attr(root, "missing", "name"), "");
    }

    #[test]
    fn test_namespaced_elements_match_local_name() {
        let doc = tokenize(r#"<e:diagram xmlns:e="urn:erd"><e:entities/></e:diagram>"#).unwrap();
        let root = doc.root_element();

        assert!(is_element(root, "diagram"));
        assert!(first_child(root, "entities").is_some());
    }
}
