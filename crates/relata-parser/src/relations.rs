//! Relation collector.

use roxmltree::Node;

use relata_core::{identifier::Id, semantic::Relation};

use crate::xml;

/// Collect `<relations>/<relation>` elements of `diagram` in document order.
///
/// References are not checked against the entity list here; the builder
/// reports dangling ones as warnings and consumers skip them.
pub(crate) fn collect<'a, 'input: 'a>(diagram: Node<'a, 'input>) -> Vec<(Relation, Node<'a, 'input>)> {
    let Some(relations) = xml::first_child(diagram, "relations") else {
        return Vec::new();
    };

    xml::children(relations, "relation")
        .map(|node| {
            let relation = Relation::new(
                xml::attr(node, "name"),
                xml::attr(node, "fq-name"),
                xml::attr(node, "type"),
                Id::new(&xml::attr(node, "pk-ref")),
                Id::new(&xml::attr(node, "fk-ref")),
            );
            (relation, node)
        })
        .collect()
}
