//! Builds the semantic [`Diagram`] from a tokenized document.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use roxmltree::{Document, Node};

use relata_core::{
    identifier::Id,
    semantic::{Diagram, Entity, Relation},
};

use crate::{
    entities::EntityShape,
    error::{Diagnostic, ErrorCode, Label},
    relations, xml,
};

/// Turns an XML tree into a [`Diagram`], gathering `W` diagnostics on the way.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    warnings: Vec<Diagnostic>,
}

impl Builder {
    /// Build the diagram and return it with the warnings it raised.
    ///
    /// # Errors
    ///
    /// Returns an `E100` diagnostic if the root element is not `<diagram>`.
    pub(crate) fn build(
        mut self,
        document: &Document<'_>,
    ) -> Result<(Diagram, Vec<Diagnostic>), Diagnostic> {
        let root = document.root_element();
        if !xml::is_element(root, "diagram") {
            return Err(Diagnostic::new(
                ErrorCode::E100,
                "no diagram element found",
                Label::on_element(root, format!("root element is `{}`", root.tag_name().name())),
            ));
        }

        let entities = EntityShape::resolve(root).collect();
        let relations = relations::collect(root);
        debug!(
            entities = entities.len(),
            relations = relations.len();
            "Collected diagram elements"
        );

        self.check_duplicates(&entities);
        self.check_references(&entities, &relations);

        let diagram = Diagram::new(
            xml::attr(root, "version"),
            xml::attr(root, "name"),
            entities.into_iter().map(|(entity, _)| entity).collect(),
            relations.into_iter().map(|(relation, _)| relation).collect(),
        );
        Ok((diagram, self.warnings))
    }

    fn check_duplicates(&mut self, entities: &[(Entity, Node<'_, '_>)]) {
        let mut first_seen = HashMap::new();

        for (entity, node) in entities {
            let (id, node) = (entity.id(), *node);
            let Some(&first) = first_seen.get(&id) else {
                first_seen.insert(id, node);
                continue;
            };

            warn!(id:% = id; "Entity id defined multiple times");
            self.warnings.push(
                Diagnostic::new(
                    ErrorCode::W001,
                    format!("entity id `{id}` is defined multiple times"),
                    Label::on_element(node, "duplicate definition"),
                )
                .with_context(Label::on_element(first, "first defined here")),
            );
        }
    }

    fn check_references(
        &mut self,
        entities: &[(Entity, Node<'_, '_>)],
        relations: &[(Relation, Node<'_, '_>)],
    ) {
        let known: HashSet<Id> = entities.iter().map(|(entity, _)| entity.id()).collect();

        for (relation, node) in relations {
            let node = *node;
            for (side, id) in [("pk-ref", relation.pk_ref()), ("fk-ref", relation.fk_ref())] {
                if known.contains(&id) {
                    continue;
                }
                debug!(relation = relation.name(), side, id:% = id; "Dangling relation endpoint");
                self.warnings.push(Diagnostic::new(
                    ErrorCode::W002,
                    format!(
                        "relation `{}` refers to unknown entity `{id}`",
                        relation.name()
                    ),
                    Label::on_element(node, format!("`{side}` does not name an entity")),
                ));
            }
        }
    }
}
