//! Entity collector.
//!
//! ERD documents list their tables in one of two shapes:
//!
//! ```text
//! <entities>                      <entities>
//!   <entity id=".." .../>           <data-source id="..">
//!   <entity id=".." .../>             <entity id=".." .../>
//! </entities>                       </data-source>
//!                                 </entities>
//! ```
//!
//! [`EntityShape`] decides which one a document uses. The flat shape is
//! tried first; the two are never mixed.

use log::debug;
use roxmltree::Node;

use relata_core::{identifier::Id, semantic::Entity};

use crate::xml;

/// The layout of the `<entities>` element of a document.
#[derive(Debug, Clone, Copy)]
pub(crate) enum EntityShape<'a, 'input> {
    /// `<entity>` elements directly under `<entities>`.
    Flat(Node<'a, 'input>),
    /// `<entity>` elements grouped under `<data-source>` elements.
    DataSources(Node<'a, 'input>),
    /// No `<entities>` element, or one with neither shape inside.
    Absent,
}

impl<'a, 'input: 'a> EntityShape<'a, 'input> {
    /// Classify the first `<entities>` child of `diagram`.
    pub(crate) fn resolve(diagram: Node<'a, 'input>) -> Self {
        let Some(entities) = xml::first_child(diagram, "entities") else {
            return Self::Absent;
        };

        if xml::first_child(entities, "entity").is_some() {
            Self::Flat(entities)
        } else if xml::first_child(entities, "data-source").is_some() {
            Self::DataSources(entities)
        } else {
            Self::Absent
        }
    }

    /// Collect the entities in document order, each with its element.
    ///
    /// For grouped documents the order is data-source order, then order
    /// within each data-source.
    pub(crate) fn collect(self) -> Vec<(Entity, Node<'a, 'input>)> {
        match self {
            Self::Flat(entities) => xml::children(entities, "entity").map(read_entity).collect(),
            Self::DataSources(entities) => xml::children(entities, "data-source")
                .inspect(|source| {
                    debug!(
                        data_source = source.attribute("id").unwrap_or_default(),
                        entities = xml::children(*source, "entity").count();
                        "Reading data source"
                    );
                })
                .flat_map(|source| xml::children(source, "entity"))
                .map(read_entity)
                .collect(),
            Self::Absent => Vec::new(),
        }
    }
}

fn read_entity<'a, 'input>(node: Node<'a, 'input>) -> (Entity, Node<'a, 'input>) {
    let entity = Entity::new(
        Id::new(&xml::attr(node, "id")),
        xml::attr(node, "name"),
        xml::attr(node, "fq-name"),
        xml::child_attr(node, "path", "name"),
    );
    (entity, node)
}
