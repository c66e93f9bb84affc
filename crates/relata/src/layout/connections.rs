//! Connector segments between related entity boxes.

use serde::Serialize;

use relata_core::{geometry::Point, identifier::Id, semantic::Relation};

use crate::layout::positions::PositionMap;

/// A straight connector for one relation.
///
/// It runs from the bottom-center of the primary-key box to the top-center
/// of the foreign-key box.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    relation_index: usize,
    name: String,
    pk_ref: Id,
    fk_ref: Id,
    start: Point,
    end: Point,
}

impl Connection {
    /// Index of the relation in the diagram's relation sequence.
    pub fn relation_index(&self) -> usize {
        self.relation_index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pk_ref(&self) -> Id {
        self.pk_ref
    }

    pub fn fk_ref(&self) -> Id {
        self.fk_ref
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    /// Where the relation name is drawn: the midpoint of the segment.
    pub fn label_anchor(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// Computes one connector per relation whose endpoints both have a position.
///
/// Relations with an unresolved endpoint are skipped. The result follows
/// relation order.
pub fn connections(relations: &[Relation], positions: &PositionMap) -> Vec<Connection> {
    relations
        .iter()
        .enumerate()
        .filter_map(|(relation_index, relation)| {
            let pk = positions.get(relation.pk_ref())?;
            let fk = positions.get(relation.fk_ref())?;

            Some(Connection {
                relation_index,
                name: relation.name().to_string(),
                pk_ref: relation.pk_ref(),
                fk_ref: relation.fk_ref(),
                start: pk.bottom_center(),
                end: fk.top_center(),
            })
        })
        .collect()
}
