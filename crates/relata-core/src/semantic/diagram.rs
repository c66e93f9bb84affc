//! The root diagram type.
//!
//! A [`Diagram`] is created once per successful parse and is read-only
//! afterwards. The order of its entities and relations mirrors the source
//! document and drives the deterministic grid layout.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::{
    identifier::Id,
    semantic::element::{Entity, Relation},
};

/// A complete entity-relationship diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagram {
    version: String,
    name: String,
    entities: Vec<Entity>,
    relations: Vec<Relation>,
}

impl Diagram {
    /// Version reported when the document does not carry one.
    pub const DEFAULT_VERSION: &'static str = "1";

    /// Name reported when the document does not carry one.
    pub const DEFAULT_NAME: &'static str = "Untitled Diagram";

    /// Create a new diagram.
    ///
    /// Empty `version` or `name` values are replaced by
    /// [`Self::DEFAULT_VERSION`] and [`Self::DEFAULT_NAME`].
    pub fn new(
        version: impl Into<String>,
        name: impl Into<String>,
        entities: Vec<Entity>,
        relations: Vec<Relation>,
    ) -> Self {
        let version = non_empty_or(version.into(), Self::DEFAULT_VERSION);
        let name = non_empty_or(name.into(), Self::DEFAULT_NAME);

        Self {
            version,
            name,
            entities,
            relations,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entities in document order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Relations in document order.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// Returns `true` if the diagram has no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Look up an entity by identifier.
    ///
    /// Identifiers are not required to be unique. When several entities
    /// share an id the last one in document order wins, which matches how
    /// the position map stores them.
    pub fn entity(&self, id: Id) -> Option<&Entity> {
        self.entities.iter().rev().find(|entity| entity.id() == id)
    }

    /// Build an identifier index with last-write-wins semantics.
    pub fn entity_index(&self) -> HashMap<Id, &Entity> {
        self.entities
            .iter()
            .map(|entity| (entity.id(), entity))
            .collect()
    }

    /// Identifiers that appear on more than one entity, in first-occurrence order.
    pub fn duplicate_entity_ids(&self) -> Vec<Id> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut duplicates = Vec::new();

        for entity in &self.entities {
            let id = entity.id();
            if !seen.insert(id) && reported.insert(id) {
                duplicates.push(id);
            }
        }

        duplicates
    }

    /// Counts of tables, relationships and distinct schemas.
    pub fn summary(&self) -> DiagramSummary {
        let schemas: HashSet<&str> = self.entities.iter().map(Entity::path).collect();

        DiagramSummary {
            entity_count: self.entities.len(),
            relation_count: self.relations.len(),
            schema_count: schemas.len(),
        }
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Headline statistics for a diagram.
///
/// Entities without a path are grouped under the empty schema, so a diagram
/// mixing schema-less and schema-bound tables counts the empty path as one
/// schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramSummary {
    pub entity_count: usize,
    pub relation_count: usize,
    pub schema_count: usize,
}
