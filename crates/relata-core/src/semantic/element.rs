//! Diagram elements: entities (tables) and relations (foreign keys).

use serde::Serialize;

use crate::identifier::Id;

/// A table or record type node in the diagram.
///
/// `id` is the join key used by relations. `path` is the optional schema or
/// namespace grouping and is empty when the document does not provide one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    id: Id,
    name: String,
    fq_name: String,
    path: String,
}

impl Entity {
    /// Create a new entity.
    pub fn new(
        id: Id,
        name: impl Into<String>,
        fq_name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            fq_name: fq_name.into(),
            path: path.into(),
        }
    }

    /// The identifier relations refer to.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The display name of the entity.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fully qualified name, e.g. `catalog.schema.table`.
    pub fn fq_name(&self) -> &str {
        &self.fq_name
    }

    /// The schema/namespace grouping, possibly empty.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// A directed foreign-key edge between two entities.
///
/// `pk_ref` names the "one" (primary-key) side and `fk_ref` the "many"
/// (foreign-key) side. Neither reference is checked against the entity list;
/// a relation whose endpoint does not resolve is *dangling* and is skipped by
/// consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relation {
    name: String,
    fq_name: String,
    #[serde(rename = "type")]
    kind: String,
    pk_ref: Id,
    fk_ref: Id,
}

impl Relation {
    /// Create a new relation.
    pub fn new(
        name: impl Into<String>,
        fq_name: impl Into<String>,
        kind: impl Into<String>,
        pk_ref: Id,
        fk_ref: Id,
    ) -> Self {
        Self {
            name: name.into(),
            fq_name: fq_name.into(),
            kind: kind.into(),
            pk_ref,
            fk_ref,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fq_name(&self) -> &str {
        &self.fq_name
    }

    /// The relation type as written in the document (e.g. `fk`, `vfk`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Identifier of the primary-key ("one") side.
    pub fn pk_ref(&self) -> Id {
        self.pk_ref
    }

    /// Identifier of the foreign-key ("many") side.
    pub fn fk_ref(&self) -> Id {
        self.fk_ref
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_accessors() {
        let entity = Entity::new(Id::new("E1"), "orders", "shop.public.orders", "public");

        assert_eq!(entity.id(), "E1");
        assert_eq!(entity.name(), "orders");
        assert_eq!(entity.fq_name(), "shop.public.orders");
        assert_eq!(entity.path(), "public");
    }

    #[test]
    fn test_relation_serializes_type_field() {
        let relation = Relation::new("fk_orders", "db.fk_orders", "fk", Id::new("E1"), Id::new("E2"));
        let json = serde_json::to_value(&relation).unwrap();

        assert_eq!(json["type"], "fk");
        assert_eq!(json["pkRef"], "E1");
        assert_eq!(json["fkRef"], "E2");
        assert_eq!(json["fqName"], "db.fk_orders");
    }
}
