//! Mermaid ER diagram export.
//!
//! Every entity becomes a block with a single synthetic `string id PK`
//! attribute. Relations whose endpoints both resolve become relationship
//! lines; dangling relations are left out.
//!
//! ```text
//! erDiagram
//!     customers {
//!         string id PK
//!     }
//!     orders {
//!         string id PK
//!     }
//!     customers ||--o{ orders : "fk_orders_customer"
//! ```
//!
//! The detailed variant prints one line per distinct `(pk, fk)` pair. A pair
//! seen once is drawn one-to-many (`||--o{`); a repeated pair is drawn
//! one-to-one (`||--||`). This repeat-count rule is a heuristic kept for
//! compatibility with existing output, not a statement about the schema.

use indexmap::IndexMap;
use log::debug;

use relata_core::{
    identifier::Id,
    semantic::{Diagram, Entity},
};

use crate::{
    export::{Error, Exporter},
    layout::Scene,
};

const HEADER: &str = "erDiagram";
const ONE_TO_MANY: &str = "||--o{";
const ONE_TO_ONE: &str = "||--||";
const DETAILED_LABEL: &str = "references";

/// Mermaid ER diagram exporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mermaid {
    detailed: bool,
}

impl Mermaid {
    /// The basic exporter: one relationship line per resolved relation.
    pub fn new() -> Self {
        Self { detailed: false }
    }

    /// The detailed exporter with inferred cardinality.
    pub fn detailed() -> Self {
        Self { detailed: true }
    }

    /// Renders `diagram` as Mermaid text.
    ///
    /// The output always ends with a newline. A diagram without entities
    /// yields just the header line.
    pub fn render(&self, diagram: &Diagram) -> String {
        let mut lines = vec![HEADER.to_string()];

        for entity in diagram.entities() {
            lines.push(format!("    {} {{", entity_label(entity)));
            lines.push("        string id PK".to_string());
            lines.push("    }".to_string());
        }

        let relationships = if self.detailed {
            detailed_relationships(diagram)
        } else {
            basic_relationships(diagram)
        };
        debug!(
            entities = diagram.entities().len(),
            relationships = relationships.len(),
            detailed = self.detailed;
            "Rendered Mermaid diagram"
        );
        lines.extend(relationships);

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }
}

impl Exporter for Mermaid {
    fn export(&self, scene: &Scene) -> Result<String, Error> {
        Ok(self.render(scene.diagram()))
    }
}

fn basic_relationships(diagram: &Diagram) -> Vec<String> {
    let index = diagram.entity_index();

    diagram
        .relations()
        .iter()
        .filter_map(|relation| {
            let pk = index.get(&relation.pk_ref())?;
            let fk = index.get(&relation.fk_ref())?;
            Some(relationship_line(
                pk,
                fk,
                ONE_TO_MANY,
                &relation_label(relation.name()),
            ))
        })
        .collect()
}

fn detailed_relationships(diagram: &Diagram) -> Vec<String> {
    let index = diagram.entity_index();

    let mut pairs: IndexMap<(Id, Id), usize> = IndexMap::new();
    for relation in diagram.relations() {
        *pairs
            .entry((relation.pk_ref(), relation.fk_ref()))
            .or_default() += 1;
    }

    pairs
        .into_iter()
        .filter_map(|((pk_ref, fk_ref), count)| {
            let pk = index.get(&pk_ref)?;
            let fk = index.get(&fk_ref)?;
            let cardinality = if count > 1 { ONE_TO_ONE } else { ONE_TO_MANY };
            Some(relationship_line(pk, fk, cardinality, DETAILED_LABEL))
        })
        .collect()
}

fn relationship_line(pk: &Entity, fk: &Entity, cardinality: &str, label: &str) -> String {
    format!(
        "    {} {cardinality} {} : \"{label}\"",
        entity_label(pk),
        entity_label(fk)
    )
}

/// Quoted relationship text must stay on one line and cannot hold `"`.
fn relation_label(name: &str) -> String {
    name.replace('"', "'").replace(['\r', '\n'], " ")
}

/// The name an entity is declared under.
///
/// Falls back to the sanitized id when the name sanitizes to nothing, and to
/// `entity` when the id does too.
fn entity_label(entity: &Entity) -> String {
    let name = sanitize_name(entity.name());
    if !name.is_empty() {
        return name;
    }

    let id = sanitize_name(&entity.id().to_string());
    if !id.is_empty() {
        return id;
    }

    "entity".to_string()
}

/// Makes `name` safe for use as a Mermaid entity name.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, then runs of
/// underscores collapse to one.
///
/// # Examples
///
/// ```
/// # use relata::export::mermaid::sanitize_name;
/// assert_eq!(sanitize_name("public.order items"), "public_order_items");
/// assert_eq!(sanitize_name("a--b__c"), "a_b_c");
/// ```
pub fn sanitize_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    for ch in name.chars() {
        let ch = if ch.is_ascii_alphanumeric() || ch == '_' {
            ch
        } else {
            '_'
        };
        if ch == '_' && sanitized.ends_with('_') {
            continue;
        }
        sanitized.push(ch);
    }
    sanitized
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn sanitize_is_idempotent(name in ".{0,40}") {
            let once = sanitize_name(&name);
            prop_assert_eq!(sanitize_name(&once), once);
        }

        #[test]
        fn sanitize_output_is_safe(name in ".{0,40}") {
            let sanitized = sanitize_name(&name);

            prop_assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
            prop_assert!(!sanitized.contains("__"));
        }
    }
}
