//! JSON description of a laid-out scene.
//!
//! This is the hand-off format for renderers: it carries the semantic model
//! together with every derived value a viewer needs on first paint.
//!
//! ```json
//! {
//!   "diagram": { "version": "1", "name": "shop", "entities": [..], "relations": [..] },
//!   "positions": { "E1": { "x": 50.0, "y": 50.0, "width": 250.0, "height": 150.0 } },
//!   "bounds": { "minX": 50.0, "minY": 50.0, "maxX": 300.0, "maxY": 200.0 },
//!   "zoom": 1.0,
//!   "canvas": { "width": 1200.0, "height": 800.0 },
//!   "connections": [..],
//!   "connectionCounts": { "E1": 0 },
//!   "danglingRelations": [],
//!   "summary": { "entityCount": 1, "relationCount": 0, "schemaCount": 1 }
//! }
//! ```

use indexmap::IndexMap;
use serde::Serialize;

use relata_core::{
    geometry::{Bounds, Size},
    identifier::Id,
    semantic::{Diagram, DiagramSummary},
};

use crate::{
    export::{Error, Exporter},
    layout::{Connection, PositionMap, Scene},
    structure::RelationGraph,
};

/// Layout JSON exporter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutJson {
    pretty: bool,
}

impl LayoutJson {
    /// Compact single-line output.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Indented output.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDocument<'a> {
    diagram: &'a Diagram,
    positions: &'a PositionMap,
    bounds: Option<Bounds>,
    zoom: f32,
    canvas: Size,
    connections: Vec<Connection>,
    connection_counts: IndexMap<Id, usize>,
    dangling_relations: &'a [usize],
    duplicate_ids: Vec<Id>,
    summary: DiagramSummary,
}

impl Exporter for LayoutJson {
    fn export(&self, scene: &Scene) -> Result<String, Error> {
        let graph = RelationGraph::new(scene.diagram());

        let document = LayoutDocument {
            diagram: scene.diagram(),
            positions: scene.positions(),
            bounds: scene.bounds(),
            zoom: scene.zoom(),
            canvas: scene.canvas_size(),
            connections: scene.connections(),
            connection_counts: scene
                .positions()
                .iter()
                .map(|(id, _)| (id, graph.connection_count(id)))
                .collect(),
            dangling_relations: graph.dangling(),
            duplicate_ids: scene.diagram().duplicate_entity_ids(),
            summary: scene.diagram().summary(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use relata_core::semantic::{Entity, Relation};

    use super::*;
    use crate::config::AppConfig;

    fn scene() -> Scene {
        let diagram = Diagram::new(
            "3",
            "shop",
            vec![
                Entity::new(Id::new("E1"), "customers", "public.customers", "public"),
                Entity::new(Id::new("E2"), "orders", "public.orders", "public"),
            ],
            vec![
                Relation::new("fk", "public.orders.fk", "fk", Id::new("E1"), Id::new("E2")),
                Relation::new("ghost", "", "fk", Id::new("E1"), Id::new("E9")),
            ],
        );
        Scene::new(diagram, &AppConfig::default())
    }

    fn export(scene: &Scene) -> Value {
        let json = LayoutJson::new().export(scene).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn test_document_fields() {
        let value = export(&scene());

        assert_eq!(value["diagram"]["name"], "shop");
        assert_eq!(value["diagram"]["entities"][0]["fqName"], "public.customers");
        assert_eq!(value["diagram"]["relations"][0]["type"], "fk");
        assert_eq!(value["diagram"]["relations"][0]["pkRef"], "E1");
        assert_eq!(value["positions"]["E2"]["x"], 350.0);
        assert_eq!(value["bounds"]["minX"], 50.0);
        assert_eq!(value["zoom"], 1.0);
        assert_eq!(value["canvas"]["width"], 1200.0);
        assert_eq!(value["connections"].as_array().unwrap().len(), 1);
        assert_eq!(value["connections"][0]["relationIndex"], 0);
        assert_eq!(value["connectionCounts"]["E1"], 1);
        assert_eq!(value["danglingRelations"][0], 1);
        assert!(value["duplicateIds"].as_array().unwrap().is_empty());
        assert_eq!(value["summary"]["schemaCount"], 1);
    }

    #[test]
    fn test_duplicate_ids_share_one_position() {
        let diagram = Diagram::new(
            "1",
            "merged",
            vec![
                Entity::new(Id::new("E1"), "events", "", ""),
                Entity::new(Id::new("E1"), "events_v2", "", ""),
            ],
            Vec::new(),
        );

        let value = export(&Scene::new(diagram, &AppConfig::default()));

        assert_eq!(value["duplicateIds"], serde_json::json!(["E1"]));
        assert_eq!(value["positions"].as_object().unwrap().len(), 1);
        assert_eq!(value["positions"]["E1"]["x"], 350.0);
    }

    #[test]
    fn test_relocation_is_exported() {
        let mut scene = scene();
        scene.relocate(Id::new("E1"), -5.0, 700.0);

        let value = export(&scene);

        assert_eq!(value["positions"]["E1"]["x"], 0.0);
        assert_eq!(value["positions"]["E1"]["y"], 700.0);
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new(
            Diagram::new("", "", Vec::new(), Vec::new()),
            &AppConfig::default(),
        );

        let value = export(&scene);

        assert!(value["bounds"].is_null());
        assert_eq!(value["zoom"], 1.0);
        assert!(value["positions"].as_object().unwrap().is_empty());
        assert_eq!(value["diagram"]["name"], "Untitled Diagram");
    }

    #[test]
    fn test_pretty_output_is_equivalent() {
        let scene = scene();

        let compact = LayoutJson::new().export(&scene).unwrap();
        let pretty = LayoutJson::pretty().export(&scene).unwrap();

        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );
    }
}
