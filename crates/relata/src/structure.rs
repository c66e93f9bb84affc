//! Relation graph over a diagram's entities.
//!
//! [`RelationGraph`] indexes the resolved relations of a [`Diagram`] as a
//! directed graph (primary-key side to foreign-key side). It answers the
//! neighbourhood queries a viewer uses for highlighting related tables, and
//! remembers which relations could not be resolved.

use std::collections::HashMap;

use indexmap::IndexSet;
use log::{debug, trace};
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};

use relata_core::{identifier::Id, semantic::Diagram};

/// Directed graph with one node per distinct entity id and one edge per
/// resolved relation.
///
/// Edge weights are indices into the diagram's relation sequence.
#[derive(Debug)]
pub struct RelationGraph {
    graph: DiGraph<Id, usize>,
    node_id_map: HashMap<Id, NodeIndex>,
    dangling: Vec<usize>,
}

impl RelationGraph {
    /// Builds the graph for `diagram`.
    pub fn new(diagram: &Diagram) -> Self {
        let mut graph = DiGraph::new();
        let mut node_id_map = HashMap::new();

        for entity in diagram.entities() {
            node_id_map
                .entry(entity.id())
                .or_insert_with(|| graph.add_node(entity.id()));
        }

        let mut dangling = Vec::new();
        for (index, relation) in diagram.relations().iter().enumerate() {
            match (
                node_id_map.get(&relation.pk_ref()),
                node_id_map.get(&relation.fk_ref()),
            ) {
                (Some(&pk), Some(&fk)) => {
                    graph.add_edge(pk, fk, index);
                }
                _ => {
                    trace!(relation = relation.name(), index; "Relation left out of graph");
                    dangling.push(index);
                }
            }
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            dangling = dangling.len();
            "Relation graph built"
        );

        Self {
            graph,
            node_id_map,
            dangling,
        }
    }

    /// Number of distinct entity ids.
    pub fn entity_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of resolved relations.
    pub fn relation_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Entities connected to `id` by a relation in either direction.
    ///
    /// A self-referencing relation makes `id` related to itself. Unknown ids
    /// have no related entities.
    pub fn related(&self, id: Id) -> IndexSet<Id> {
        let Some(&node) = self.node_id_map.get(&id) else {
            return IndexSet::new();
        };

        self.graph
            .neighbors_undirected(node)
            .map(|neighbor| self.graph[neighbor])
            .collect()
    }

    /// Number of resolved relations that start or end at `id`.
    ///
    /// A self-referencing relation counts once.
    pub fn connection_count(&self, id: Id) -> usize {
        let Some(&node) = self.node_id_map.get(&id) else {
            return 0;
        };

        let outgoing = self.graph.edges_directed(node, Direction::Outgoing).count();
        let incoming = self
            .graph
            .edges_directed(node, Direction::Incoming)
            .filter(|edge| edge.source() != node)
            .count();
        outgoing + incoming
    }

    /// Indices of relations with at least one unresolved endpoint.
    pub fn dangling(&self) -> &[usize] {
        &self.dangling
    }
}
