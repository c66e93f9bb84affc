//! A diagram together with its layout state.

use log::{debug, info};

use relata_core::{
    geometry::{Bounds, Size},
    identifier::Id,
    semantic::Diagram,
};

use crate::{
    config::AppConfig,
    layout::{
        connections::{Connection, connections},
        grid::GridLayout,
        positions::PositionMap,
        viewport::Viewport,
    },
};

/// One loaded diagram and the positions of its entities.
///
/// The scene owns its [`PositionMap`]. The grid layout runs once, when the
/// scene is created; after that positions only change through
/// [`Scene::relocate`] until [`Scene::reset_layout`] is called.
#[derive(Debug, Clone)]
pub struct Scene {
    diagram: Diagram,
    positions: PositionMap,
    grid: GridLayout,
    viewport: Viewport,
}

impl Scene {
    /// Creates a scene and computes the initial layout.
    pub fn new(diagram: Diagram, config: &AppConfig) -> Self {
        let grid = GridLayout::new(config.layout());
        let viewport = Viewport::new(config.viewport());

        let mut positions = PositionMap::new();
        if positions.ensure_initialized(diagram.entities(), &grid) {
            info!(positions = positions.len(); "Initial layout computed");
        }

        Self {
            diagram,
            positions,
            grid,
            viewport,
        }
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub fn positions(&self) -> &PositionMap {
        &self.positions
    }

    /// Moves one entity. See [`PositionMap::relocate`].
    pub fn relocate(&mut self, id: Id, x: f32, y: f32) -> bool {
        let moved = self.positions.relocate(id, x, y);
        debug!(id:% = id, x, y, moved; "Relocate entity");
        moved
    }

    /// Bounds of all entity boxes, or `None` for an empty diagram.
    pub fn bounds(&self) -> Option<Bounds> {
        self.positions.bounds()
    }

    /// Zoom factor that fits the current positions into the viewport.
    pub fn zoom(&self) -> f32 {
        self.viewport.fit_positions(&self.positions)
    }

    /// Connectors for every resolved relation.
    pub fn connections(&self) -> Vec<Connection> {
        connections(self.diagram.relations(), &self.positions)
    }

    /// Minimum drawing surface for the initial grid.
    pub fn canvas_size(&self) -> Size {
        self.grid.canvas_size(self.diagram.entities().len())
    }

    /// Discards all relocations and lays the diagram out again.
    pub fn reset_layout(&mut self) {
        self.positions.clear();
        self.positions
            .ensure_initialized(self.diagram.entities(), &self.grid);
        debug!(positions = self.positions.len(); "Layout reset");
    }
}
