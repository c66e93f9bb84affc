//! Deterministic grid placement.
//!
//! Entities are placed row-major in document order. The column count depends
//! only on the number of entities:
//!
//! | entities | columns                  |
//! |----------|--------------------------|
//! | 0        | 0                        |
//! | 1        | 1                        |
//! | 2..=4    | 2                        |
//! | n > 4    | `ceil(sqrt(n * 1.2))`    |
//!
//! Re-running the layout on the same entity sequence yields the same map.

use log::debug;

use relata_core::{
    geometry::{Point, Size},
    semantic::Entity,
};

use crate::{
    config::LayoutConfig,
    layout::positions::{Position, PositionMap},
};

/// Minimum drawing surface reported by [`GridLayout::canvas_size`].
const MIN_CANVAS: Size = Size::new(1200.0, 800.0);

/// Grid layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    tile: Size,
    spacing_x: f32,
    spacing_y: f32,
    padding: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl GridLayout {
    /// Creates a grid engine from the layout configuration.
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            tile: Size::new(config.tile_width(), config.tile_height()),
            spacing_x: config.spacing_x(),
            spacing_y: config.spacing_y(),
            padding: config.padding(),
        }
    }

    /// Number of grid columns used for `count` entities.
    pub fn columns(count: usize) -> usize {
        match count {
            0 => 0,
            1 => 1,
            2..=4 => 2,
            n => (n as f64 * 1.2).sqrt().ceil() as usize,
        }
    }

    /// Number of grid rows used for `count` entities.
    pub fn rows(count: usize) -> usize {
        match Self::columns(count) {
            0 => 0,
            columns => count.div_ceil(columns),
        }
    }

    /// The box of the entity at sequence `index` in a grid of `columns` columns.
    pub fn cell(&self, index: usize, columns: usize) -> Position {
        let columns = columns.max(1);
        let row = index / columns;
        let col = index % columns;

        Position::new(
            Point::new(
                col as f32 * self.spacing_x + self.padding,
                row as f32 * self.spacing_y + self.padding,
            ),
            self.tile,
        )
    }

    /// Lay out `entities` in sequence order.
    ///
    /// Entities sharing an id collapse to one entry holding the cell of the
    /// last of them.
    pub fn layout(&self, entities: &[Entity]) -> PositionMap {
        let columns = Self::columns(entities.len());
        debug!(
            entities = entities.len(),
            columns,
            rows = Self::rows(entities.len());
            "Computing grid layout"
        );

        let mut positions = PositionMap::new();
        for (index, entity) in entities.iter().enumerate() {
            positions.insert(entity.id(), self.cell(index, columns));
        }
        positions
    }

    /// Minimum drawing surface that shows the whole initial grid.
    ///
    /// Never smaller than 1200x800.
    pub fn canvas_size(&self, count: usize) -> Size {
        let columns = Self::columns(count) as f32;
        let rows = Self::rows(count) as f32;

        Size::new(
            columns * self.spacing_x + 2.0 * self.padding,
            rows * self.spacing_y + 2.0 * self.padding,
        )
        .max(MIN_CANVAS)
    }
}
