//! Fit-to-viewport zoom.

use relata_core::geometry::{Bounds, Size};

use crate::{config::ViewportConfig, layout::positions::PositionMap};

/// A reference viewport that content is zoomed to fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: Size,
    padding: f32,
    min_content: Size,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&ViewportConfig::default())
    }
}

impl Viewport {
    pub fn new(config: &ViewportConfig) -> Self {
        Self {
            size: Size::new(config.width(), config.height()),
            padding: config.padding(),
            min_content: Size::new(config.min_content_width(), config.min_content_height()),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Zoom factor that fits `bounds` into the viewport.
    ///
    /// The bounds are padded on every side and floored at the minimum content
    /// size before the ratio is taken. The result is capped at `1.0`, so
    /// content is shrunk to fit but never enlarged.
    pub fn fit_zoom(&self, bounds: Bounds) -> f32 {
        let content = bounds
            .expand(self.padding)
            .to_size()
            .max(self.min_content);

        (self.size.width() / content.width())
            .min(self.size.height() / content.height())
            .min(1.0)
    }

    /// Zoom factor for the current positions; `1.0` when there are none.
    pub fn fit_positions(&self, positions: &PositionMap) -> f32 {
        positions
            .bounds()
            .map_or(1.0, |bounds| self.fit_zoom(bounds))
    }
}
