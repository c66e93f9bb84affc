//! Configuration types for Relata layout and export.
//!
//! This module provides configuration structures that control how diagrams
//! are laid out and exported. All types implement [`serde::Deserialize`] for
//! loading from external sources; every field is optional and falls back to
//! its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LayoutConfig`] - Grid tile size, spacing and outer padding.
//! - [`ViewportConfig`] - Reference viewport used to compute the fit zoom.
//! - [`ExportConfig`] - Default [`OutputFormat`].
//!
//! # Example
//!
//! ```
//! # use relata::config::{AppConfig, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.layout().tile_width(), 250.0);
//! assert_eq!(config.export().format(), OutputFormat::Mermaid);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

use serde::Deserialize;

use crate::RelataError;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Grid layout section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Viewport section.
    #[serde(default)]
    viewport: ViewportConfig,

    /// Export section.
    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, viewport: ViewportConfig, export: ExportConfig) -> Self {
        Self {
            layout,
            viewport,
            export,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the viewport configuration.
    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    /// Returns the export configuration.
    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Checks that every size is usable by the layout engine.
    ///
    /// # Errors
    ///
    /// Returns [`RelataError::Config`] naming the first offending key when a
    /// tile size, spacing or viewport dimension is not a positive number, or
    /// when a padding is negative.
    pub fn validate(&self) -> Result<(), RelataError> {
        let layout = &self.layout;
        ensure_positive("layout.tile_width", layout.tile_width)?;
        ensure_positive("layout.tile_height", layout.tile_height)?;
        ensure_positive("layout.spacing_x", layout.spacing_x)?;
        ensure_positive("layout.spacing_y", layout.spacing_y)?;
        ensure_non_negative("layout.padding", layout.padding)?;

        let viewport = &self.viewport;
        ensure_positive("viewport.width", viewport.width)?;
        ensure_positive("viewport.height", viewport.height)?;
        ensure_non_negative("viewport.padding", viewport.padding)?;
        ensure_positive("viewport.min_content_width", viewport.min_content_width)?;
        ensure_positive("viewport.min_content_height", viewport.min_content_height)?;

        Ok(())
    }
}

fn ensure_positive(key: &str, value: f32) -> Result<(), RelataError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(RelataError::Config(format!(
            "`{key}` must be a positive number, got {value}"
        )))
    }
}

fn ensure_non_negative(key: &str, value: f32) -> Result<(), RelataError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(RelataError::Config(format!(
            "`{key}` must not be negative, got {value}"
        )))
    }
}

/// Grid layout configuration.
///
/// The defaults reproduce the reference grid: 250x150 tiles on a 300x200
/// pitch, offset 50 from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    tile_width: f32,
    tile_height: f32,
    spacing_x: f32,
    spacing_y: f32,
    padding: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tile_width: 250.0,
            tile_height: 150.0,
            spacing_x: 300.0,
            spacing_y: 200.0,
            padding: 50.0,
        }
    }
}

impl LayoutConfig {
    /// Creates a new [`LayoutConfig`].
    ///
    /// # Arguments
    ///
    /// * `tile_width`, `tile_height` - Size of every entity box.
    /// * `spacing_x`, `spacing_y` - Distance between the origins of adjacent cells.
    /// * `padding` - Offset of the first cell from the origin.
    pub fn new(
        tile_width: f32,
        tile_height: f32,
        spacing_x: f32,
        spacing_y: f32,
        padding: f32,
    ) -> Self {
        Self {
            tile_width,
            tile_height,
            spacing_x,
            spacing_y,
            padding,
        }
    }

    pub fn tile_width(&self) -> f32 {
        self.tile_width
    }

    pub fn tile_height(&self) -> f32 {
        self.tile_height
    }

    pub fn spacing_x(&self) -> f32 {
        self.spacing_x
    }

    pub fn spacing_y(&self) -> f32 {
        self.spacing_y
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }
}

/// Reference viewport used by the fit-zoom computation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    width: f32,
    height: f32,
    padding: f32,
    min_content_width: f32,
    min_content_height: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            padding: 100.0,
            min_content_width: 400.0,
            min_content_height: 300.0,
        }
    }
}

impl ViewportConfig {
    /// Creates a new [`ViewportConfig`].
    ///
    /// # Arguments
    ///
    /// * `width`, `height` - Size of the reference viewport.
    /// * `padding` - Margin added to every side of the content bounds.
    /// * `min_content_width`, `min_content_height` - Floor for the padded content size.
    pub fn new(
        width: f32,
        height: f32,
        padding: f32,
        min_content_width: f32,
        min_content_height: f32,
    ) -> Self {
        Self {
            width,
            height,
            padding,
            min_content_width,
            min_content_height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn min_content_width(&self) -> f32 {
        self.min_content_width
    }

    pub fn min_content_height(&self) -> f32 {
        self.min_content_height
    }
}

/// Export configuration section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct ExportConfig {
    /// Format used when none is requested explicitly.
    #[serde(default)]
    format: OutputFormat,
}

impl ExportConfig {
    /// Creates a new [`ExportConfig`] with the given default format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Returns the default [`OutputFormat`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// Output formats produced by the exporters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Mermaid ER diagram with one line per resolved relation.
    #[default]
    Mermaid,
    /// Mermaid ER diagram with cardinality inferred from repeated key pairs.
    MermaidDetailed,
    /// JSON document with the diagram, positions, zoom and connections.
    Layout,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mermaid => "mermaid",
            Self::MermaidDetailed => "mermaid-detailed",
            Self::Layout => "layout",
        };
        f.write_str(name)
    }
}
