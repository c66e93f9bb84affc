//! Layout engine for positioning diagram entities.
//!
//! This module assigns every entity a box on a fixed grid, keeps those boxes
//! in an owned [`PositionMap`], and derives everything a renderer needs from
//! the current positions: content bounds, a zoom factor that fits them into
//! a reference viewport, and the connector segments between related boxes.
//!
//! # Pipeline Position
//!
//! ```text
//! Semantic Model (Diagram)
//!     ↓ layout (this module)
//! Scene (Diagram + PositionMap)
//!     ↓ export
//! Output
//! ```
//!
//! # Submodules
//!
//! - [`grid`] - Deterministic grid placement driven by entity count and order
//! - [`positions`] - Entity boxes and the relocation operations on them
//! - [`viewport`] - Fit-to-viewport zoom
//! - [`connections`] - Connector segments between resolved relation endpoints
//! - [`scene`] - A diagram together with its explicitly owned layout state

pub mod connections;
pub mod grid;
pub mod positions;
pub mod scene;
pub mod viewport;

pub use connections::{Connection, connections};
pub use grid::GridLayout;
pub use positions::{Position, PositionMap};
pub use scene::Scene;
pub use viewport::Viewport;
