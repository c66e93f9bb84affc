//! Export functionality for Relata diagrams.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! converting a laid-out [`Scene`] into a textual output format. It is the
//! final stage in the Relata processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! ERD XML
//!     ↓ parse
//! Semantic Model (Diagram)
//!     ↓ layout
//! Scene (Diagram + PositionMap)
//!     ↓ export (this module)
//! Output Text
//! ```
//!
//! # Available Backends
//!
//! - [`mermaid`] - Mermaid ER diagram text via [`mermaid::Mermaid`]
//! - [`layout_json`] - JSON description of the scene via [`layout_json::LayoutJson`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`RelataError::Export`] at the crate boundary.
//!
//! [`RelataError::Export`]: crate::RelataError::Export

pub mod layout_json;
pub mod mermaid;

use crate::layout::Scene;

/// Abstraction for export backends.
///
/// Implementors turn a [`Scene`] into text. Backends that only need the
/// semantic model read it through [`Scene::diagram`].
pub trait Exporter {
    /// Exports `scene` to the backend's output format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if the scene cannot be encoded.
    fn export(&self, scene: &Scene) -> Result<String, Error>;
}

/// Errors that can occur during export.
#[derive(Debug)]
pub enum Error {
    /// Encoding the scene as JSON failed.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialize(error)
    }
}
