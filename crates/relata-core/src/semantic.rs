//! Semantic diagram model types.
//!
//! This module contains the normalized representation of an entity-relationship
//! diagram after the XML document has been read. The model is immutable once
//! built and is shared read-only by the layout and export stages.
//!
//! # Pipeline Position
//!
//! ```text
//! ERD XML
//!     ↓ relata-parser (collect + build)
//! Semantic Model (these types)
//!     ↓ layout
//! Position map, bounds, zoom, connections
//!     ↓ export
//! Mermaid text / layout JSON
//! ```
//!
//! # Organization
//!
//! - [`diagram`] - [`Diagram`] and its [`DiagramSummary`]
//! - [`element`] - Diagram elements: [`Entity`] and [`Relation`]

pub mod diagram;
pub mod element;

pub use diagram::*;
pub use element::*;
