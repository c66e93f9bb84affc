//! Relata Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Relata parser,
//! layout engine and exporters. It includes:
//!
//! - **Identifiers**: String-interned entity identifiers ([`identifier::Id`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Semantic**: The entity-relationship diagram model ([`semantic`] module)

pub mod geometry;
pub mod identifier;
pub mod semantic;
