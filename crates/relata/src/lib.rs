//! Relata - entity-relationship diagram ingestion, layout and export.
//!
//! Reads ERD XML documents, places every entity on a deterministic grid,
//! and exports the result as Mermaid ER diagram text or as a JSON layout
//! description for renderers.

pub mod config;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use relata_core::{geometry, identifier, semantic};

pub use error::RelataError;

use log::{debug, info, trace, warn};

use relata_parser::error::Diagnostic;

use config::{AppConfig, OutputFormat};
use export::{Exporter, layout_json::LayoutJson, mermaid::Mermaid};
use layout::Scene;

/// Builder for parsing, laying out and exporting ERD diagrams.
///
/// # Examples
///
/// ```rust
/// use relata::{DiagramBuilder, config::AppConfig};
///
/// let source = r#"
///     <diagram name="shop">
///         <entities>
///             <entity id="E1" name="customers"/>
///             <entity id="E2" name="orders"/>
///         </entities>
///         <relations>
///             <relation name="fk_orders_customer" pk-ref="E1" fk-ref="E2"/>
///         </relations>
///     </diagram>
/// "#;
///
/// let builder = DiagramBuilder::new(AppConfig::default()).expect("Default config is valid");
///
/// // Parse source to semantic model
/// let diagram = builder.parse(source).expect("Failed to parse");
///
/// // Export as Mermaid
/// let mermaid = builder.to_mermaid(&diagram);
/// assert!(mermaid.starts_with("erDiagram\n"));
///
/// // Or use default config
/// let builder = DiagramBuilder::default();
/// ```
#[derive(Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RelataError::Config`] if a size in `config` is not a
    /// positive finite number.
    pub fn new(config: AppConfig) -> Result<Self, RelataError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse ERD XML into a semantic diagram.
    ///
    /// Non-fatal diagnostics (duplicate ids, dangling relations) are logged
    /// and dropped; use [`Self::parse_with_warnings`] to keep them.
    ///
    /// # Errors
    ///
    /// Returns [`RelataError::Parse`] if the source is not well-formed XML or
    /// has no `<diagram>` root.
    pub fn parse(&self, source: &str) -> Result<semantic::Diagram, RelataError> {
        self.parse_with_warnings(source)
            .map(|(diagram, _)| diagram)
    }

    /// Parse ERD XML, also returning non-fatal diagnostics.
    ///
    /// # Errors
    ///
    /// See [`Self::parse`].
    pub fn parse_with_warnings(
        &self,
        source: &str,
    ) -> Result<(semantic::Diagram, Vec<Diagnostic>), RelataError> {
        info!("Parsing diagram");

        let (diagram, warnings) = relata_parser::parse_with_warnings(source)
            .map_err(|err| RelataError::new_parse_error(err, source))?;

        if !warnings.is_empty() {
            warn!(warnings = warnings.len(); "Diagram parsed with warnings");
        }
        for warning in &warnings {
            debug!(warning:% = warning; "Parser warning");
        }
        debug!(
            entities = diagram.entities().len(),
            relations = diagram.relations().len();
            "Diagram parsed successfully"
        );
        trace!(diagram:?; "Parsed diagram");

        Ok((diagram, warnings))
    }

    /// Lay out a diagram, producing a scene that owns it.
    pub fn scene(&self, diagram: semantic::Diagram) -> Scene {
        info!(name = diagram.name(); "Computing layout");
        Scene::new(diagram, &self.config)
    }

    /// Basic Mermaid ER diagram text.
    pub fn to_mermaid(&self, diagram: &semantic::Diagram) -> String {
        Mermaid::new().render(diagram)
    }

    /// Detailed Mermaid ER diagram text with inferred cardinality.
    pub fn to_mermaid_detailed(&self, diagram: &semantic::Diagram) -> String {
        Mermaid::detailed().render(diagram)
    }

    /// Pretty-printed layout JSON for a scene.
    ///
    /// # Errors
    ///
    /// Returns [`RelataError::Export`] if the scene cannot be serialized.
    pub fn layout_json(&self, scene: &Scene) -> Result<String, RelataError> {
        Ok(LayoutJson::pretty().export(scene)?)
    }

    /// Export a scene in the given format.
    ///
    /// # Errors
    ///
    /// Returns [`RelataError::Export`] if the output cannot be produced.
    pub fn export(&self, scene: &Scene, format: OutputFormat) -> Result<String, RelataError> {
        info!(format:% = format; "Exporting diagram");
        let output = match format {
            OutputFormat::Mermaid => Mermaid::new().export(scene)?,
            OutputFormat::MermaidDetailed => Mermaid::detailed().export(scene)?,
            OutputFormat::Layout => LayoutJson::pretty().export(scene)?,
        };

        debug!(bytes = output.len(); "Export finished");
        Ok(output)
    }

    /// Render `source` in the given format.
    ///
    /// This runs the whole pipeline: parse, lay out, export.
    ///
    /// # Errors
    ///
    /// Returns [`RelataError::Parse`] for unreadable documents and
    /// [`RelataError::Export`] if the output cannot be produced.
    pub fn render(&self, source: &str, format: OutputFormat) -> Result<String, RelataError> {
        let diagram = self.parse(source)?;
        let scene = self.scene(diagram);
        self.export(&scene, format)
    }
}
