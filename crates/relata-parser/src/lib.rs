//! # Relata Parser
//!
//! Parser for ERD XML documents. This crate turns the text of an `.erd` file
//! into a [`relata_core::semantic::Diagram`].
//!
//! ## Usage
//!
//! ```
//! # use relata_parser::{parse, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         <diagram version="1" name="shop">
//!             <entities>
//!                 <entity id="E1" name="orders" fq-name="public.orders"/>
//!                 <entity id="E2" name="customers" fq-name="public.customers"/>
//!             </entities>
//!             <relations>
//!                 <relation name="fk_orders_customer" type="fk" pk-ref="E2" fk-ref="E1"/>
//!             </relations>
//!         </diagram>
//!     "#;
//!
//!     let diagram = parse(source)?;
//!     assert_eq!(diagram.entities().len(), 2);
//!     Ok(())
//! }
//! ```

mod builder;
mod entities;
pub mod error;
mod relations;
mod span;
mod xml;

pub use span::Span;

use log::{info, trace};

use relata_core::semantic::Diagram;

use builder::Builder;
use error::{Diagnostic, ParseError};

/// Parse ERD XML source into a semantic diagram.
///
/// The pipeline is:
///
/// 1. **Tokenize** - Parse the text into an XML tree
/// 2. **Resolve** - Check the `<diagram>` root and detect the entity shape
/// 3. **Collect** - Read entities and relations in document order
///
/// Warnings are discarded; use [`parse_with_warnings`] to keep them.
///
/// # Errors
///
/// Returns a [`ParseError`] if the source is not well-formed XML (`E001`)
/// or its root element is not `<diagram>` (`E100`).
pub fn parse(source: &str) -> Result<Diagram, ParseError> {
    parse_with_warnings(source).map(|(diagram, _)| diagram)
}

/// Parse ERD XML source, also returning non-fatal diagnostics.
///
/// # Errors
///
/// See [`parse`].
pub fn parse_with_warnings(source: &str) -> Result<(Diagram, Vec<Diagnostic>), ParseError> {
    trace!(len = source.len(); "Tokenizing source");
    let document = xml::tokenize(source)?;

    let (diagram, warnings) = Builder::default().build(&document)?;

    info!(
        name = diagram.name(),
        entities = diagram.entities().len(),
        relations = diagram.relations().len(),
        warnings = warnings.len();
        "Diagram parsed"
    );

    Ok((diagram, warnings))
}
