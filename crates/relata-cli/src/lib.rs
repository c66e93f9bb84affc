//! CLI logic for the Relata ERD tool.
//!
//! This module contains the core CLI logic: it validates the input path,
//! loads configuration, runs the parse/layout/export pipeline and writes
//! the result.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Format};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use log::{info, warn};

use relata::{DiagramBuilder, RelataError, config::OutputFormat};

use error_adapter::{print_reports, warning_reports};

/// Extension every input document must carry.
const INPUT_EXTENSION: &str = "erd";

/// Run the Relata CLI application
///
/// This function processes the input file through the Relata pipeline
/// and writes the export to the output file, or to standard output when
/// no output path is given.
///
/// # Errors
///
/// Returns `RelataError` for:
/// - Input paths without the `.erd` extension
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Export errors
pub fn run(args: &Args) -> Result<(), RelataError> {
    info!(
        input_path = args.input,
        output_path:? = args.output;
        "Processing diagram"
    );

    ensure_erd_input(Path::new(&args.input))?;

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let format = args
        .format
        .map_or(app_config.export().format(), OutputFormat::from);

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process diagram using DiagramBuilder API
    let builder = DiagramBuilder::new(app_config)?;
    let (diagram, warnings) = builder.parse_with_warnings(&source)?;
    if !warnings.is_empty() {
        warn!(count = warnings.len(); "Document has warnings");
        print_reports(&warning_reports(&warnings, &source));
    }

    let scene = builder.scene(diagram);
    let output = builder.export(&scene, format)?;

    // Write output
    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path, format:% = format; "Diagram exported successfully");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn ensure_erd_input(path: &Path) -> Result<(), RelataError> {
    if path.extension().and_then(|ext| ext.to_str()) == Some(INPUT_EXTENSION) {
        return Ok(());
    }

    Err(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!(
            "Input file `{}` must have the .{INPUT_EXTENSION} extension",
            path.display()
        ),
    )
    .into())
}
