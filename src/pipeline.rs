//! End-to-end conversion: read a plan export, build the document, emit it.

use std::path::Path;
use tracing::info;

use crate::config::Settings;
use crate::convert::build_document;
use crate::document::Document;
use crate::emit::Emitter;
use crate::error::Result;
use crate::plan::{Plan, PlanReader};

/// A converted plan together with the records it came from.
#[derive(Debug)]
pub struct Conversion {
    /// The plan as read from disk.
    pub plan: Plan,
    /// The document built from the plan's diff.
    pub document: Document,
}

/// Reads and converts a plan file without serializing the result.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded.
pub fn load_and_convert(path: impl AsRef<Path>, settings: &Settings) -> Result<Conversion> {
    let plan = PlanReader::new()
        .with_format(settings.input_format)
        .load_file(path)?;
    let document = build_document(plan.modules());
    info!(
        "Built document with {} top-level keys from {} modules",
        document.len(),
        plan.diff.modules.len()
    );
    Ok(Conversion { plan, document })
}

/// A conversion together with its serialized document.
#[derive(Debug)]
pub struct Rendered {
    /// The plan and the document built from it.
    pub conversion: Conversion,
    /// The document serialized in the configured output format.
    pub output: String,
}

/// Converts a plan file into its serialized document.
///
/// Either the complete document is returned or an error; there is no
/// partial output.
///
/// # Errors
///
/// Returns an error if the plan cannot be loaded or the document cannot be
/// serialized.
pub fn convert_file(path: impl AsRef<Path>, settings: &Settings) -> Result<Rendered> {
    let conversion = load_and_convert(path, settings)?;
    let output = Emitter::new(settings.output_format)
        .with_indent(settings.indent)
        .emit(&conversion.document)?;
    Ok(Rendered { conversion, output })
}
