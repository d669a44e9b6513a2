//! Document serialization.
//!
//! Key order comes from the document itself, so both encodings list keys
//! lexicographically at every level.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

use crate::config::OutputFormat;
use crate::document::Document;
use crate::error::{EmitError, Result};

/// Default JSON indentation width.
pub const DEFAULT_INDENT: usize = 4;

/// Serializes documents to text.
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    /// Output encoding.
    format: OutputFormat,
    /// JSON indentation width, `0` for a single line.
    indent: usize,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(OutputFormat::Json)
    }
}

impl Emitter {
    /// Creates an emitter with the default indentation.
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self {
            format,
            indent: DEFAULT_INDENT,
        }
    }

    /// Sets the JSON indentation width.
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Serializes a document without a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn emit(&self, document: &Document) -> Result<String> {
        debug!("Emitting {} top-level keys as {:?}", document.len(), self.format);
        let output = match self.format {
            OutputFormat::Json => self.render_json(document)?,
            OutputFormat::Yaml => serde_yaml::to_string(document)
                .map_err(EmitError::from)?
                .trim_end()
                .to_string(),
        };
        Ok(output)
    }

    /// Serializes a document as JSON.
    fn render_json(&self, document: &Document) -> std::result::Result<String, EmitError> {
        if self.indent == 0 {
            return Ok(serde_json::to_string(document)?);
        }

        let indent = " ".repeat(self.indent);
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(
            &mut buffer,
            PrettyFormatter::with_indent(indent.as_bytes()),
        );
        document.serialize(&mut serializer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.insert(&["root"], "destroy", false);
        doc.insert(&["root", "aws_vpc.main"], "cidr_block", "10.0.0.0/16");
        doc
    }

    #[test]
    fn test_json_four_space_indent() {
        let output = Emitter::default().emit(&sample()).unwrap();
        let expected = r#"{
    "aws_vpc.main": {
        "cidr_block": "10.0.0.0/16"
    },
    "destroy": false
}"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn test_json_custom_indent() {
        let output = Emitter::new(OutputFormat::Json)
            .with_indent(2)
            .emit(&sample())
            .unwrap();
        assert!(output.starts_with("{\n  \"aws_vpc.main\": {\n    \"cidr_block\""));
    }

    #[test]
    fn test_json_compact() {
        let output = Emitter::new(OutputFormat::Json)
            .with_indent(0)
            .emit(&sample())
            .unwrap();
        assert_eq!(
            output,
            r#"{"aws_vpc.main":{"cidr_block":"10.0.0.0/16"},"destroy":false}"#
        );
    }

    #[test]
    fn test_empty_document() {
        let output = Emitter::default().emit(&Document::new()).unwrap();
        assert_eq!(output, "{}");
    }

    #[test]
    fn test_yaml_sorted_without_trailing_newline() {
        let output = Emitter::new(OutputFormat::Yaml).emit(&sample()).unwrap();
        assert!(!output.ends_with('\n'));
        assert!(output.starts_with("aws_vpc.main:"));
        assert!(output.find("aws_vpc.main") < output.find("destroy"));

        let parsed: Document = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed, sample());
    }
}
