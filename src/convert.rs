//! Plan diff to document conversion.
//!
//! Every module contributes a `destroy` flag at its path. Every resource
//! contributes `destroy`, `destroy_tainted`, and the new value of each changed
//! attribute at the module path extended with the resource key. Nothing else
//! from the diff reaches the document; old values are dropped.

use tracing::debug;

use crate::document::Document;
use crate::plan::{InstanceDiff, ModuleDiff};

/// Key holding the destroy flag of a module or resource.
pub const DESTROY_KEY: &str = "destroy";

/// Key holding the tainted-destroy flag of a resource.
pub const DESTROY_TAINTED_KEY: &str = "destroy_tainted";

/// Incrementally builds a [`Document`] from plan diff records.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    /// Document under construction.
    document: Document,
}

impl DocumentBuilder {
    /// Creates a builder with an empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            document: Document::new(),
        }
    }

    /// Flattens one module diff into the document.
    pub fn convert_module(&mut self, module: &ModuleDiff) {
        debug!(
            "Converting module {:?} with {} resources",
            module.path,
            module.resources.len()
        );
        self.document
            .insert(module.path.as_slice(), DESTROY_KEY, module.destroy);
        for (key, resource) in &module.resources {
            self.convert_resource(module.resource_path(key).as_slice(), resource);
        }
    }

    /// Flattens one resource diff into the document at `path`.
    pub fn convert_resource<S: AsRef<str>>(&mut self, path: &[S], resource: &InstanceDiff) {
        self.document.insert(path, DESTROY_KEY, resource.destroy);
        self.document
            .insert(path, DESTROY_TAINTED_KEY, resource.destroy_tainted);
        for (name, attribute) in &resource.attributes {
            self.document.insert(path, name, attribute.new_value());
        }
    }

    /// Returns the document built so far.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Consumes the builder and returns the finished document.
    #[must_use]
    pub fn finish(self) -> Document {
        self.document
    }
}

/// Builds a document from module diffs, visited in the given order.
#[must_use]
pub fn build_document<'a, I>(modules: I) -> Document
where
    I: IntoIterator<Item = &'a ModuleDiff>,
{
    let mut builder = DocumentBuilder::new();
    for module in modules {
        builder.convert_module(module);
    }
    builder.finish()
}
