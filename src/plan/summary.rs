//! Per-resource summary of a plan diff.

use serde::Serialize;

use crate::document::ROOT_MARKER;

use super::types::{ChangeType, Diff};

/// Summary of every resource change in a plan.
#[derive(Debug, Default, Serialize)]
pub struct PlanSummary {
    /// One entry per resource, in module then resource order.
    pub resources: Vec<ResourceSummary>,
    /// Resources to create.
    pub creates: usize,
    /// Resources to update in place.
    pub updates: usize,
    /// Resources to destroy.
    pub destroys: usize,
    /// Resources to destroy and create again.
    pub replaces: usize,
}

/// Summary line for one resource.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSummary {
    /// Dotted module path, `root` for the top-level module.
    pub module: String,
    /// Resource identifier.
    pub resource: String,
    /// What happens to the resource.
    pub change: ChangeType,
    /// Number of attribute changes.
    pub attributes: usize,
}

impl PlanSummary {
    /// Builds a summary from a plan diff.
    #[must_use]
    pub fn from_diff(diff: &Diff) -> Self {
        let mut summary = Self::default();

        for module in &diff.modules {
            let module_name = display_module_path(&module.path);
            for (key, resource) in &module.resources {
                let change = resource.change_type();
                match change {
                    ChangeType::Create => summary.creates += 1,
                    ChangeType::Update => summary.updates += 1,
                    ChangeType::Destroy => summary.destroys += 1,
                    ChangeType::DestroyCreate => summary.replaces += 1,
                    ChangeType::None => {}
                }
                summary.resources.push(ResourceSummary {
                    module: module_name.clone(),
                    resource: key.clone(),
                    change,
                    attributes: resource.attributes.len(),
                });
            }
        }

        summary
    }

    /// Returns true if no resource changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.creates == 0 && self.updates == 0 && self.destroys == 0 && self.replaces == 0
    }
}

/// Joins a module path with dots, dropping the root marker.
fn display_module_path(path: &[String]) -> String {
    let segments = match path.split_first() {
        Some((first, rest)) if first == ROOT_MARKER => rest,
        _ => path,
    };
    if segments.is_empty() {
        ROOT_MARKER.to_string()
    } else {
        segments.join(".")
    }
}
