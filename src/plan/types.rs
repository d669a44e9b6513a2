//! Plan diff record types.
//!
//! These types mirror the diff section of an infrastructure plan: modules,
//! the resource instances inside them, and per-attribute changes. Field names
//! are snake_case; the planning tool's own PascalCase names are accepted as
//! aliases so exports taken straight from its in-memory structures load too.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::document::Scalar;

/// Highest plan export format version this crate understands.
pub const PLAN_FORMAT_VERSION: u32 = 1;

/// A complete plan export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Export format version.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    /// Version of the tool that produced the plan, if recorded.
    #[serde(default, alias = "TerraformVersion")]
    pub terraform_version: Option<String>,
    /// The planned changes.
    #[serde(default, alias = "Diff")]
    pub diff: Diff,
}

/// The set of module diffs in a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diff {
    /// Module diffs in source order.
    #[serde(default, alias = "Modules")]
    pub modules: Vec<ModuleDiff>,
}

/// Changes planned for one module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDiff {
    /// Module path, starting with the root marker for the top-level module.
    #[serde(default, alias = "Path")]
    pub path: Vec<String>,
    /// Whether the whole module is being destroyed.
    #[serde(default, alias = "Destroy")]
    pub destroy: bool,
    /// Resource instance diffs keyed by resource identifier.
    #[serde(default, alias = "Resources")]
    pub resources: BTreeMap<String, InstanceDiff>,
}

/// Changes planned for one resource instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceDiff {
    /// Whether the instance is being destroyed.
    #[serde(default, alias = "Destroy")]
    pub destroy: bool,
    /// Whether the instance is tainted and will be destroyed.
    #[serde(default, alias = "DestroyTainted")]
    pub destroy_tainted: bool,
    /// Whether a deposed copy of the instance is being destroyed.
    #[serde(default, alias = "DestroyDeposed")]
    pub destroy_deposed: bool,
    /// Attribute diffs keyed by attribute name.
    #[serde(default, alias = "Attributes")]
    pub attributes: BTreeMap<String, AttrDiff>,
}

/// Change to a single attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrDiff {
    /// Previous value; never emitted, so any scalar is accepted.
    #[serde(default, alias = "Old")]
    pub old: Option<Scalar>,
    /// New value; absent or null when the attribute becomes unset.
    #[serde(default, alias = "New")]
    pub new: Option<Scalar>,
    /// New value is only known after apply.
    #[serde(default, alias = "NewComputed")]
    pub new_computed: bool,
    /// Attribute is being removed.
    #[serde(default, alias = "NewRemoved")]
    pub new_removed: bool,
    /// Changing this attribute forces a new resource.
    #[serde(default, alias = "RequiresNew")]
    pub requires_new: bool,
    /// Values are sensitive.
    #[serde(default, alias = "Sensitive")]
    pub sensitive: bool,
}

/// Classification of a resource instance diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Nothing changes.
    None,
    /// The instance is created.
    Create,
    /// The instance is updated in place.
    Update,
    /// The instance is destroyed.
    Destroy,
    /// The instance is destroyed and created again.
    DestroyCreate,
}

const fn default_format_version() -> u32 {
    PLAN_FORMAT_VERSION
}

impl Plan {
    /// Iterates over the module diffs in source order.
    pub fn modules(&self) -> std::slice::Iter<'_, ModuleDiff> {
        self.diff.modules.iter()
    }
}

impl ModuleDiff {
    /// Returns the document path of a resource in this module.
    #[must_use]
    pub fn resource_path(&self, resource_key: &str) -> Vec<String> {
        let mut path = self.path.clone();
        path.push(resource_key.to_string());
        path
    }

    /// Returns true if the module has nothing to do.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.destroy
            && self
                .resources
                .values()
                .all(|r| r.change_type() == ChangeType::None)
    }
}

impl InstanceDiff {
    /// Returns true if there are no flags and no attribute changes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.destroy && !self.destroy_tainted && !self.destroy_deposed && self.attributes.is_empty()
    }

    /// Returns true if any attribute change forces a new instance.
    #[must_use]
    pub fn requires_new(&self) -> bool {
        self.attributes.values().any(|a| a.requires_new)
    }

    /// Classifies the diff.
    #[must_use]
    pub fn change_type(&self) -> ChangeType {
        if self.is_empty() {
            return ChangeType::None;
        }

        let requires_new = self.requires_new();
        if requires_new && (self.destroy || self.destroy_tainted) {
            ChangeType::DestroyCreate
        } else if self.destroy || self.destroy_deposed {
            ChangeType::Destroy
        } else if requires_new {
            ChangeType::Create
        } else {
            ChangeType::Update
        }
    }
}

impl AttrDiff {
    /// Returns the value written to the document.
    ///
    /// An unset new value becomes an empty string so the attribute is still
    /// listed.
    #[must_use]
    pub fn new_value(&self) -> Scalar {
        self.new.clone().unwrap_or_default()
    }
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "no change",
            Self::Create => "create",
            Self::Update => "update",
            Self::Destroy => "destroy",
            Self::DestroyCreate => "replace",
        };
        write!(f, "{s}")
    }
}
