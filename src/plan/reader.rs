//! Plan export reader.
//!
//! Loads a JSON or YAML plan export from disk and checks that its format
//! version is one this crate understands.

use std::path::Path;
use tracing::{debug, info};

use crate::config::InputFormat;
use crate::error::{PlanError, Result};

use super::types::{PLAN_FORMAT_VERSION, Plan};

/// Reader for plan exports.
#[derive(Debug, Default)]
pub struct PlanReader {
    /// Decoder selection.
    format: InputFormat,
}

impl PlanReader {
    /// Creates a reader that picks the decoder from the file extension.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            format: InputFormat::Auto,
        }
    }

    /// Forces a specific decoder.
    #[must_use]
    pub const fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    /// Loads a plan from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable, malformed, or
    /// declares an unsupported format version.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Plan> {
        let path = path.as_ref();
        info!("Loading plan from: {}", path.display());

        if !path.exists() {
            return Err(PlanError::FileNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(|source| PlanError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        self.parse_str(&content, Some(path))
    }

    /// Parses a plan from a string.
    ///
    /// `source` is used for format detection and error locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the content cannot be decoded or declares an
    /// unsupported format version.
    pub fn parse_str(&self, content: &str, source: Option<&Path>) -> Result<Plan> {
        let format = self.resolve_format(source);
        let location = source.map(|p| p.display().to_string());
        debug!("Parsing plan as {format:?}");

        let plan: Plan = match format {
            InputFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| PlanError::parse(format!("YAML parse error: {e}"), location))?,
            InputFormat::Json | InputFormat::Auto => serde_json::from_str(content)
                .map_err(|e| PlanError::parse(format!("JSON parse error: {e}"), location))?,
        };

        if plan.format_version > PLAN_FORMAT_VERSION {
            return Err(PlanError::UnsupportedVersion {
                found: plan.format_version,
                supported: PLAN_FORMAT_VERSION,
            }
            .into());
        }

        debug!("Parsed plan with {} module diffs", plan.diff.modules.len());
        Ok(plan)
    }

    /// Resolves `Auto` against the source file extension.
    fn resolve_format(&self, source: Option<&Path>) -> InputFormat {
        match self.format {
            InputFormat::Auto => {
                let extension = source
                    .and_then(Path::extension)
                    .and_then(|e| e.to_str())
                    .map(str::to_ascii_lowercase);
                match extension.as_deref() {
                    Some("yaml" | "yml") => InputFormat::Yaml,
                    _ => InputFormat::Json,
                }
            }
            explicit => explicit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Scalar;
    use crate::error::TfjsonError;

    const JSON_PLAN: &str = r#"{
        "format_version": 1,
        "diff": {
            "modules": [{
                "path": ["root"],
                "destroy": false,
                "resources": {
                    "aws_vpc.main": {
                        "attributes": {"cidr_block": {"old": "", "new": "10.0.0.0/16"}}
                    }
                }
            }]
        }
    }"#;

    const YAML_PLAN: &str = r#"
diff:
  modules:
    - path: [root, inner]
      resources:
        aws_vpc.inner:
          destroy: true
"#;

    #[test]
    fn test_parse_json() {
        let plan = PlanReader::new().parse_str(JSON_PLAN, None).unwrap();
        assert_eq!(plan.diff.modules.len(), 1);
        assert!(plan.diff.modules[0].resources.contains_key("aws_vpc.main"));
    }

    #[test]
    fn test_yaml_detected_from_extension() {
        let plan = PlanReader::new()
            .parse_str(YAML_PLAN, Some(Path::new("plan.YML")))
            .unwrap();
        assert_eq!(plan.diff.modules[0].path, vec!["root", "inner"]);
        assert!(plan.diff.modules[0].resources["aws_vpc.inner"].destroy);
    }

    #[test]
    fn test_explicit_format_overrides_extension() {
        let plan = PlanReader::new()
            .with_format(InputFormat::Yaml)
            .parse_str(YAML_PLAN, Some(Path::new("plan.json")))
            .unwrap();
        assert_eq!(plan.diff.modules.len(), 1);
    }

    #[test]
    fn test_parse_error_carries_location() {
        let err = PlanReader::new()
            .parse_str("{ not json", Some(Path::new("broken.tfplan")))
            .unwrap_err();
        match err {
            TfjsonError::Plan(PlanError::Parse { location, .. }) => {
                assert_eq!(location.as_deref(), Some("broken.tfplan"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_newer_format_version_rejected() {
        let err = PlanReader::new()
            .parse_str(r#"{"format_version": 2}"#, None)
            .unwrap_err();
        assert!(matches!(
            err,
            TfjsonError::Plan(PlanError::UnsupportedVersion { found: 2, supported: 1 })
        ));
    }

    #[test]
    fn test_non_string_old_values_accepted() {
        let json = r#"{
            "diff": {
                "modules": [{
                    "path": ["root"],
                    "resources": {
                        "aws_autoscaling_group.web": {
                            "attributes": {
                                "desired_capacity": {"old": 1, "new": 2},
                                "protect_from_scale_in": {"old": false, "new": true}
                            }
                        }
                    }
                }]
            }
        }"#;
        let plan = PlanReader::new().parse_str(json, None).unwrap();

        let attributes = &plan.diff.modules[0].resources["aws_autoscaling_group.web"].attributes;
        assert_eq!(attributes["desired_capacity"].old, Some(Scalar::from(1_i64)));
        assert_eq!(attributes["desired_capacity"].new_value(), Scalar::from(2_i64));
        assert_eq!(attributes["protect_from_scale_in"].new_value(), Scalar::from(true));
    }

    #[test]
    fn test_missing_file() {
        let err = PlanReader::new()
            .load_file("/nonexistent/terraform.tfplan")
            .unwrap_err();
        assert!(matches!(err, TfjsonError::Plan(PlanError::FileNotFound { .. })));
    }
}
