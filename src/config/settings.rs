//! Conversion settings.
//!
//! Settings come from the command line, with `TFJSON_*` environment variables
//! as fallbacks (see [`crate::cli::Cli`]). A `.env` file next to the working
//! directory is loaded first so it can provide those variables.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::emit::DEFAULT_INDENT;
use crate::error::{ConfigError, Result};

/// Widest JSON indentation accepted.
pub const MAX_INDENT: usize = 16;

/// Decoder used for the plan export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Pick from the file extension; JSON unless `.yaml` or `.yml`.
    #[default]
    Auto,
    /// JSON plan export.
    Json,
    /// YAML plan export.
    Yaml,
}

/// Encoding of the emitted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Effective settings for one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Plan decoder.
    pub input_format: InputFormat,
    /// Document encoding.
    pub output_format: OutputFormat,
    /// JSON indentation width.
    pub indent: usize,
    /// Print the plan summary to stderr.
    pub summary: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input_format: InputFormat::Auto,
            output_format: OutputFormat::Json,
            indent: DEFAULT_INDENT,
            summary: false,
        }
    }
}

impl Settings {
    /// Builds settings from parsed command-line arguments.
    #[must_use]
    pub const fn from_cli(cli: &Cli) -> Self {
        Self {
            input_format: cli.input_format,
            output_format: cli.output,
            indent: cli.indent,
            summary: cli.summary,
        }
    }

    /// Checks that every setting is in range.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if self.indent > MAX_INDENT {
            return Err(ConfigError::invalid(
                "indent",
                format!("{} exceeds the maximum of {MAX_INDENT}", self.indent),
            )
            .into());
        }
        if self.output_format == OutputFormat::Yaml && self.indent != DEFAULT_INDENT {
            debug!("Indent setting is ignored for YAML output");
        }
        Ok(())
    }
}

/// Loads `<dir>/.env` into the process environment if it exists.
///
/// Variables already set in the environment win over the file.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be parsed.
pub fn load_dotenv(dir: impl AsRef<Path>) -> Result<Option<PathBuf>> {
    let env_path = dir.as_ref().join(".env");

    if !env_path.exists() {
        debug!(".env file not found at: {}", env_path.display());
        return Ok(None);
    }

    info!("Loading environment from: {}", env_path.display());
    dotenvy::from_path(&env_path).map_err(|e| ConfigError::Dotenv {
        path: env_path.clone(),
        message: e.to_string(),
    })?;
    Ok(Some(env_path))
}
