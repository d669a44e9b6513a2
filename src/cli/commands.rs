//! CLI argument definitions.
//!
//! This module defines the command-line arguments using clap.

use clap::Parser;
use clap::error::ErrorKind;
use std::path::PathBuf;

use crate::config::{InputFormat, OutputFormat};

/// tfjson - Print an infrastructure plan diff as a nested, key-sorted document.
#[derive(Parser, Debug)]
#[command(name = "tfjson")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the plan export (JSON or YAML).
    pub plan: PathBuf,

    /// How to decode the plan export.
    #[arg(short = 'f', long, env = "TFJSON_INPUT_FORMAT", default_value = "auto")]
    pub input_format: InputFormat,

    /// Output format (json, yaml).
    #[arg(short, long, env = "TFJSON_OUTPUT", default_value = "json")]
    pub output: OutputFormat,

    /// JSON indentation width, 0 for a single line.
    #[arg(long, env = "TFJSON_INDENT", default_value = "4")]
    pub indent: usize,

    /// Print a per-resource summary table to stderr.
    #[arg(short, long)]
    pub summary: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parses CLI arguments from the command line, handing argument errors
    /// back to the caller.
    ///
    /// # Errors
    ///
    /// Returns clap's error for missing or invalid arguments, and for
    /// `--help` / `--version` requests.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Returns true if the clap error is a `--help` or `--version` request
/// rather than a usage error.
#[must_use]
pub fn is_informational(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Collapses a clap error report into a single line.
///
/// The usage block and the `--help` hint are dropped, the leading
/// `error:` tag is removed, and continuation lines are joined with spaces.
#[must_use]
pub fn single_line_error(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let message = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    message
        .strip_prefix("error:")
        .map_or(message.as_str(), str::trim_start)
        .to_string()
}
