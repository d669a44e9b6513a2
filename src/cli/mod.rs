//! CLI module for tfjson.
//!
//! This module provides the command-line arguments and the stderr
//! formatting used alongside the converted document.

mod commands;
mod output;

pub use commands::{Cli, is_informational, single_line_error};
pub use output::OutputFormatter;
