//! Configuration module for tfjson.
//!
//! This module handles:
//! - Input and output format selection
//! - Loading a project-local `.env` file
//! - Validation of the effective settings

mod settings;

pub use settings::{InputFormat, MAX_INDENT, OutputFormat, Settings, load_dotenv};
