// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # tfjson
//!
//! Converts the diff section of an infrastructure plan into a single nested,
//! key-sorted document that is easy to read, grep, and diff in CI.
//!
//! ## Overview
//!
//! A plan diff is a flat list of module changes. Each module carries a path
//! (`["root", "network"]`), a destroy flag, and resource changes keyed by
//! resource identifier (`aws_vpc.main`). tfjson folds that list into one
//! document where:
//!
//! - every module path becomes nested keys, with the leading `root` dropped
//! - every resource becomes a nested object under its module
//! - every changed attribute is listed with its new value
//! - `destroy` and `destroy_tainted` flags are always present
//!
//! Keys are sorted at every level, so the same plan always produces the same
//! bytes.
//!
//! ## Modules
//!
//! - [`plan`]: Plan diff records and the export reader
//! - [`document`]: The nested output document and path insertion
//! - [`convert`]: Diff traversal into a document
//! - [`emit`]: JSON and YAML serialization
//! - [`pipeline`]: Reader, builder, and emitter wired together
//! - [`config`]: Settings and `.env` loading
//! - [`cli`]: Command-line interface
//!
//! ## Example
//!
//! ```json
//! {
//!     "aws_vpc.main": {
//!         "cidr_block": "10.0.0.0/16",
//!         "destroy": false,
//!         "destroy_tainted": false
//!     },
//!     "destroy": false,
//!     "inner": {
//!         "aws_vpc.inner": {
//!             "cidr_block": "10.0.0.0/8",
//!             "destroy": false,
//!             "destroy_tainted": false
//!         },
//!         "destroy": false
//!     }
//! }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod convert;
pub mod document;
pub mod emit;
pub mod error;
pub mod pipeline;
pub mod plan;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, OutputFormatter};
pub use config::{InputFormat, OutputFormat, Settings};
pub use convert::{DocumentBuilder, build_document};
pub use document::{Document, Node, Scalar};
pub use emit::Emitter;
pub use error::{Result, TfjsonError};
pub use pipeline::{Conversion, Rendered, convert_file, load_and_convert};
pub use plan::{Diff, InstanceDiff, ModuleDiff, Plan, PlanReader, PlanSummary};
