//! Nested output document.
//!
//! This module holds the data structure the converter builds:
//! - [`Document`]: a key-sorted map of string keys to nodes
//! - [`Node`]: either a scalar leaf or a nested document
//! - [`Scalar`]: boolean, number, or string values

mod node;
mod tree;

pub use node::{Node, Scalar};
pub use tree::{Document, ROOT_MARKER};
