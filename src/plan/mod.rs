//! Plan diff records and the reader that loads them.
//!
//! The converter consumes these records already parsed; this module is the
//! boundary where a plan export on disk becomes typed data.

mod reader;
mod summary;
mod types;

pub use reader::PlanReader;
pub use summary::{PlanSummary, ResourceSummary};
pub use types::{AttrDiff, ChangeType, Diff, InstanceDiff, ModuleDiff, PLAN_FORMAT_VERSION, Plan};
