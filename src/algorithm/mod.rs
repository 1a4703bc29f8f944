//! Wavefront planning: distance field, path descent and their composition

/// Query composition for a full scenario
pub mod planner;
/// Path recovery by descent over the distance field
pub mod reconstruction;
/// Breadth-first distance field from the destination
pub mod wavefront;

pub use planner::{Plan, plan};
pub use reconstruction::{Path, reconstruct};
pub use wavefront::{DistanceField, FieldValue};
