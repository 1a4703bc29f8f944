//! Grassfire wavefront planning on randomized obstacle grids
//!
//! A distance field is grown breadth-first from the destination over the free
//! cells of a grid, then the shortest path is recovered by walking downhill from
//! the start. Around that core sit a seeded scenario generator, an interactive
//! grid-size prompt and PNG, GIF and text renderers.

#![forbid(unsafe_code)]

/// Distance field, path reconstruction and query composition
pub mod algorithm;
/// Seeded random scenario generation
pub mod generation;
/// Input/output operations, configuration and error handling
pub mod io;
/// Grid geometry, obstacles and scenarios
pub mod spatial;

pub use io::error::{PathfindingError, Result};
