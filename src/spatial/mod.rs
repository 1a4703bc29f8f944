//! Spatial data structures
//!
//! This module contains the grid model shared by every other module:
//! - Cell coordinates and grid shape
//! - Orthogonal neighborhoods
//! - Obstacle occupancy
//! - Planning scenarios

/// Cell coordinates, grid shape and neighborhoods
pub mod grid;
/// Obstacle sets bound to a grid shape
pub mod obstacles;
/// Grid, obstacles, start and destination bundled together
pub mod scenario;

pub use grid::{Cell, GridShape};
pub use obstacles::ObstacleSet;
pub use scenario::Scenario;
