//! A planning problem: grid, obstacles, start and destination

use std::fmt;

use crate::io::error::{PathfindingError, Result};
use crate::spatial::grid::{Cell, GridShape};
use crate::spatial::obstacles::ObstacleSet;

/// Inputs of one planning query
///
/// Start and destination may coincide with obstacles; the planner treats a
/// blocked start as unreachable and a blocked destination as free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Grid dimensions
    pub shape: GridShape,
    /// Obstacle cells, bound to `shape`
    pub obstacles: ObstacleSet,
    /// Cell the path starts from
    pub start: Cell,
    /// Cell the path leads to
    pub destination: Cell,
}

impl Scenario {
    /// Assemble a scenario, checking that every part fits the grid
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the obstacle set belongs to another grid and
    /// `CellOutOfBounds` if start or destination lies outside the grid
    pub fn new(
        shape: GridShape,
        obstacles: ObstacleSet,
        start: Cell,
        destination: Cell,
    ) -> Result<Self> {
        if obstacles.shape() != shape {
            return Err(PathfindingError::ShapeMismatch {
                expected: shape.dim(),
                actual: obstacles.shape().dim(),
            });
        }
        shape.ensure_contains(start, "start")?;
        shape.ensure_contains(destination, "destination")?;
        Ok(Self {
            shape,
            obstacles,
            start,
            destination,
        })
    }

    /// Test whether the start cell is also an obstacle
    pub fn start_blocked(&self) -> bool {
        self.obstacles.contains(self.start)
    }

    /// Test whether the destination cell is also an obstacle
    pub fn destination_blocked(&self) -> bool {
        self.obstacles.contains(self.destination)
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} grid, {} obstacles, start {}, destination {}",
            self.shape,
            self.obstacles.len(),
            self.start,
            self.destination
        )
    }
}
