//! Grassfire distance field computed by breadth-first expansion from the destination
//!
//! Every free cell connected to the destination receives its shortest number of
//! orthogonal steps to it. The expansion runs over a FIFO frontier, so the first
//! value written into a cell is already its shortest distance and no cell is
//! ever enqueued twice.

use log::debug;
use ndarray::Array2;
use std::collections::VecDeque;
use std::fmt;

use crate::io::error::{PathfindingError, Result};
use crate::spatial::grid::{Cell, GridShape};
use crate::spatial::obstacles::ObstacleSet;

/// State of a single cell in the distance field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldValue {
    /// Not connected to the destination through free cells
    Unreached,
    /// Obstacle cell, never written by the expansion
    Blocked,
    /// Shortest number of orthogonal steps to the destination
    Distance(u32),
}

impl FieldValue {
    /// Finite distance, if any
    pub const fn distance(self) -> Option<u32> {
        match self {
            Self::Distance(distance) => Some(distance),
            Self::Unreached | Self::Blocked => None,
        }
    }

    /// Test whether the value is a finite distance
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Distance(_))
    }

    /// Ranking used when descending the field: non-finite values rank above
    /// every finite distance
    pub const fn rank(self) -> u64 {
        match self {
            Self::Distance(distance) => distance as u64,
            Self::Unreached | Self::Blocked => u64::MAX,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreached => write!(f, "inf"),
            Self::Blocked => write!(f, "#"),
            Self::Distance(distance) => write!(f, "{distance}"),
        }
    }
}

/// Per-cell distances to a fixed destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceField {
    values: Array2<FieldValue>,
    shape: GridShape,
    destination: Cell,
}

impl DistanceField {
    /// Compute the distance field for a grid, its obstacles and a destination
    ///
    /// Obstacles are marked first and the destination is forced to distance 0
    /// afterwards, so a destination listed as an obstacle still seeds the
    /// expansion.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if the obstacle set belongs to another grid and
    /// `CellOutOfBounds` if the destination lies outside the grid
    pub fn compute(shape: GridShape, obstacles: &ObstacleSet, destination: Cell) -> Result<Self> {
        if obstacles.shape() != shape {
            return Err(PathfindingError::ShapeMismatch {
                expected: shape.dim(),
                actual: obstacles.shape().dim(),
            });
        }
        shape.ensure_contains(destination, "destination")?;

        let mut values = Array2::from_elem(shape.dim(), FieldValue::Unreached);
        for obstacle in obstacles.iter() {
            if let Some(value) = values.get_mut([obstacle.row, obstacle.col]) {
                *value = FieldValue::Blocked;
            }
        }
        if let Some(value) = values.get_mut([destination.row, destination.col]) {
            *value = FieldValue::Distance(0);
        }

        let mut frontier = VecDeque::with_capacity(shape.cell_count());
        frontier.push_back((destination, 0_u32));
        let mut expanded = 0_usize;

        while let Some((current, distance)) = frontier.pop_front() {
            expanded += 1;
            for neighbor in shape.neighbors(current) {
                if let Some(value) = values.get_mut([neighbor.row, neighbor.col]) {
                    if *value == FieldValue::Unreached {
                        *value = FieldValue::Distance(distance + 1);
                        frontier.push_back((neighbor, distance + 1));
                    }
                }
            }
        }

        debug!(
            "wavefront from {destination} expanded {expanded} of {} cells",
            shape.cell_count()
        );

        Ok(Self {
            values,
            shape,
            destination,
        })
    }

    /// Grid the field was computed for
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Destination the distances are measured to
    pub const fn destination(&self) -> Cell {
        self.destination
    }

    /// Value at a cell, `None` outside the grid
    pub fn get(&self, cell: Cell) -> Option<FieldValue> {
        self.values.get([cell.row, cell.col]).copied()
    }

    /// Finite distance at a cell, `None` when unreached, blocked or outside
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.get(cell).and_then(FieldValue::distance)
    }

    /// Ranking of a cell for descent; cells outside the grid rank like
    /// unreached ones
    pub fn rank(&self, cell: Cell) -> u64 {
        self.get(cell).map_or(u64::MAX, FieldValue::rank)
    }

    /// Largest finite distance in the field
    pub fn max_distance(&self) -> u32 {
        self.values
            .iter()
            .filter_map(|value| value.distance())
            .max()
            .unwrap_or(0)
    }

    /// Number of cells holding a finite distance, destination included
    pub fn reached_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_finite()).count()
    }

    /// Cells grouped by distance: entry `d` holds every cell at distance `d`,
    /// each group in row-major order
    pub fn layers(&self) -> Vec<Vec<Cell>> {
        let mut layers: Vec<Vec<Cell>> = vec![Vec::new(); self.max_distance() as usize + 1];
        for ((row, col), value) in self.values.indexed_iter() {
            if let Some(layer) = value
                .distance()
                .and_then(|distance| layers.get_mut(distance as usize))
            {
                layer.push(Cell::new(row, col));
            }
        }
        layers
    }

    /// Raw values, indexed by `[row, col]`
    pub const fn values(&self) -> &Array2<FieldValue> {
        &self.values
    }
}

impl fmt::Display for DistanceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_distance().to_string().len().max(3);
        for row in self.values.rows() {
            let line = row
                .iter()
                .map(|value| format!("{:>width$}", value.to_string()))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
