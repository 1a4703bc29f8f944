//! Obstacle occupancy bound to a grid shape
//!
//! Membership is stored as a row-major bit mask, so the set is unique by
//! construction and iterates in a stable row-major order.

use bitvec::prelude::*;
use std::fmt;

use crate::io::error::Result;
use crate::spatial::grid::{Cell, GridShape};

/// Set of obstacle cells on a particular grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleSet {
    shape: GridShape,
    bits: BitVec,
}

impl ObstacleSet {
    /// Create an empty obstacle set for a grid
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            bits: bitvec![0; shape.cell_count()],
        }
    }

    /// Create an obstacle set from a list of cells
    ///
    /// Duplicates collapse into a single obstacle.
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if any cell lies outside the grid
    pub fn from_cells<I>(shape: GridShape, cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut set = Self::new(shape);
        for cell in cells {
            set.insert(cell)?;
        }
        Ok(set)
    }

    /// Grid this set belongs to
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Mark a cell as an obstacle, returning whether it was newly added
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` if the cell lies outside the grid
    pub fn insert(&mut self, cell: Cell) -> Result<bool> {
        self.shape.ensure_contains(cell, "obstacle")?;
        let was_present = self.contains(cell);
        if let Some(index) = self.shape.index_of(cell) {
            self.bits.set(index, true);
        }
        Ok(!was_present)
    }

    /// Test whether a cell is an obstacle; cells outside the grid never are
    pub fn contains(&self, cell: Cell) -> bool {
        self.shape
            .index_of(cell)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Number of obstacle cells
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test whether there are no obstacles
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Obstacle cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.bits
            .iter_ones()
            .filter_map(move |index| self.shape.cell_at(index))
    }
}

impl fmt::Display for ObstacleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObstacleSet({} of {} cells)", self.len(), self.shape.cell_count())
    }
}
