//! Path recovery by steepest descent over a distance field

use log::{debug, warn};
use std::cmp::Reverse;
use std::fmt;

use crate::algorithm::wavefront::DistanceField;
use crate::io::error::Result;
use crate::spatial::grid::Cell;

/// Ordered cells from start to destination inclusive, empty when no path exists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// The empty path, meaning the destination cannot be reached
    pub const fn empty() -> Self {
        Self { cells: Vec::new() }
    }

    /// Wrap an ordered list of cells
    pub const fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// Test whether no path was found
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells, start and destination included
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of moves along the path
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Cells in start to destination order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the cells in start to destination order
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Test whether a cell is on the path
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// First cell, if any
    pub fn start(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// Last cell, if any
    pub fn end(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Cells strictly between start and destination
    pub fn intermediate(&self) -> &[Cell] {
        match self.cells.len() {
            0..=2 => &[],
            n => self.cells.get(1..n - 1).unwrap_or(&[]),
        }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cells.is_empty() {
            return write!(f, "<no path>");
        }
        let joined = self
            .cells
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ");
        write!(f, "{joined}")
    }
}

/// Walk downhill from `start` to `destination` along a distance field
///
/// At each step the neighbor with the smallest field value is taken; among
/// equal values the higher row wins, then the higher column. A start that is
/// unreached or blocked gives the empty path, as does any step that fails to
/// strictly decrease the field.
///
/// # Errors
///
/// Returns `CellOutOfBounds` if `start` or `destination` lies outside the
/// field's grid
pub fn reconstruct(field: &DistanceField, start: Cell, destination: Cell) -> Result<Path> {
    let shape = field.shape();
    shape.ensure_contains(start, "start")?;
    shape.ensure_contains(destination, "destination")?;

    let Some(start_distance) = field.distance(start) else {
        debug!("start {start} has no finite distance, destination unreachable");
        return Ok(Path::empty());
    };

    let mut cells = Vec::with_capacity(start_distance as usize + 1);
    let mut current = start;

    while current != destination {
        cells.push(current);
        let current_rank = field.rank(current);

        let Some(next) = shape
            .neighbors(current)
            .min_by_key(|&neighbor| (field.rank(neighbor), Reverse(neighbor)))
        else {
            return Ok(Path::empty());
        };

        if field.rank(next) >= current_rank {
            warn!("descent stalled at {current}, field does not lead to {destination}");
            return Ok(Path::empty());
        }
        current = next;
    }
    cells.push(destination);

    debug!("reconstructed {} cells from {start} to {destination}", cells.len());
    Ok(Path::from_cells(cells))
}
