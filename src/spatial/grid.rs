//! Grid geometry: cell coordinates, grid shape and orthogonal neighborhoods
//!
//! Rows grow downward and columns grow to the right, so row 0 is the top edge
//! of every rendering.

use std::fmt;

use crate::io::error::{PathfindingError, Result};

/// Row and column offsets of the four orthogonal moves, in expansion order:
/// up, down, left, right
pub const ORTHOGONAL_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A single grid coordinate
///
/// Ordering is lexicographic on `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    /// Zero-based row, 0 is the top row
    pub row: usize,
    /// Zero-based column, 0 is the leftmost column
    pub col: usize,
}

impl Cell {
    /// Create a cell from its row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of orthogonal steps between two cells, ignoring obstacles
    pub const fn manhattan_distance(&self, other: &Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Test whether two cells share an edge
    pub const fn is_orthogonal_neighbor(&self, other: &Self) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// Apply a signed offset, returning `None` on underflow
    fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Immutable grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    rows: usize,
    cols: usize,
}

impl GridShape {
    /// Create a grid shape
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is zero or the cell count
    /// does not fit in `usize`
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let reason = if rows == 0 || cols == 0 {
            "grid must have at least one row and one column"
        } else if rows.checked_mul(cols).is_none() {
            "cell count overflows usize"
        } else {
            return Ok(Self { rows, cols });
        };
        Err(PathfindingError::InvalidParameter {
            parameter: "shape",
            value: format!("{rows}x{cols}"),
            reason: reason.to_string(),
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// `(rows, cols)` tuple, the layout `ndarray` expects
    pub const fn dim(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Test whether a cell lies inside the grid
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Fail with `CellOutOfBounds` unless the cell lies inside the grid
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfBounds` naming `role` when the cell is outside
    pub fn ensure_contains(&self, cell: Cell, role: &'static str) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(PathfindingError::CellOutOfBounds {
                role,
                cell,
                dimensions: self.dim(),
            })
        }
    }

    /// Row-major linear index of a cell, `None` if outside the grid
    pub const fn index_of(&self, cell: Cell) -> Option<usize> {
        if self.contains(cell) {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }

    /// Cell at a row-major linear index, `None` if past the end
    pub const fn cell_at(&self, index: usize) -> Option<Cell> {
        if index < self.cell_count() {
            Some(Cell::new(index / self.cols, index % self.cols))
        } else {
            None
        }
    }

    /// In-bounds orthogonal neighbors of a cell, in up, down, left, right order
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        ORTHOGONAL_OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(move |neighbor| self.contains(*neighbor))
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}
