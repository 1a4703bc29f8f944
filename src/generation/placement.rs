//! Seeded random placement of obstacles, start and destination
//!
//! All draws of one generator come from a single `StdRng` stream, so the same
//! seed and the same sequence of calls reproduce the same scenarios.

use log::debug;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{Cell, GridShape};
use crate::spatial::obstacles::ObstacleSet;
use crate::spatial::scenario::Scenario;

/// Share of the columns, from the left, that the destination never uses
const DESTINATION_COLUMN_FRACTION: f64 = 2.0 / 3.0;

/// Number of obstacles for a grid at a given density
///
/// `percentage / 100 * cells`, rounded half to even.
///
/// # Errors
///
/// Returns `InvalidParameter` if the percentage is not a finite value in `[0, 100]`
pub fn obstacle_count(shape: GridShape, percentage: f64) -> Result<usize> {
    if !percentage.is_finite() || !(0.0..=100.0).contains(&percentage) {
        return Err(invalid_parameter(
            "obstacle_percentage",
            &percentage,
            &"must be between 0 and 100",
        ));
    }
    let count = (percentage / 100.0 * shape.cell_count() as f64).round_ties_even() as usize;
    Ok(count.min(shape.cell_count()))
}

/// First row the destination may occupy: strictly below the upper half
pub const fn destination_row_threshold(shape: GridShape) -> usize {
    shape.rows() / 2 + 1
}

/// First column the destination may occupy: the right third of the grid
pub fn destination_col_threshold(shape: GridShape) -> usize {
    (DESTINATION_COLUMN_FRACTION * shape.cols() as f64).round_ties_even() as usize
}

/// Reproducible source of random scenarios
pub struct ScenarioGenerator {
    rng: StdRng,
    seed: u64,
}

impl ScenarioGenerator {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the generator was created with
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Distinct obstacle cells drawn uniformly over the whole grid
    ///
    /// Start and destination are not excluded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a percentage outside `[0, 100]`
    pub fn obstacle_set(&mut self, shape: GridShape, percentage: f64) -> Result<ObstacleSet> {
        let count = obstacle_count(shape, percentage)?;
        let indices = sample(&mut self.rng, shape.cell_count(), count);
        let cells = indices.iter().filter_map(|index| shape.cell_at(index));
        ObstacleSet::from_cells(shape, cells)
    }

    /// Start cell: a uniformly random column of the top row
    pub fn start_cell(&mut self, shape: GridShape) -> Cell {
        Cell::new(0, self.rng.random_range(0..shape.cols()))
    }

    /// Destination cell: uniformly random within the lower half of the rows
    /// and the right third of the columns
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid is too small for that region to
    /// be non-empty (fewer than 3 rows or 2 columns)
    pub fn destination_cell(&mut self, shape: GridShape) -> Result<Cell> {
        let row_threshold = destination_row_threshold(shape);
        let col_threshold = destination_col_threshold(shape);
        if row_threshold >= shape.rows() || col_threshold >= shape.cols() {
            return Err(invalid_parameter(
                "shape",
                &shape,
                &"grid has no lower-half, right-third region for the destination",
            ));
        }
        let row = self.rng.random_range(row_threshold..shape.rows());
        let col = self.rng.random_range(col_threshold..shape.cols());
        Ok(Cell::new(row, col))
    }

    /// Draw a full scenario: obstacles, then start, then destination
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an invalid percentage or a grid too
    /// small to hold a destination
    pub fn generate(&mut self, shape: GridShape, percentage: f64) -> Result<Scenario> {
        let obstacles = self.obstacle_set(shape, percentage)?;
        let start = self.start_cell(shape);
        let destination = self.destination_cell(shape)?;
        debug!(
            "seed {} drew {} obstacles, start {start}, destination {destination}",
            self.seed,
            obstacles.len()
        );
        Scenario::new(shape, obstacles, start, destination)
    }
}
