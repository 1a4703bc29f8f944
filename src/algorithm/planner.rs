//! Composition of the wavefront and the descent into a single query

use log::{debug, info, warn};

use crate::algorithm::reconstruction::{Path, reconstruct};
use crate::algorithm::wavefront::DistanceField;
use crate::io::error::Result;
use crate::spatial::Scenario;

/// Outcome of one planning query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Distances to the scenario's destination
    pub field: DistanceField,
    /// Shortest path from start to destination, empty when unreachable
    pub path: Path,
}

impl Plan {
    /// Test whether a path was found
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Compute the distance field for a scenario and recover its shortest path
///
/// # Errors
///
/// Returns an error only if the scenario's parts do not fit its grid
pub fn plan(scenario: &Scenario) -> Result<Plan> {
    if scenario.start_blocked() {
        warn!("start {} lies on an obstacle", scenario.start);
    }
    if scenario.destination_blocked() {
        debug!(
            "destination {} lies on an obstacle, expanding from it anyway",
            scenario.destination
        );
    }

    let field = DistanceField::compute(
        scenario.shape,
        &scenario.obstacles,
        scenario.destination,
    )?;
    let path = reconstruct(&field, scenario.start, scenario.destination)?;

    if path.is_empty() {
        info!(
            "no path from {} to {} ({} of {} cells reachable)",
            scenario.start,
            scenario.destination,
            field.reached_count(),
            scenario.shape.cell_count()
        );
    } else {
        info!(
            "path from {} to {} found: {} steps",
            scenario.start,
            scenario.destination,
            path.steps()
        );
    }

    Ok(Plan { field, path })
}
