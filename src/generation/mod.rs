//! Random scenario generation

/// Seeded placement of obstacles, start and destination
pub mod placement;

pub use placement::ScenarioGenerator;
