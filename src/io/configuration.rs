//! Planner constants and runtime configuration defaults

// Grid sizing
/// Smallest accepted number of rows
pub const DEFAULT_MIN_ROWS: usize = 8;
/// Smallest accepted number of columns
pub const DEFAULT_MIN_COLUMNS: usize = 8;

// Scenario generation
/// Share of cells turned into obstacles, in percent
pub const DEFAULT_OBSTACLE_PERCENTAGE: f64 = 15.0;
/// Number of scenarios generated per invocation
pub const DEFAULT_RUNS: usize = 1;

// Output settings
/// Default PNG output path
pub const DEFAULT_OUTPUT: &str = "grassfire.png";
/// Suffix added to the output stem for the wavefront animation
pub const ANIMATION_SUFFIX: &str = "_wavefront";
/// Side length of one rendered cell in pixels
pub const CELL_SIZE_PX: u32 = 32;
/// Width of the grid lines in pixels
pub const GRID_LINE_PX: u32 = 1;
/// Delay between wavefront animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 120;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// The last animation frame is held this many times longer
pub const FINAL_FRAME_HOLD: u32 = 12;

// Palette
/// Background of free cells
pub const FREE_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Grid line color
pub const GRID_LINE_COLOR: [u8; 4] = [0, 0, 255, 255];
/// Obstacle fill
pub const OBSTACLE_COLOR: [u8; 4] = [0, 0, 0, 255];
/// Start cell fill
pub const START_COLOR: [u8; 4] = [0, 128, 0, 255];
/// Destination cell fill
pub const DESTINATION_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Intermediate path cell fill
pub const PATH_COLOR: [u8; 4] = [255, 165, 0, 255];
/// Label text color
pub const LABEL_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Wavefront shading at distance 0
pub const WAVE_NEAR_COLOR: [u8; 4] = [70, 130, 180, 255];
/// Wavefront shading at the farthest distance
pub const WAVE_FAR_COLOR: [u8; 4] = [220, 235, 250, 255];

/// Minimum accepted grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLimits {
    /// Smallest accepted number of rows
    pub min_rows: usize,
    /// Smallest accepted number of columns
    pub min_cols: usize,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
            min_cols: DEFAULT_MIN_COLUMNS,
        }
    }
}

impl GridLimits {
    /// Test whether a size meets both minimums
    pub const fn accepts(&self, rows: i64, cols: i64) -> bool {
        rows >= self.min_rows as i64 && cols >= self.min_cols as i64
    }
}
