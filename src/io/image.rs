//! Raster rendering of scenarios and PNG export
//!
//! Cells are drawn as filled squares separated by grid lines, row 0 at the
//! top. Start and destination keep their own colors and carry text labels;
//! only the intermediate path cells are highlighted.

use image::{Rgba, RgbaImage};
use std::path::Path as FsPath;

use crate::algorithm::reconstruction::Path;
use crate::io::configuration::{
    CELL_SIZE_PX, DESTINATION_COLOR, FREE_COLOR, GRID_LINE_COLOR, GRID_LINE_PX, LABEL_COLOR,
    OBSTACLE_COLOR, PATH_COLOR, START_COLOR,
};
use crate::io::error::{PathfindingError, Result, invalid_parameter};
use crate::io::glyphs::draw_centered;
use crate::spatial::grid::{Cell, GridShape};
use crate::spatial::scenario::Scenario;

/// Label drawn on the start cell
pub const START_LABEL: &str = "START";
/// Label drawn on the destination cell
pub const DESTINATION_LABEL: &str = "END";

/// Role of a cell in a rendering, in increasing drawing priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellKind {
    /// Free cell off the path
    Free,
    /// Obstacle cell
    Obstacle,
    /// Intermediate path cell
    Path,
    /// Start cell
    Start,
    /// Destination cell
    Destination,
}

impl CellKind {
    /// Classify a cell of a scenario given its path
    pub fn of(scenario: &Scenario, path: &Path, cell: Cell) -> Self {
        if cell == scenario.destination {
            Self::Destination
        } else if cell == scenario.start {
            Self::Start
        } else if path.intermediate().contains(&cell) {
            Self::Path
        } else if scenario.obstacles.contains(cell) {
            Self::Obstacle
        } else {
            Self::Free
        }
    }

    /// Fill color of this kind
    pub const fn color(self) -> Rgba<u8> {
        match self {
            Self::Free => Rgba(FREE_COLOR),
            Self::Obstacle => Rgba(OBSTACLE_COLOR),
            Self::Path => Rgba(PATH_COLOR),
            Self::Start => Rgba(START_COLOR),
            Self::Destination => Rgba(DESTINATION_COLOR),
        }
    }
}

/// Pixel geometry of a rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    cell_size: u32,
    line_width: u32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE_PX,
            line_width: GRID_LINE_PX,
        }
    }
}

impl RenderStyle {
    /// Create a style with a cell pitch and grid line width in pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless the cell pitch exceeds the line width
    pub fn new(cell_size: u32, line_width: u32) -> Result<Self> {
        if cell_size <= line_width {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("must exceed the grid line width {line_width}"),
            ));
        }
        Ok(Self {
            cell_size,
            line_width,
        })
    }

    /// Distance in pixels between the origins of adjacent cells
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Side of the filled square inside the grid lines
    pub const fn interior(&self) -> u32 {
        self.cell_size - self.line_width
    }

    /// Top-left pixel of a cell's filled square
    pub const fn cell_origin(&self, cell: Cell) -> (u32, u32) {
        (
            cell.col as u32 * self.cell_size + self.line_width,
            cell.row as u32 * self.cell_size + self.line_width,
        )
    }

    /// Image width and height for a grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the rendering does not fit in an image buffer
    pub fn image_dimensions(&self, shape: GridShape) -> Result<(u32, u32)> {
        let side = |cells: usize| {
            u32::try_from(cells)
                .ok()
                .and_then(|count| count.checked_mul(self.cell_size))
                .and_then(|pixels| pixels.checked_add(self.line_width))
        };
        side(shape.cols())
            .zip(side(shape.rows()))
            .filter(|&(width, height)| {
                (width as usize)
                    .checked_mul(height as usize)
                    .and_then(|pixels| pixels.checked_mul(4))
                    .is_some()
            })
            .ok_or_else(|| invalid_parameter("shape", &shape, &"grid is too large to render"))
    }
}

/// Fill the interior of one cell
pub fn fill_cell(img: &mut RgbaImage, style: RenderStyle, cell: Cell, color: Rgba<u8>) {
    let (x0, y0) = style.cell_origin(cell);
    for y in y0..y0 + style.interior() {
        for x in x0..x0 + style.interior() {
            img.put_pixel(x, y, color);
        }
    }
}

/// Draw the grid lines and fill every cell with the color chosen by `fill`
///
/// # Errors
///
/// Returns `InvalidParameter` if the grid is too large to render
pub fn render_cells<F>(shape: GridShape, style: RenderStyle, mut fill: F) -> Result<RgbaImage>
where
    F: FnMut(Cell) -> Rgba<u8>,
{
    let (width, height) = style.image_dimensions(shape)?;
    let mut img = RgbaImage::from_pixel(width, height, Rgba(GRID_LINE_COLOR));
    for cell in shape.cells() {
        fill_cell(&mut img, style, cell, fill(cell));
    }
    Ok(img)
}

/// Draw the START and END labels onto an already filled rendering
pub fn draw_labels(img: &mut RgbaImage, scenario: &Scenario, style: RenderStyle) {
    let label_color = Rgba(LABEL_COLOR);
    let (x, y) = style.cell_origin(scenario.start);
    draw_centered(img, START_LABEL, x, y, style.interior(), label_color);
    let (x, y) = style.cell_origin(scenario.destination);
    draw_centered(img, DESTINATION_LABEL, x, y, style.interior(), label_color);
}

/// Render a scenario and its path
///
/// # Errors
///
/// Returns `InvalidParameter` if the grid is too large to render
pub fn render_scenario(scenario: &Scenario, path: &Path, style: RenderStyle) -> Result<RgbaImage> {
    let mut img = render_cells(scenario.shape, style, |cell| {
        CellKind::of(scenario, path, cell).color()
    })?;
    draw_labels(&mut img, scenario, style);
    Ok(img)
}

/// Save a rendering as PNG, creating the parent directory if needed
///
/// # Errors
///
/// Returns `FileSystem` if the parent directory cannot be created and
/// `ImageExport` if encoding or writing fails
pub fn export_png(img: &RgbaImage, output_path: &FsPath) -> Result<()> {
    create_parent_dir(output_path)?;
    img.save(output_path)
        .map_err(|e| PathfindingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}

pub(crate) fn create_parent_dir(output_path: &FsPath) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PathfindingError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    Ok(())
}
