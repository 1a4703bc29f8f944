//! Animated GIF of the wavefront spreading out from the destination
//!
//! Frames are built from the distance field's layers: each frame shades one
//! more ring of free cells by its distance. The final frame shows the path and
//! is held longer.

use image::{Delay, Frame, Rgba, RgbaImage};
use std::path::Path as FsPath;

use crate::algorithm::planner::Plan;
use crate::algorithm::reconstruction::Path;
use crate::io::configuration::{
    FINAL_FRAME_HOLD, VIEWER_MIN_FRAME_DELAY_MS, WAVE_FAR_COLOR, WAVE_NEAR_COLOR,
};
use crate::io::error::{PathfindingError, Result};
use crate::io::image::{CellKind, RenderStyle, create_parent_dir, fill_cell, render_scenario};
use crate::spatial::grid::Cell;
use crate::spatial::scenario::Scenario;

/// Linear blend between the near and far wavefront colors
pub fn wave_color(distance: u32, max_distance: u32) -> Rgba<u8> {
    let t = if max_distance == 0 {
        0.0
    } else {
        f64::from(distance.min(max_distance)) / f64::from(max_distance)
    };
    let mut rgba = [0_u8; 4];
    for (channel, (near, far)) in rgba
        .iter_mut()
        .zip(WAVE_NEAR_COLOR.iter().zip(WAVE_FAR_COLOR.iter()))
    {
        let near = f64::from(*near);
        let far = f64::from(*far);
        *channel = (far - near).mul_add(t, near).round() as u8;
    }
    Rgba(rgba)
}

/// Shade the free cells of one distance layer
///
/// Start, destination and obstacle cells keep their own colors.
pub fn shade_layer(
    img: &mut RgbaImage,
    scenario: &Scenario,
    layer: &[Cell],
    distance: u32,
    max_distance: u32,
    style: RenderStyle,
) {
    let color = wave_color(distance, max_distance);
    let empty_path = Path::empty();
    for &cell in layer {
        if CellKind::of(scenario, &empty_path, cell) == CellKind::Free {
            fill_cell(img, style, cell, color);
        }
    }
}

/// Every animation frame: one per distance layer, then the path frame
///
/// Each layer frame adds the next ring of the wavefront to the previous one.
/// Frames below the viewer-supported delay are thinned out so the apparent
/// speed is preserved; the outermost layer is always shown.
///
/// # Errors
///
/// Returns `InvalidParameter` if the grid is too large to render
pub fn wavefront_frames(
    scenario: &Scenario,
    plan: &Plan,
    style: RenderStyle,
    frame_delay_ms: u32,
) -> Result<Vec<Frame>> {
    let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
    let skip_factor = if frame_delay_ms == 0 {
        1
    } else if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
        VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms)
    } else {
        1
    };

    let layers = plan.field.layers();
    let max_distance = plan.field.max_distance();
    let mut canvas = render_scenario(scenario, &Path::empty(), style)?;
    let mut frames = Vec::with_capacity(layers.len() + 1);

    for (distance, layer) in (0_u32..).zip(&layers) {
        shade_layer(&mut canvas, scenario, layer, distance, max_distance, style);
        if distance % skip_factor == 0 || distance == max_distance {
            frames.push(Frame::from_parts(
                canvas.clone(),
                0,
                0,
                Delay::from_numer_denom_ms(effective_delay_ms, 1),
            ));
        }
    }

    // Final frame displays longer for better visibility
    frames.push(Frame::from_parts(
        render_scenario(scenario, &plan.path, style)?,
        0,
        0,
        Delay::from_numer_denom_ms(effective_delay_ms * FINAL_FRAME_HOLD, 1),
    ));
    Ok(frames)
}

/// Encode the wavefront animation of a plan as GIF
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be created and `ImageExport` if
/// GIF encoding fails
pub fn export_wavefront_gif(
    scenario: &Scenario,
    plan: &Plan,
    style: RenderStyle,
    output_path: &FsPath,
    frame_delay_ms: u32,
) -> Result<()> {
    let frames = wavefront_frames(scenario, plan, style, frame_delay_ms)?;

    create_parent_dir(output_path)?;
    let file = std::fs::File::create(output_path).map_err(|e| PathfindingError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "create file",
        source: e,
    })?;

    let mut encoder = image::codecs::gif::GifEncoder::new(file);
    encoder
        .encode_frames(frames)
        .map_err(|e| PathfindingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
