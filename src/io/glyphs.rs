//! Minimal 3x5 bitmap font for cell labels
//!
//! Covers the letters needed for the "START" and "END" labels. Each glyph is
//! five rows of three bits, most significant bit on the left.

use image::{Rgba, RgbaImage};

/// Glyph width in font pixels
pub const GLYPH_WIDTH: u32 = 3;
/// Glyph height in font pixels
pub const GLYPH_HEIGHT: u32 = 5;
/// Blank font pixels between adjacent glyphs
pub const GLYPH_SPACING: u32 = 1;

/// Bit rows of a supported character, `None` for anything else
pub const fn glyph(ch: char) -> Option<[u8; 5]> {
    match ch {
        'A' => Some([0b010, 0b101, 0b111, 0b101, 0b101]),
        'D' => Some([0b110, 0b101, 0b101, 0b101, 0b110]),
        'E' => Some([0b111, 0b100, 0b110, 0b100, 0b111]),
        'N' => Some([0b101, 0b111, 0b111, 0b111, 0b101]),
        'R' => Some([0b110, 0b101, 0b110, 0b101, 0b101]),
        'S' => Some([0b011, 0b100, 0b010, 0b001, 0b110]),
        'T' => Some([0b111, 0b010, 0b010, 0b010, 0b010]),
        _ => None,
    }
}

/// Width of a label in font pixels, before scaling
pub fn text_width(text: &str) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        0
    } else {
        count * GLYPH_WIDTH + (count - 1) * GLYPH_SPACING
    }
}

/// Largest integer scale at which `text` fits inside a `box_size` square with
/// a one-pixel margin; 0 when even scale 1 does not fit
pub fn fitting_scale(text: &str, box_size: u32) -> u32 {
    let width = text_width(text);
    let available = box_size.saturating_sub(2);
    if width == 0 {
        return 0;
    }
    (available / width).min(available / GLYPH_HEIGHT)
}

/// Draw `text` centered on the square with top-left corner `(x0, y0)` and
/// side `box_size`; characters without a glyph are left blank
pub fn draw_centered(
    img: &mut RgbaImage,
    text: &str,
    x0: u32,
    y0: u32,
    box_size: u32,
    color: Rgba<u8>,
) {
    let scale = fitting_scale(text, box_size);
    if scale == 0 {
        return;
    }
    let width = text_width(text) * scale;
    let height = GLYPH_HEIGHT * scale;
    let left = x0 + (box_size - width) / 2;
    let top = y0 + (box_size - height) / 2;

    for (index, ch) in text.chars().enumerate() {
        let Some(rows) = glyph(ch) else {
            continue;
        };
        let glyph_left = left + index as u32 * (GLYPH_WIDTH + GLYPH_SPACING) * scale;
        for (gy, bits) in rows.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - gx)) == 0 {
                    continue;
                }
                fill_block(
                    img,
                    glyph_left + gx * scale,
                    top + gy as u32 * scale,
                    scale,
                    color,
                );
            }
        }
    }
}

fn fill_block(img: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    for py in y..y + size {
        for px in x..x + size {
            if px < img.width() && py < img.height() {
                img.put_pixel(px, py, color);
            }
        }
    }
}
