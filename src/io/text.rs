//! Plain-text rendering for terminals and logs

use crate::algorithm::reconstruction::Path;
use crate::algorithm::wavefront::DistanceField;
use crate::io::image::CellKind;
use crate::spatial::scenario::Scenario;

/// Character used for each kind of cell
pub const fn symbol(kind: CellKind) -> char {
    match kind {
        CellKind::Free => '.',
        CellKind::Obstacle => '#',
        CellKind::Path => '*',
        CellKind::Start => 'S',
        CellKind::Destination => 'E',
    }
}

/// One line per row: `S` start, `E` destination, `*` path, `#` obstacle, `.` free
pub fn render_text(scenario: &Scenario, path: &Path) -> String {
    let shape = scenario.shape;
    let mut out = String::with_capacity(shape.cell_count() + shape.rows());
    for cell in shape.cells() {
        out.push(symbol(CellKind::of(scenario, path, cell)));
        if cell.col + 1 == shape.cols() {
            out.push('\n');
        }
    }
    out
}

/// The distance field as a right-aligned table, `#` for obstacles and `inf`
/// for unreached cells
pub fn render_field(field: &DistanceField) -> String {
    field.to_string()
}
