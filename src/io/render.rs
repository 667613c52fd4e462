//! ASCII rendering of shapes and listing assembly

use crate::algorithm::symmetry::SymmetryMode;
use crate::geometry::shape::Shape;
use crate::io::configuration::FILLED_GLYPH;
use ndarray::Array2;
use std::fmt::Write;

/// Rasterize a shape into a boolean grid sized to its extent
///
/// Rows index y and columns index x, so printing rows in order walks the
/// shape from its y-minimum edge downward.
pub fn rasterize(shape: &Shape) -> Array2<bool> {
    let (width, height) = shape.extent();
    let mut grid = Array2::from_elem((height, width), false);
    for cell in shape.cells() {
        if let Some(slot) = grid.get_mut((cell.y as usize, cell.x as usize)) {
            *slot = true;
        }
    }
    grid
}

/// Render a shape as rows of filled and blank glyphs
pub fn render_shape(shape: &Shape) -> String {
    let grid = rasterize(shape);
    let mut out = String::with_capacity((grid.ncols() + 1) * grid.nrows());
    for row in grid.rows() {
        for &filled in row {
            out.push(if filled { FILLED_GLYPH } else { ' ' });
        }
        out.push('\n');
    }
    out
}

/// Header block for listings, naming the run parameters and the total count
pub fn listing_header(size: usize, mode: SymmetryMode, count: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Polyomino enumeration results");
    let _ = writeln!(out, "Size: {size}");
    let _ = writeln!(out, "Mode: {}", mode.label());
    let _ = writeln!(out, "Count: {count}");
    let _ = writeln!(out);
    out
}

/// Assemble the numbered listing used for console display and file export
pub fn render_listing(shapes: &[Shape], header: &str) -> String {
    let mut out = String::from(header);
    for (index, shape) in shapes.iter().enumerate() {
        let _ = writeln!(out, "Shape {}:", index + 1);
        out.push_str(&render_shape(shape));
        out.push('\n');
    }
    out
}
