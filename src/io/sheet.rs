//! PNG contact-sheet export for enumerated shapes
//!
//! Shapes are laid out in a near-square grid of equally sized slots, each
//! drawn at a fixed pixel scale on a transparent background. Slot size is
//! taken from the largest shape extent so rows and columns stay aligned.

use crate::geometry::shape::Shape;
use crate::io::configuration::{SHEET_CELL_PIXELS, SHEET_SLOT_GAP};
use crate::io::error::{EnumerationError, Result};
use image::{ImageBuffer, Rgba};
use std::path::Path;

const CELL_FILL: Rgba<u8> = Rgba([40, 40, 40, 255]);

/// Lay out shapes in a grid and save the sheet as PNG
///
/// # Errors
///
/// Returns [`EnumerationError::SheetExport`] when encoding or writing the
/// image fails.
pub fn export_sheet(shapes: &[Shape], path: &Path) -> Result<()> {
    let slot_w = shapes
        .iter()
        .map(|shape| shape.extent().0)
        .max()
        .unwrap_or(1) as u32;
    let slot_h = shapes
        .iter()
        .map(|shape| shape.extent().1)
        .max()
        .unwrap_or(1) as u32;
    let columns = ((shapes.len().max(1) as f64).sqrt().ceil() as u32).max(1);
    let rows = (shapes.len().max(1) as u32).div_ceil(columns);

    let slot_px_w = slot_w * SHEET_CELL_PIXELS;
    let slot_px_h = slot_h * SHEET_CELL_PIXELS;
    let width = columns * slot_px_w + (columns + 1) * SHEET_SLOT_GAP;
    let height = rows * slot_px_h + (rows + 1) * SHEET_SLOT_GAP;

    // Zeroed buffer doubles as the transparent background
    let mut sheet: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::new(width, height);

    for (index, shape) in shapes.iter().enumerate() {
        let column = index as u32 % columns;
        let row = index as u32 / columns;
        let origin_x = SHEET_SLOT_GAP + column * (slot_px_w + SHEET_SLOT_GAP);
        let origin_y = SHEET_SLOT_GAP + row * (slot_px_h + SHEET_SLOT_GAP);

        for cell in shape.cells() {
            let base_x = origin_x + cell.x as u32 * SHEET_CELL_PIXELS;
            let base_y = origin_y + cell.y as u32 * SHEET_CELL_PIXELS;
            for dy in 0..SHEET_CELL_PIXELS {
                for dx in 0..SHEET_CELL_PIXELS {
                    if let Some(pixel) = sheet.get_pixel_mut_checked(base_x + dx, base_y + dy) {
                        *pixel = CELL_FILL;
                    }
                }
            }
        }
    }

    sheet
        .save(path)
        .map_err(|source| EnumerationError::SheetExport {
            path: path.to_path_buf(),
            source,
        })
}
