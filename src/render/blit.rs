//! Glyph blitting
//!
//! Copies one glyph cell from the atlas into a destination image, row by row.

use crate::constants::BPP;
use crate::font::FontAtlas;
use crate::image::PixelBuffer;
use log::warn;

/// Copy the glyph cell at atlas column `offset` into `dest` at column `dest_x`
///
/// `None` leaves the destination untouched (blank cell). The copy is clipped
/// to the destination: columns past its right edge and rows past its bottom
/// are dropped. A cell that does not fit inside the atlas is skipped.
pub fn draw_char(dest: &mut PixelBuffer, atlas: &FontAtlas, offset: Option<u32>, dest_x: u32) {
    let Some(offset) = offset else {
        return;
    };

    if dest_x >= dest.width() {
        return;
    }
    let cols = atlas.glyph_width().min(dest.width() - dest_x) as usize;
    let rows = atlas.glyph_height().min(dest.height());
    let start = dest_x as usize * BPP;
    let len = cols * BPP;

    for y in 0..rows {
        let Some(src) = atlas.cell_row(offset, y) else {
            warn!("Glyph cell out of atlas: offset={} row={}", offset, y);
            return;
        };
        if let Some(row) = dest.row_mut(y) {
            row[start..start + len].copy_from_slice(&src[..len]);
        }
    }
}
