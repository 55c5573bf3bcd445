//! Glyph lookup
//!
//! Maps a byte to the column where its cell starts in the atlas.

use crate::constants::{is_printable, FIRST_PRINTABLE, FONT_WIDTH, GLYPH_SEPARATOR};

/// Signed "no glyph" value returned by [`texoffset`]
pub const NO_GLYPH: i32 = -1;

/// Column offset of the cell for `c` in an atlas with `glyph_width` cells
///
/// Non-printable bytes have no cell.
#[inline]
pub fn glyph_offset(c: u8, glyph_width: u32) -> Option<u32> {
    if !is_printable(c) {
        return None;
    }
    Some((glyph_width + GLYPH_SEPARATOR) * (c - FIRST_PRINTABLE) as u32)
}

/// Column offset of `c` in the built-in atlas
#[inline]
pub fn locate(c: u8) -> Option<u32> {
    glyph_offset(c, FONT_WIDTH)
}

/// Column offset of `c` in the built-in atlas, or [`NO_GLYPH`]
pub fn texoffset(c: u8) -> i32 {
    match locate(c) {
        Some(offset) => offset as i32,
        None => NO_GLYPH,
    }
}
