//! Font atlas
//!
//! A single RGBA bitmap holding one fixed-size glyph cell per printable
//! ASCII character (0x20-0x7E), left to right, with a `GLYPH_SEPARATOR`
//! column gap between consecutive cells.
//!
//! The atlas is immutable after construction. The built-in one is generated
//! on first use and shared process-wide; tests and callers with their own
//! bitmaps build atlases with [`FontAtlas::from_rgba`].

use crate::constants::{BPP, FONT_HEIGHT, FONT_WIDTH, GLYPH_COUNT, GLYPH_SEPARATOR};
use crate::error::{RenderError, Result};
use crate::font::locator::glyph_offset;
use log::debug;
use std::sync::OnceLock;

static BUILTIN: OnceLock<FontAtlas> = OnceLock::new();

/// Fixed-cell glyph atlas
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontAtlas {
    /// Atlas width (pixels)
    width: u32,
    /// Atlas height (pixels)
    height: u32,
    /// Glyph cell width (pixels)
    glyph_width: u32,
    /// Glyph cell height (pixels)
    glyph_height: u32,
    /// RGBA pixel data (row-major)
    pixels: Vec<u8>,
}

impl FontAtlas {
    /// Build an atlas from a precompiled RGBA bitmap
    ///
    /// The bitmap must be wide enough for 95 cells and 94 separators,
    /// at least one cell tall, and exactly `width * height * 4` bytes.
    pub fn from_rgba(
        width: u32,
        height: u32,
        glyph_width: u32,
        glyph_height: u32,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        if glyph_width == 0 || glyph_height == 0 {
            return Err(RenderError::InvalidAtlas(format!(
                "empty glyph cell {}x{}",
                glyph_width, glyph_height
            )));
        }

        let needed = GLYPH_COUNT as u64 * glyph_width as u64
            + (GLYPH_COUNT as u64 - 1) * GLYPH_SEPARATOR as u64;
        if (width as u64) < needed {
            return Err(RenderError::InvalidAtlas(format!(
                "width {} cannot hold {} cells of {}px",
                width, GLYPH_COUNT, glyph_width
            )));
        }
        if height < glyph_height {
            return Err(RenderError::InvalidAtlas(format!(
                "height {} is less than glyph height {}",
                height, glyph_height
            )));
        }

        let expected = width as u64 * height as u64 * BPP as u64;
        if pixels.len() as u64 != expected {
            return Err(RenderError::InvalidAtlas(format!(
                "expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }

        debug!(
            "Atlas loaded: {}x{}, cell {}x{}",
            width, height, glyph_width, glyph_height
        );

        Ok(Self {
            width,
            height,
            glyph_width,
            glyph_height,
            pixels,
        })
    }

    /// Process-wide built-in atlas (10x20 cells)
    ///
    /// Generated on first call; later calls return the same instance.
    pub fn builtin() -> &'static FontAtlas {
        BUILTIN.get_or_init(|| {
            let (width, height, pixels) = super::builtin::render_builtin();
            debug!(
                "Built-in atlas generated: {}x{}, {} glyphs",
                width, height, GLYPH_COUNT
            );
            Self {
                width,
                height,
                glyph_width: FONT_WIDTH,
                glyph_height: FONT_HEIGHT,
                pixels,
            }
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn glyph_width(&self) -> u32 {
        self.glyph_width
    }

    pub fn glyph_height(&self) -> u32 {
        self.glyph_height
    }

    /// Raw RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Column offset of the glyph for `c` in this atlas
    #[inline]
    pub fn locate(&self, c: u8) -> Option<u32> {
        glyph_offset(c, self.glyph_width)
    }

    /// One row of a glyph cell: `glyph_width * 4` bytes starting at column
    /// `offset` of atlas row `y`
    ///
    /// None if the cell row lies outside the atlas.
    pub fn cell_row(&self, offset: u32, y: u32) -> Option<&[u8]> {
        if y >= self.glyph_height || y >= self.height {
            return None;
        }
        let end = offset.checked_add(self.glyph_width)?;
        if end > self.width {
            return None;
        }
        let start = (y as usize * self.width as usize + offset as usize) * BPP;
        Some(&self.pixels[start..start + self.glyph_width as usize * BPP])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{min_atlas_width, INK};

    fn blank_atlas(gw: u32, gh: u32) -> Result<FontAtlas> {
        let w = min_atlas_width(gw);
        FontAtlas::from_rgba(w, gh, gw, gh, vec![0; (w * gh) as usize * BPP])
    }

    #[test]
    fn test_from_rgba_accepts_exact_width() {
        let atlas = blank_atlas(5, 7).unwrap();
        assert_eq!(atlas.width(), 95 * 5 + 94 * 2);
        assert_eq!(atlas.glyph_width(), 5);
        assert_eq!(atlas.glyph_height(), 7);
    }

    #[test]
    fn test_from_rgba_accepts_trailing_separator() {
        let w = GLYPH_COUNT * (5 + GLYPH_SEPARATOR);
        let atlas = FontAtlas::from_rgba(w, 7, 5, 7, vec![0; (w * 7) as usize * BPP]);
        assert!(atlas.is_ok());
    }

    #[test]
    fn test_from_rgba_rejects_bad_geometry() {
        let w = min_atlas_width(5);
        // too narrow
        let narrow = vec![0; ((w - 1) * 7) as usize * BPP];
        assert!(FontAtlas::from_rgba(w - 1, 7, 5, 7, narrow).is_err());
        // too short
        assert!(FontAtlas::from_rgba(w, 6, 5, 7, vec![0; (w * 6) as usize * BPP]).is_err());
        // wrong byte count
        assert!(FontAtlas::from_rgba(w, 7, 5, 7, vec![0; 12]).is_err());
        // empty cell
        assert!(FontAtlas::from_rgba(w, 7, 0, 7, vec![0; (w * 7) as usize * BPP]).is_err());
    }

    #[test]
    fn test_cell_row_bounds() {
        let atlas = blank_atlas(5, 7).unwrap();
        let last = atlas.locate(b'~').unwrap();
        assert_eq!(atlas.cell_row(last, 0).map(|r| r.len()), Some(5 * BPP));
        assert_eq!(atlas.cell_row(last, 7), None);
        assert_eq!(atlas.cell_row(atlas.width() - 4, 0), None);
    }

    #[test]
    fn test_builtin_geometry() {
        let atlas = FontAtlas::builtin();
        assert_eq!(atlas.glyph_width(), FONT_WIDTH);
        assert_eq!(atlas.glyph_height(), FONT_HEIGHT);
        assert_eq!(atlas.width(), GLYPH_COUNT * (FONT_WIDTH + GLYPH_SEPARATOR));
        assert_eq!(atlas.height(), FONT_HEIGHT);
        assert!(std::ptr::eq(atlas, FontAtlas::builtin()));
    }

    #[test]
    fn test_builtin_has_ink() {
        let atlas = FontAtlas::builtin();
        let has_ink = |c: u8| {
            let off = atlas.locate(c).unwrap();
            (0..FONT_HEIGHT).any(|y| {
                atlas
                    .cell_row(off, y)
                    .unwrap()
                    .chunks_exact(BPP)
                    .any(|p| u32::from_be_bytes([p[0], p[1], p[2], p[3]]) == INK)
            })
        };
        assert!(has_ink(b'A'));
        assert!(has_ink(b'~'));
        assert!(!has_ink(b' '));
    }
}
