//! Global constants for bmtext
//!
//! Glyph geometry of the built-in atlas, pixel layout, and size limits.

// ============================================================================
// Glyph Geometry
// ============================================================================

/// Glyph cell width of the built-in atlas (pixels)
pub const FONT_WIDTH: u32 = 10;

/// Glyph cell height of the built-in atlas (pixels)
pub const FONT_HEIGHT: u32 = 20;

/// Empty columns between two consecutive glyph cells in an atlas
pub const GLYPH_SEPARATOR: u32 = 2;

/// First printable ASCII code (space)
pub const FIRST_PRINTABLE: u8 = 0x20;

/// Last printable ASCII code (tilde)
pub const LAST_PRINTABLE: u8 = 0x7E;

/// Number of glyph cells in an atlas (0x20..=0x7E)
pub const GLYPH_COUNT: u32 = (LAST_PRINTABLE - FIRST_PRINTABLE) as u32 + 1;

// ============================================================================
// Pixel Layout
// ============================================================================

/// Bytes per pixel (R, G, B, A)
pub const BPP: usize = 4;

/// Packed value of a cleared pixel (transparent black)
pub const CLEAR: u32 = 0x0000_0000;

/// Packed value of atlas ink (opaque white)
pub const INK: u32 = 0xFFFF_FFFF;

// ============================================================================
// Limits
// ============================================================================

/// Default maximum string length accepted by the rasterizer
pub const MAX_STRING_LEN: usize = 512;

/// Maximum image dimension on either axis
pub const MAX_IMAGE_DIMENSION: u32 = i16::MAX as u32;

/// Minimum atlas width able to hold every glyph cell
#[inline]
pub const fn min_atlas_width(glyph_width: u32) -> u32 {
    GLYPH_COUNT * glyph_width + (GLYPH_COUNT - 1) * GLYPH_SEPARATOR
}

/// Check if a byte belongs to the printable ASCII class (C locale `isprint`)
#[inline]
pub const fn is_printable(c: u8) -> bool {
    c >= FIRST_PRINTABLE && c <= LAST_PRINTABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable_class() {
        assert!(is_printable(b' '));
        assert!(is_printable(b'A'));
        assert!(is_printable(b'~'));
        assert!(!is_printable(0x1F));
        assert!(!is_printable(0x7F));
        assert!(!is_printable(b'\n'));
        assert!(!is_printable(0xE9));
    }

    #[test]
    fn test_builtin_atlas_width() {
        // 95 cells of 10px plus 94 separators
        assert_eq!(GLYPH_COUNT, 95);
        assert_eq!(min_atlas_width(FONT_WIDTH), 1138);
    }
}
