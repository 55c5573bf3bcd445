//! Color packing and parsing utilities
//!
//! Pixels are stored as R, G, B, A bytes and passed around packed into a
//! `u32` as `R << 24 | G << 16 | B << 8 | A`.

/// Pack four channels into a single RGBA value
#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (r as u32) << 24 | (g as u32) << 16 | (b as u32) << 8 | a as u32
}

/// Split a packed RGBA value into its byte representation
#[inline]
pub const fn unpack_rgba(color: u32) -> [u8; 4] {
    color.to_be_bytes()
}

/// Parse hex color to packed RGBA.
///
/// Supported formats (leading `#` optional):
/// - RRGGBBAA
/// - RRGGBB (alpha = ff)
/// - RGB (short format, alpha = ff)
///
/// Returns None on invalid input.
pub fn parse_hex_rgba(hex: &str) -> Option<u32> {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        8 => u32::from_str_radix(hex, 16).ok(),
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(pack_rgba(r, g, b, 0xFF))
        }
        3 => {
            // Short format: expand F -> FF
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(pack_rgba(r, g, b, 0xFF))
        }
        _ => None,
    }
}

/// Format packed RGBA as RRGGBBAA
pub fn format_hex_rgba(color: u32) -> String {
    format!("{:08x}", color)
}
