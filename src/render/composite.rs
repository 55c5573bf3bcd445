//! Color-keyed tint compositing
//!
//! Merges a rendered text image onto another image: every source pixel that
//! differs from the transparency key becomes `tint` in the destination, all
//! other destination pixels keep their value.

use crate::image::PixelBuffer;
use log::trace;
use serde::{Deserialize, Serialize};

/// Which destination coordinates the compositor may write
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundsPolicy {
    /// `0 <= x < width`, `0 <= y < height`
    #[default]
    HalfOpen,
    /// `0 < x < width`, `0 < y < height`: row 0 and column 0 are never written.
    /// Kept for callers that rely on the legacy pixel check.
    ExcludeOrigin,
}

impl BoundsPolicy {
    /// Check a destination coordinate against a `width` x `height` image
    #[inline]
    pub fn accepts(self, x: i64, y: i64, width: u32, height: u32) -> bool {
        let inside = x < width as i64 && y < height as i64;
        match self {
            BoundsPolicy::HalfOpen => inside && x >= 0 && y >= 0,
            BoundsPolicy::ExcludeOrigin => inside && x > 0 && y > 0,
        }
    }
}

/// Tint every non-key pixel of `src` into `dest` with its top-left at (x, y)
///
/// Returns the number of destination pixels written.
pub fn composite_tinted(
    dest: &mut PixelBuffer,
    src: &PixelBuffer,
    x: i32,
    y: i32,
    tint: u32,
    key: u32,
    bounds: BoundsPolicy,
) -> usize {
    let (dw, dh) = (dest.width(), dest.height());
    let mut written = 0;

    for j in 0..src.height() {
        let dy = y as i64 + j as i64;
        for i in 0..src.width() {
            let dx = x as i64 + i as i64;
            if !bounds.accepts(dx, dy, dw, dh) {
                continue;
            }
            match src.get_pixel(i, j) {
                Some(color) if color != key => {
                    dest.put_pixel(dx as u32, dy as u32, tint);
                    written += 1;
                }
                _ => {}
            }
        }
    }

    trace!(
        "Composited {}x{} at ({}, {}): {} pixels",
        src.width(),
        src.height(),
        x,
        y,
        written
    );
    written
}
