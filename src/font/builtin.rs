//! Built-in atlas generation
//!
//! Draws the `embedded-graphics` 10x20 ASCII mono font into an RGBA strip,
//! one cell per printable character with a 2px gap after each cell.
//! Ink is opaque white, everything else stays transparent.

use crate::constants::{
    BPP, FIRST_PRINTABLE, FONT_HEIGHT, FONT_WIDTH, GLYPH_COUNT, GLYPH_SEPARATOR, INK,
    LAST_PRINTABLE,
};
use crate::utils::color::unpack_rgba;
use embedded_graphics::{
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

/// Draw target backed by the atlas byte buffer
struct AtlasCanvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl DrawTarget for AtlasCanvas {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let ink = unpack_rgba(INK);
        for Pixel(Point { x, y }, color) in pixels {
            if color != BinaryColor::On {
                continue;
            }
            if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
                continue;
            }
            let i = (y as usize * self.width as usize + x as usize) * BPP;
            self.pixels[i..i + BPP].copy_from_slice(&ink);
        }
        Ok(())
    }
}

impl OriginDimensions for AtlasCanvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Render the built-in atlas, returning (width, height, rgba)
pub(crate) fn render_builtin() -> (u32, u32, Vec<u8>) {
    let width = GLYPH_COUNT * (FONT_WIDTH + GLYPH_SEPARATOR);
    let height = FONT_HEIGHT;
    let mut canvas = AtlasCanvas {
        width,
        height,
        pixels: vec![0u8; width as usize * height as usize * BPP],
    };

    let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    let mut buf = [0u8; 4];
    for (i, c) in (FIRST_PRINTABLE..=LAST_PRINTABLE).enumerate() {
        let s = char::from(c).encode_utf8(&mut buf);
        let x = (i as u32 * (FONT_WIDTH + GLYPH_SEPARATOR)) as i32;
        Text::with_baseline(s, Point::new(x, 0), style, Baseline::Top)
            .draw(&mut canvas)
            .ok();
    }

    (width, height, canvas.pixels)
}
