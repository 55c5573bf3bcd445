//! String rendering
//!
//! [`TextRenderer`] turns a byte string into a row of glyph cells. Both the
//! standalone path ([`TextRenderer::put_string`]) and the compositing path
//! ([`TextRenderer::put_string_onto`]) go through [`TextRenderer::rasterize`].

use super::blit::draw_char;
use super::composite::{composite_tinted, BoundsPolicy};
use crate::config::TextConfig;
use crate::constants::{CLEAR, MAX_IMAGE_DIMENSION, MAX_STRING_LEN};
use crate::display::Window;
use crate::error::{RenderError, Result};
use crate::font::FontAtlas;
use crate::image::PixelBuffer;
use log::{debug, trace, warn};

/// Renders strings with one shared atlas
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer<'a> {
    atlas: &'a FontAtlas,
    /// Longest accepted string (bytes)
    max_string: usize,
    /// Packed value treated as transparent when compositing
    key: u32,
    bounds: BoundsPolicy,
}

impl<'a> TextRenderer<'a> {
    pub fn new(atlas: &'a FontAtlas) -> Self {
        Self {
            atlas,
            max_string: MAX_STRING_LEN,
            key: CLEAR,
            bounds: BoundsPolicy::default(),
        }
    }

    /// Renderer using the built-in atlas and default limits
    pub fn builtin() -> TextRenderer<'static> {
        TextRenderer::new(FontAtlas::builtin())
    }

    pub fn from_config(atlas: &'a FontAtlas, config: &TextConfig) -> Self {
        Self {
            atlas,
            max_string: MAX_STRING_LEN,
            key: config.key(),
            bounds: config.bounds,
        }
        .with_max_string(config.max_string)
    }

    /// Set the longest accepted string
    ///
    /// Clamped so that a string of the maximum length still fits in an
    /// image no wider than `MAX_IMAGE_DIMENSION`.
    pub fn with_max_string(mut self, max: usize) -> Self {
        let limit = (MAX_IMAGE_DIMENSION / self.atlas.glyph_width()) as usize;
        if max > limit {
            warn!(
                "max_string {} exceeds image width limit, using {}",
                max, limit
            );
        }
        self.max_string = max.min(limit);
        self
    }

    pub fn with_key(mut self, key: u32) -> Self {
        self.key = key;
        self
    }

    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn atlas(&self) -> &'a FontAtlas {
        self.atlas
    }

    pub fn max_string(&self) -> usize {
        self.max_string
    }

    pub fn key(&self) -> u32 {
        self.key
    }

    pub fn bounds(&self) -> BoundsPolicy {
        self.bounds
    }

    /// Render `text` into a new image
    ///
    /// The image is `len * glyph_width` by `glyph_height`. Byte `i` occupies
    /// columns `i * glyph_width ..`; non-printable bytes leave their cell
    /// transparent. Nothing is allocated when the string is too long.
    pub fn rasterize(&self, text: impl AsRef<[u8]>) -> Result<PixelBuffer> {
        let text = text.as_ref();
        let len = text.len();
        if len > self.max_string {
            return Err(RenderError::StringTooLong {
                len,
                max: self.max_string,
            });
        }

        let gw = self.atlas.glyph_width();
        let gh = self.atlas.glyph_height();
        let width = len as u64 * gw as u64;
        let width = u32::try_from(width).map_err(|_| RenderError::InvalidDimensions {
            width,
            height: gh as u64,
        })?;

        let mut image = PixelBuffer::new(width, gh)?;
        let mut dest_x = 0;
        for &c in text {
            draw_char(&mut image, self.atlas, self.atlas.locate(c), dest_x);
            dest_x += gw;
        }

        trace!("Rasterized {} bytes into {}x{}", len, width, gh);
        Ok(image)
    }

    /// Render `text` and attach it to `window` at (x, y)
    ///
    /// On success the caller owns the returned image. If the window rejects
    /// it, the image is dropped and the failure returned.
    pub fn put_string<W: Window + ?Sized>(
        &self,
        window: &mut W,
        text: impl AsRef<[u8]>,
        x: i32,
        y: i32,
    ) -> Result<PixelBuffer> {
        let image = self.rasterize(text)?;
        let instance = window.attach(&image, x, y)?;
        debug!("String placed at ({}, {}) as instance {}", x, y, instance);
        Ok(image)
    }

    /// Render `text` and tint its ink onto `dest` at (x, y)
    ///
    /// The intermediate image is dropped before returning. When rendering
    /// fails no destination pixel is written.
    pub fn put_string_onto(
        &self,
        dest: &mut PixelBuffer,
        text: impl AsRef<[u8]>,
        x: i32,
        y: i32,
        tint: u32,
    ) -> Result<()> {
        let scratch = self.rasterize(text)?;
        composite_tinted(dest, &scratch, x, y, tint, self.key, self.bounds);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BPP, FONT_HEIGHT, FONT_WIDTH};
    use crate::error::AttachError;

    struct RejectingWindow;

    impl Window for RejectingWindow {
        fn attach(
            &mut self,
            _: &PixelBuffer,
            _: i32,
            _: i32,
        ) -> std::result::Result<usize, AttachError> {
            Err(AttachError::Backend("no surface".into()))
        }
    }

    #[test]
    fn test_rasterize_size() {
        let r = TextRenderer::builtin();
        let img = r.rasterize("Hello").unwrap();
        assert_eq!(img.width(), 5 * FONT_WIDTH);
        assert_eq!(img.height(), FONT_HEIGHT);
    }

    #[test]
    fn test_rasterize_empty() {
        let img = TextRenderer::builtin().rasterize("").unwrap();
        assert_eq!((img.width(), img.height()), (0, FONT_HEIGHT));
    }

    #[test]
    fn test_too_long() {
        let r = TextRenderer::builtin().with_max_string(4);
        assert!(r.rasterize("abcd").is_ok());
        assert_eq!(
            r.rasterize("abcde"),
            Err(RenderError::StringTooLong { len: 5, max: 4 })
        );
    }

    #[test]
    fn test_oversized_max_string_is_clamped() {
        let limit = (MAX_IMAGE_DIMENSION / FONT_WIDTH) as usize;
        let r = TextRenderer::builtin().with_max_string(5000);
        assert_eq!(r.max_string(), limit);

        let img = r.rasterize(vec![b'a'; limit]).unwrap();
        assert_eq!(img.width(), limit as u32 * FONT_WIDTH);
        assert_eq!(
            r.rasterize(vec![b'a'; limit + 1]),
            Err(RenderError::StringTooLong {
                len: limit + 1,
                max: limit
            })
        );
    }

    #[test]
    fn test_from_config_clamps_max_string() {
        let config = TextConfig {
            max_string: usize::MAX,
            ..TextConfig::default()
        };
        let r = TextRenderer::from_config(FontAtlas::builtin(), &config);
        assert_eq!(r.max_string(), (MAX_IMAGE_DIMENSION / FONT_WIDTH) as usize);
        assert!(r.rasterize(vec![b'x'; r.max_string()]).is_ok());
    }

    #[test]
    fn test_with_key_selects_ink() {
        // Keying out opaque white tints the glyph background instead of its ink
        let r = TextRenderer::builtin().with_key(0xFFFFFFFF);
        let glyph = r.rasterize("A").unwrap();
        let mut dest = PixelBuffer::new(FONT_WIDTH, FONT_HEIGHT).unwrap();
        r.put_string_onto(&mut dest, "A", 0, 0, 0x0000FFFF).unwrap();

        for y in 0..FONT_HEIGHT {
            for x in 0..FONT_WIDTH {
                let expected = if glyph.get_pixel(x, y) == Some(0xFFFFFFFF) {
                    0
                } else {
                    0x0000FFFF
                };
                assert_eq!(dest.get_pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_non_printable_cell_blank() {
        let img = TextRenderer::builtin().rasterize("A\x01A").unwrap();
        let stride = img.width() as usize * BPP;
        for y in 0..FONT_HEIGHT as usize {
            let start = y * stride + FONT_WIDTH as usize * BPP;
            let cell = &img.pixels()[start..start + FONT_WIDTH as usize * BPP];
            assert!(cell.iter().all(|&b| b == 0));
        }
    }

    #[test]
    fn test_put_string_attach_failure() {
        let r = TextRenderer::builtin();
        let err = r.put_string(&mut RejectingWindow, "hi", 0, 0).unwrap_err();
        assert!(matches!(err, RenderError::Attachment(AttachError::Backend(_))));
    }

    #[test]
    fn test_put_string_onto_too_long_writes_nothing() {
        let r = TextRenderer::builtin().with_max_string(1);
        let mut dest = PixelBuffer::new(40, 40).unwrap();
        let before = dest.clone();
        assert!(matches!(
            r.put_string_onto(&mut dest, "AB", 1, 1, 0x00FF00FF),
            Err(RenderError::StringTooLong { .. })
        ));
        assert_eq!(dest, before);
    }

    #[test]
    fn test_from_config() {
        let config = TextConfig {
            max_string: 8,
            transparent_key: "ffffffff".into(),
            bounds: BoundsPolicy::ExcludeOrigin,
        };
        let r = TextRenderer::from_config(FontAtlas::builtin(), &config);
        assert_eq!(r.max_string(), 8);
        assert_eq!(r.key(), 0xFFFFFFFF);
        assert_eq!(r.bounds(), BoundsPolicy::ExcludeOrigin);
    }
}
