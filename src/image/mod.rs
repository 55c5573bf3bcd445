//! RGBA pixel buffers
//!
//! An image is a row-major `Vec<u8>` with 4 bytes per pixel. Storage is
//! allocated fallibly and zeroed, so every pixel reads back as transparent
//! black until something is drawn.

use crate::constants::{BPP, MAX_IMAGE_DIMENSION};
use crate::error::{RenderError, Result};
use crate::utils::color::unpack_rgba;
use log::trace;

/// Owned RGBA image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Image width (pixels)
    width: u32,
    /// Image height (pixels)
    height: u32,
    /// RGBA pixel data (row-major, 4 bytes/pixel)
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zeroed image
    ///
    /// Zero-sized images are allowed. Fails if either side exceeds
    /// `MAX_IMAGE_DIMENSION` or the allocation itself fails.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::byte_len(width, height)?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| RenderError::Allocation { width, height })?;
        pixels.resize(len, 0);

        trace!("Image allocated: {}x{} ({} bytes)", width, height, len);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap existing RGBA data
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        if pixels.len() != len {
            return Err(RenderError::InvalidDimensions {
                width: width as u64,
                height: height as u64,
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
            return Err(RenderError::InvalidDimensions {
                width: width as u64,
                height: height as u64,
            });
        }
        // Both sides are capped at i16::MAX, so this cannot overflow
        Ok(width as usize * height as usize * BPP)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Consume the image and return its RGBA bytes
    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }

    /// Byte index of pixel (x, y), or None if outside the image
    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y as usize * self.width as usize + x as usize) * BPP)
        } else {
            None
        }
    }

    /// Read a pixel as packed RGBA
    ///
    /// Out-of-bounds coordinates yield None rather than a color value.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        let i = self.index(x, y)?;
        let p = &self.pixels[i..i + BPP];
        Some(u32::from_be_bytes([p[0], p[1], p[2], p[3]]))
    }

    /// Write a packed RGBA pixel. Out-of-bounds writes are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: u32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i..i + BPP].copy_from_slice(&unpack_rgba(color));
        }
    }

    /// Fill the whole image with one color
    pub fn fill(&mut self, color: u32) {
        let rgba = unpack_rgba(color);
        for px in self.pixels.chunks_exact_mut(BPP) {
            px.copy_from_slice(&rgba);
        }
    }

    /// Bytes of row `y`
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * BPP;
        let start = y as usize * stride;
        Some(&self.pixels[start..start + stride])
    }

    /// Mutable bytes of row `y`
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * BPP;
        let start = y as usize * stride;
        Some(&mut self.pixels[start..start + stride])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let img = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(img.pixels().len(), 3 * 2 * 4);
        assert!(img.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_sized() {
        let img = PixelBuffer::new(0, 20).unwrap();
        assert_eq!(img.width(), 0);
        assert!(img.pixels().is_empty());
        assert_eq!(img.row(0), Some(&[][..]));
    }

    #[test]
    fn test_dimension_limit() {
        assert!(matches!(
            PixelBuffer::new(MAX_IMAGE_DIMENSION + 1, 1),
            Err(RenderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_get_put_pixel() {
        let mut img = PixelBuffer::new(4, 4).unwrap();
        img.put_pixel(1, 2, 0x11223344);
        assert_eq!(img.get_pixel(1, 2), Some(0x11223344));
        assert_eq!(img.get_pixel(2, 1), Some(0));

        let i = (2 * 4 + 1) * 4;
        assert_eq!(&img.pixels()[i..i + 4], &[0x11, 0x22, 0x33, 0x44]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut img = PixelBuffer::new(4, 4).unwrap();
        // Read past the edge is None, not a sentinel color
        assert_eq!(img.get_pixel(4, 0), None);
        assert_eq!(img.get_pixel(0, 4), None);

        let before = img.clone();
        img.put_pixel(4, 4, 0xFFFFFFFF);
        assert_eq!(img, before);
    }

    #[test]
    fn test_from_rgba_length_check() {
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(PixelBuffer::from_rgba(2, 2, vec![0; 15]).is_err());
    }

    #[test]
    fn test_raw_access() {
        let mut img = PixelBuffer::new(2, 1).unwrap();
        img.pixels_mut()[4..8].copy_from_slice(&[1, 2, 3, 4]);
        assert_eq!(img.get_pixel(1, 0), Some(0x01020304));
        assert_eq!(img.into_rgba(), vec![0, 0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_fill() {
        let mut img = PixelBuffer::new(2, 2).unwrap();
        img.fill(0xFFFFFFFF);
        assert!(img.pixels().iter().all(|&b| b == 0xFF));
    }
}
