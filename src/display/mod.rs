//! Display surfaces
//!
//! A [`Window`] accepts finished images at a position. [`Canvas`] is the
//! in-memory implementation: attached images are drawn straight into a
//! frame buffer that can be read back or saved.

use crate::constants::BPP;
use crate::error::AttachError;
use crate::image::PixelBuffer;
use crate::render::composite::BoundsPolicy;
use log::debug;

/// Something images can be attached to
pub trait Window {
    /// Show `image` with its top-left corner at (x, y)
    ///
    /// Returns the index of the new instance.
    fn attach(&mut self, image: &PixelBuffer, x: i32, y: i32) -> Result<usize, AttachError>;
}

/// Position and size of an attached image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instance {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// In-memory window
///
/// Attached images are alpha-keyed onto the frame: pixels with zero alpha
/// are skipped, everything else replaces the frame pixel.
pub struct Canvas {
    frame: PixelBuffer,
    instances: Vec<Instance>,
    max_instances: usize,
}

impl Canvas {
    /// Default instance limit
    pub const DEFAULT_MAX_INSTANCES: usize = 256;

    pub fn new(width: u32, height: u32, background: u32) -> crate::error::Result<Self> {
        let mut frame = PixelBuffer::new(width, height)?;
        frame.fill(background);
        debug!("Canvas created: {}x{}", width, height);
        Ok(Self {
            frame,
            instances: Vec::new(),
            max_instances: Self::DEFAULT_MAX_INSTANCES,
        })
    }

    pub fn with_max_instances(mut self, max: usize) -> Self {
        self.max_instances = max;
        self
    }

    pub fn frame(&self) -> &PixelBuffer {
        &self.frame
    }

    /// Frame for direct drawing (e.g. compositing text onto it)
    pub fn frame_mut(&mut self) -> &mut PixelBuffer {
        &mut self.frame
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }
}

impl Window for Canvas {
    fn attach(&mut self, image: &PixelBuffer, x: i32, y: i32) -> Result<usize, AttachError> {
        if self.instances.len() >= self.max_instances {
            return Err(AttachError::InstanceLimit(self.max_instances));
        }

        let (fw, fh) = (self.frame.width(), self.frame.height());
        for j in 0..image.height() {
            let fy = y as i64 + j as i64;
            for i in 0..image.width() {
                let fx = x as i64 + i as i64;
                if !BoundsPolicy::HalfOpen.accepts(fx, fy, fw, fh) {
                    continue;
                }
                if let Some(color) = image.get_pixel(i, j) {
                    if color.to_be_bytes()[BPP - 1] != 0 {
                        self.frame.put_pixel(fx as u32, fy as u32, color);
                    }
                }
            }
        }

        self.instances.push(Instance {
            x,
            y,
            width: image.width(),
            height: image.height(),
        });
        debug!(
            "Image attached: {}x{} at ({}, {})",
            image.width(),
            image.height(),
            x,
            y
        );
        Ok(self.instances.len() - 1)
    }
}
