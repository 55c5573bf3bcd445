//! Error types
//!
//! Every failure is returned to the immediate caller. A buffer is either
//! handed back fully populated or dropped before the error surfaces.

use thiserror::Error;

/// Failure reported by a display surface when attaching an image
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttachError {
    /// The window cannot hold more image instances
    #[error("window instance limit reached ({0})")]
    InstanceLimit(usize),
    /// Backend-specific failure
    #[error("{0}")]
    Backend(String),
}

/// Text rendering errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Input string exceeds the configured maximum
    #[error("string too long: {len} bytes (max {max})")]
    StringTooLong { len: usize, max: usize },
    /// Requested image size is outside the supported range
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },
    /// Pixel storage could not be allocated
    #[error("failed to allocate {width}x{height} image")]
    Allocation { width: u32, height: u32 },
    /// The rendered image could not be attached to the window
    #[error("failed to attach image to window: {0}")]
    Attachment(#[from] AttachError),
    /// Atlas bitmap does not match its declared glyph geometry
    #[error("invalid font atlas: {0}")]
    InvalidAtlas(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = RenderError::StringTooLong { len: 513, max: 512 };
        assert_eq!(e.to_string(), "string too long: 513 bytes (max 512)");

        let e: RenderError = AttachError::InstanceLimit(4).into();
        assert_eq!(
            e.to_string(),
            "failed to attach image to window: window instance limit reached (4)"
        );
    }
}
