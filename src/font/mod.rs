//! Bitmap font handling
//!
//! Handles:
//! - Fixed-cell RGBA glyph atlas
//! - Built-in 10x20 ASCII atlas generation
//! - Character to atlas column lookup

pub mod atlas;
mod builtin;
pub mod locator;

pub use atlas::FontAtlas;
pub use locator::{glyph_offset, locate, texoffset, NO_GLYPH};
