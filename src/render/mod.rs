//! Text rendering
//!
//! Data flows one way: atlas lookup -> glyph blit -> string image ->
//! (window, or) tinted composite onto an existing image.

pub mod blit;
pub mod composite;
pub mod text;

pub use blit::draw_char;
pub use composite::{composite_tinted, BoundsPolicy};
pub use text::TextRenderer;
