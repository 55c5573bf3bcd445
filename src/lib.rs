//! bmtext - fixed-width bitmap text on RGBA pixel buffers
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────┐   ┌──────────┐   ┌────────────┐
//! │  FontAtlas   │ → │ locator  │ → │ draw_char│ → │ rasterize  │
//! └──────────────┘   └──────────┘   └──────────┘   └─────┬──────┘
//!                                                        │
//!                           ┌────────────────────────────┴───┐
//!                           ↓                                ↓
//!                  Window::attach (put_string)   composite_tinted (put_string_onto)
//! ```
//!
//! ```no_run
//! use bmtext::{Canvas, TextRenderer};
//!
//! let renderer = TextRenderer::builtin();
//! let mut canvas = Canvas::new(320, 40, 0x000000ff)?;
//! renderer.put_string(&mut canvas, "Hello", 4, 4)?;
//! renderer.put_string_onto(canvas.frame_mut(), "world", 4, 20, 0x00ff00ff)?;
//! # Ok::<(), bmtext::RenderError>(())
//! ```

pub mod config;
pub mod constants;
pub mod display;
pub mod error;
pub mod font;
pub mod image;
pub mod render;
pub mod utils;

pub use display::{Canvas, Window};
pub use error::{AttachError, RenderError};
pub use font::FontAtlas;
pub use image::PixelBuffer;
pub use render::{BoundsPolicy, TextRenderer};
