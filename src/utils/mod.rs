//! Utility functions shared across bmtext
//!
//! Common helpers that don't fit in specialized modules.

pub mod color;

pub use color::{format_hex_rgba, pack_rgba, parse_hex_rgba, unpack_rgba};
