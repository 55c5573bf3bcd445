//! Configuration file management
//!
//! Loads TOML configuration files and provides rendering settings.
//! Default config path: ~/.config/bmtext/config.toml

use crate::constants::{CLEAR, MAX_STRING_LEN};
use crate::render::BoundsPolicy;
use crate::utils::color::{format_hex_rgba, parse_hex_rgba};
use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text rendering settings
    pub text: TextConfig,
    /// Output settings (demo window and PNG export)
    pub output: OutputConfig,
}

/// Text rendering settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Longest string accepted by the renderer (bytes)
    pub max_string: usize,
    /// Color treated as transparent when compositing (RRGGBBAA)
    pub transparent_key: String,
    /// Destination bounds check: "half-open" or "exclude-origin"
    pub bounds: BoundsPolicy,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Window width (pixels)
    pub width: u32,
    /// Window height (pixels)
    pub height: u32,
    /// Window background color (RRGGBBAA)
    pub background: String,
    /// Tint for composited text (RRGGBBAA)
    pub tint: String,
    /// Directory for rendered PNG files
    pub dir: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            max_string: MAX_STRING_LEN,
            transparent_key: "00000000".to_string(),
            bounds: BoundsPolicy::HalfOpen,
        }
    }
}

impl TextConfig {
    /// Transparency key as packed RGBA (falls back to transparent black)
    pub fn key(&self) -> u32 {
        parse_hex_rgba(&self.transparent_key).unwrap_or_else(|| {
            warn!(
                "Invalid transparent_key '{}', using 00000000",
                self.transparent_key
            );
            CLEAR
        })
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 120,
            background: "202020ff".to_string(),
            tint: "00ff00ff".to_string(),
            dir: ".".to_string(),
        }
    }
}

impl OutputConfig {
    const DEFAULT_BACKGROUND: u32 = 0x202020FF;
    const DEFAULT_TINT: u32 = 0x00FF00FF;

    /// Background as packed RGBA (falls back to 202020ff)
    pub fn background_rgba(&self) -> u32 {
        parse_color_or(&self.background, "background", Self::DEFAULT_BACKGROUND)
    }

    /// Tint as packed RGBA (falls back to 00ff00ff)
    pub fn tint_rgba(&self) -> u32 {
        parse_color_or(&self.tint, "tint", Self::DEFAULT_TINT)
    }
}

/// Parse a config color, warning and using `default` on invalid input
fn parse_color_or(hex: &str, field: &str, default: u32) -> u32 {
    parse_hex_rgba(hex).unwrap_or_else(|| {
        warn!(
            "Invalid {} '{}', using {}",
            field,
            hex,
            format_hex_rgba(default)
        );
        default
    })
}

impl Config {
    /// Get the path that would be used for loading config
    /// Returns None if using built-in defaults
    pub fn config_path() -> Option<PathBuf> {
        // 1. BMTEXT_CONFIG environment variable
        if let Ok(path) = std::env::var("BMTEXT_CONFIG") {
            let p = Path::new(&path);
            if p.exists() {
                return Some(p.to_path_buf());
            }
        }

        // 2. User config: ~/.config/bmtext/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("bmtext").join("config.toml");
            if config_path.exists() {
                return Some(config_path);
            }
        }

        None
    }

    /// Load configuration with priority:
    /// 1. BMTEXT_CONFIG environment variable
    /// 2. ~/.config/bmtext/config.toml (user config)
    /// 3. Built-in defaults
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            match Self::load_from_file(&path) {
                Ok(config) => {
                    info!("Loaded config: {}", path.display());
                    return config;
                }
                Err(e) => {
                    warn!("Failed to load config {}: {}", path.display(), e);
                }
            }
        }
        info!("Using built-in default config");
        Self::default()
    }

    /// Load settings from specified path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Serialize to TOML (for template generation)
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
