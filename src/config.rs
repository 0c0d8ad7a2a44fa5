//! Configuration file support
//!
//! Loads settings from ~/.mdhighlight.conf (or %USERPROFILE%\.mdhighlight.conf
//! on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # mdhighlight configuration
//! font-size = 14
//! full-block-quote = true
//! heading-color = #024596
//! ```

use std::fs;
use std::path::PathBuf;

use crate::error::{HighlightError, Result};
use crate::style::Color;

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base font point size the heading scales multiply
    pub font_size: f32,
    /// Style whole block-quote lines instead of only the markers
    pub full_block_quote: bool,
    /// Override for the heading foreground color
    pub heading_color: Option<Color>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_size: 12.0,
            full_block_quote: false,
            heading_color: None,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".mdhighlight.conf"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".mdhighlight.conf"))
        }
    }

    /// Load the configuration, falling back to defaults when no file
    /// exists.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse key=value content. Unknown keys are ignored; malformed
    /// values are errors.
    pub fn parse(content: &str) -> Result<Self> {
        let mut config = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            match key {
                "font-size" => {
                    config.font_size = value.parse().map_err(|_| HighlightError::Config {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
                }
                "full-block-quote" => {
                    config.full_block_quote =
                        value.parse().map_err(|_| HighlightError::Config {
                            key: key.to_string(),
                            value: value.to_string(),
                        })?;
                }
                "heading-color" => {
                    let color = Color::from_hex(value)
                        .ok_or_else(|| HighlightError::InvalidColor(value.to_string()))?;
                    config.heading_color = Some(color);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
