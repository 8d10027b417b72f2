//! Persisted UI configuration
//!
//! The configuration is a small postcard blob so it can live in flash next to
//! the firmware. Colors are not part of it; they come from the [`Theme`]
//! handed to the driver.
//!
//! [`Theme`]: crate::ui::styling::Theme

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

use crate::feedback::Tone;
use crate::ui::core::bounded;

/// Default glyph source understood by the built-in font book.
pub const DEFAULT_FONT_PATH: &str = "builtin:ascii";

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The stored blob could not be decoded
    #[error("Failed to decode configuration: {0}")]
    Decode(postcard::Error),

    /// The configuration could not be encoded
    #[error("Failed to encode configuration: {0}")]
    Encode(postcard::Error),

    /// Text would be rasterized at zero height
    #[error("Font point size must be non-zero")]
    ZeroPointSize,

    /// Point sizes cannot be converted to pixels
    #[error("Font DPI must be non-zero")]
    ZeroDpi,
}

/// Font selection shared by every text-bearing element.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FontConfig {
    /// Glyph source; the built-in book reads it as a family selector.
    pub font_path: heapless::String<32>,
    /// Default text size in points, overridable per element.
    pub point_size: u32,
    /// Rasterization density of the panel.
    pub dpi: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            font_path: bounded(DEFAULT_FONT_PATH),
            point_size: 10,
            dpi: 72,
        }
    }
}

impl FontConfig {
    pub fn new(font_path: &str, point_size: u32, dpi: u32) -> Self {
        Self {
            font_path: bounded(font_path),
            point_size,
            dpi,
        }
    }

    /// Pixel height for `point_size` at this density, rounded to nearest and
    /// saturating at `u32::MAX`.
    pub fn pixel_height(&self, point_size: u32) -> u32 {
        let pixels = (u64::from(point_size) * u64::from(self.dpi) + 36) / 72;
        u32::try_from(pixels).unwrap_or(u32::MAX)
    }
}

/// Dial and trigger behavior.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    /// The trigger reads low while pressed (pull-up wiring).
    pub trigger_active_low: bool,
    /// Poll interval while waiting for the trigger to be released.
    pub release_poll_ms: u32,
    /// Dead band in raw units around the selected bucket; 0 disables it.
    pub hysteresis: u16,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            trigger_active_low: true,
            release_poll_ms: 10,
            hysteresis: 0,
        }
    }
}

/// Chirps played on selection changes and activations.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackConfig {
    pub selection: Tone,
    pub activation: Tone,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            selection: Tone::new(2_000, 50, 8),
            activation: Tone::new(1_000, 50, 40),
        }
    }
}

/// Complete persisted configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct UiConfig {
    pub font: FontConfig,
    pub input: InputConfig,
    pub feedback: FeedbackConfig,
}

impl UiConfig {
    /// Decode and validate a stored configuration.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode for storage.
    pub fn to_vec(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(ConfigError::Encode)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.font.point_size == 0 {
            return Err(ConfigError::ZeroPointSize);
        }
        if self.font.dpi == 0 {
            return Err(ConfigError::ZeroDpi);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = UiConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.font.font_path.as_str(), DEFAULT_FONT_PATH);
    }

    #[test]
    fn test_stored_config_is_restored() {
        let mut config = UiConfig::default();
        config.font = FontConfig::new("builtin:latin1", 14, 96);
        config.input.hysteresis = 12;
        config.feedback.selection = Tone::silent();

        let bytes = config.to_vec().unwrap();
        let restored = UiConfig::from_bytes(&bytes).unwrap();

        assert_eq!(restored, config);
    }

    #[test]
    fn test_truncated_blob_is_rejected() {
        let bytes = UiConfig::default().to_vec().unwrap();
        let result = UiConfig::from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(result, Err(ConfigError::Decode(_))));
    }

    #[test]
    fn test_zero_sizes_are_rejected() {
        let mut config = UiConfig::default();
        config.font.dpi = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroDpi)));

        config.font = FontConfig::new(DEFAULT_FONT_PATH, 0, 72);
        let bytes = config.to_vec().unwrap();
        assert!(matches!(
            UiConfig::from_bytes(&bytes),
            Err(ConfigError::ZeroPointSize)
        ));
    }

    #[test]
    fn test_pixel_height_scales_with_dpi() {
        assert_eq!(FontConfig::new(DEFAULT_FONT_PATH, 10, 72).pixel_height(10), 10);
        assert_eq!(FontConfig::new(DEFAULT_FONT_PATH, 10, 144).pixel_height(10), 20);
        assert_eq!(FontConfig::new(DEFAULT_FONT_PATH, 10, 96).pixel_height(9), 12);
    }

    #[test]
    fn test_huge_sizes_saturate() {
        let font = FontConfig::new(DEFAULT_FONT_PATH, 100_000, 100_000);
        assert_eq!(font.pixel_height(100_000), 138_888_889);
        assert_eq!(font.pixel_height(u32::MAX), u32::MAX);

        let mut config = UiConfig::default();
        config.font = font;
        let restored = UiConfig::from_bytes(&config.to_vec().unwrap()).unwrap();
        let fonts = crate::ui::fonts::MonoFontBook::new(restored.font);
        assert_eq!(
            crate::ui::fonts::FontResolver::resolve(&fonts, None).character_size.height,
            20
        );
    }

    #[test]
    fn test_long_font_path_is_truncated() {
        let path = "builtin:ascii/with/a/path/that/is/far/too/long";
        let config = FontConfig::new(path, 10, 72);
        assert_eq!(config.font_path.len(), 32);
        assert!(path.starts_with(config.font_path.as_str()));
    }
}
