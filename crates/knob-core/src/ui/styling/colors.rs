//! Color definitions and palette management
//!
//! All colors are RGB565, the native format of the small SPI panels this
//! toolkit targets. To convert from 8-bit RGB: R>>3, G>>2, B>>3

use embedded_graphics::pixelcolor::Rgb565;

// ============================================================================
// Base Colors
// ============================================================================

/// Primary background color - very dark gray-blue
pub const COLOR_BACKGROUND: Rgb565 = Rgb565::new(18 >> 3, 23 >> 2, 24 >> 3);

/// Resting button fill - slightly lighter than background
pub const COLOR_SURFACE: Rgb565 = Rgb565::new(43 >> 3, 55 >> 2, 57 >> 3);

/// Selection highlight - bright teal-green
pub const COLOR_ACCENT: Rgb565 = Rgb565::new(95 >> 3, 185 >> 2, 141 >> 3);

/// Disabled button fill
pub const COLOR_DISABLED: Rgb565 = Rgb565::new(26 >> 3, 32 >> 2, 33 >> 3);

// ============================================================================
// Text Colors
// ============================================================================

/// Pure white - maximum brightness in RGB565
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Light gray - for secondary text
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(21, 42, 21);

/// Dark gray - for text on light backgrounds
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 20, 10);

// ============================================================================
// Color Palette
// ============================================================================

/// The colors every element falls back to when it has no override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Screen clear color for every frame
    pub background: Rgb565,

    /// Default text color
    pub text_primary: Rgb565,

    /// Label color on disabled buttons
    pub text_secondary: Rgb565,

    /// Button fill when not selected
    pub button: Rgb565,

    /// Button fill when the dial points at it
    pub button_selected: Rgb565,

    /// Button fill when disabled
    pub button_disabled: Rgb565,
}

impl Default for ColorPalette {
    /// Returns the default dark palette
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorPalette {
    /// Light text on dark backgrounds
    pub fn dark() -> Self {
        Self {
            background: COLOR_BACKGROUND,
            text_primary: WHITE,
            text_secondary: LIGHT_GRAY,
            button: COLOR_SURFACE,
            button_selected: COLOR_ACCENT,
            button_disabled: COLOR_DISABLED,
        }
    }

    /// Dark text on light backgrounds, for transflective panels in daylight
    pub fn light() -> Self {
        Self {
            background: WHITE,
            text_primary: COLOR_BACKGROUND,
            text_secondary: DARK_GRAY,
            button: LIGHT_GRAY,
            button_selected: COLOR_ACCENT,
            button_disabled: Rgb565::new(26, 52, 26),
        }
    }
}
