//! Styling system for UI elements
//!
//! - [`colors`] - Color constants and palette management
//! - [`theme`] - Theme combining the palette with default spacing and radii
//!
//! Every per-element override (`with_color`, `with_spacing`, ...) falls back
//! to the ambient [`Theme`] when it is not set.

pub mod colors;
pub mod theme;

pub use colors::{
    COLOR_ACCENT, COLOR_BACKGROUND, COLOR_DISABLED, COLOR_SURFACE, ColorPalette, DARK_GRAY,
    LIGHT_GRAY, WHITE,
};
pub use theme::Theme;
