//! Global theme management

use super::colors::ColorPalette;

/// Default gap between stack children in pixels
pub const DEFAULT_SPACING_PX: u32 = 4;

/// Default button corner radius in pixels
pub const DEFAULT_CORNER_RADIUS_PX: u32 = 4;

/// Ambient styling defaults
///
/// Aggregates the palette with the spacing and corner radius used by
/// elements that do not override them.
///
/// # Examples
///
/// ```ignore
/// let theme = Theme::light().with_spacing(6);
/// let env = Environment::new(Size::new(240, 135), theme, &fonts);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub palette: ColorPalette,
    pub spacing: u32,
    pub corner_radius: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            palette: ColorPalette::dark(),
            spacing: DEFAULT_SPACING_PX,
            corner_radius: DEFAULT_CORNER_RADIUS_PX,
        }
    }

    pub fn light() -> Self {
        Self {
            palette: ColorPalette::light(),
            ..Self::dark()
        }
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_spacing(mut self, spacing: u32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = radius;
        self
    }
}
