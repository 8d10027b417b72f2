//! Font resolution for text-bearing elements
//!
//! Elements only carry an optional point-size override; the actual glyph
//! source comes from the ambient [`FontResolver`].

use embedded_graphics::mono_font::{MonoFont, ascii, iso_8859_1};
use embedded_graphics::prelude::*;
use log::warn;

use crate::config::FontConfig;

/// Resolves the font used to rasterize text.
pub trait FontResolver {
    /// Font for `point_size`, or for the configured default size when `None`.
    fn resolve(&self, point_size: Option<u32>) -> &'static MonoFont<'static>;
}

/// Glyph families compiled into the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Ascii,
    Latin1,
}

impl FontFamily {
    /// Parse a `font_path` selector such as `builtin:latin1`.
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "builtin:ascii" => Some(Self::Ascii),
            "builtin:latin1" => Some(Self::Latin1),
            _ => None,
        }
    }

    fn fonts(self) -> &'static [&'static MonoFont<'static>] {
        match self {
            Self::Ascii => &ASCII_FONTS,
            Self::Latin1 => &LATIN1_FONTS,
        }
    }
}

// Ordered by glyph height.
const ASCII_FONTS: [&MonoFont<'static>; 11] = [
    &ascii::FONT_4X6,
    &ascii::FONT_5X7,
    &ascii::FONT_5X8,
    &ascii::FONT_6X9,
    &ascii::FONT_6X10,
    &ascii::FONT_6X12,
    &ascii::FONT_6X13,
    &ascii::FONT_7X14,
    &ascii::FONT_9X15,
    &ascii::FONT_9X18,
    &ascii::FONT_10X20,
];

const LATIN1_FONTS: [&MonoFont<'static>; 11] = [
    &iso_8859_1::FONT_4X6,
    &iso_8859_1::FONT_5X7,
    &iso_8859_1::FONT_5X8,
    &iso_8859_1::FONT_6X9,
    &iso_8859_1::FONT_6X10,
    &iso_8859_1::FONT_6X12,
    &iso_8859_1::FONT_6X13,
    &iso_8859_1::FONT_7X14,
    &iso_8859_1::FONT_9X15,
    &iso_8859_1::FONT_9X18,
    &iso_8859_1::FONT_10X20,
];

/// Resolver backed by the `embedded-graphics` mono fonts.
///
/// Point sizes are converted to a pixel height with the configured DPI and
/// the tallest font that still fits is chosen; sizes below the smallest font
/// get the smallest font.
#[derive(Debug, Clone)]
pub struct MonoFontBook {
    config: FontConfig,
    family: FontFamily,
}

impl MonoFontBook {
    pub fn new(config: FontConfig) -> Self {
        let family = FontFamily::from_path(&config.font_path).unwrap_or_else(|| {
            warn!(
                "Unknown font source '{}', falling back to builtin:ascii",
                config.font_path
            );
            FontFamily::Ascii
        });

        Self { config, family }
    }

    pub fn family(&self) -> FontFamily {
        self.family
    }
}

impl FontResolver for MonoFontBook {
    fn resolve(&self, point_size: Option<u32>) -> &'static MonoFont<'static> {
        let pixels = self
            .config
            .pixel_height(point_size.unwrap_or(self.config.point_size));
        let fonts = self.family.fonts();

        fonts
            .iter()
            .rev()
            .find(|font| font.character_size.height <= pixels)
            .copied()
            .unwrap_or(fonts[0])
    }
}

/// Extent of `text` set in `font` on a single line.
pub fn text_size(font: &MonoFont<'_>, text: &str) -> Size {
    let glyphs = text.chars().count() as u32;
    if glyphs == 0 {
        return Size::new(0, font.character_size.height);
    }

    let width = glyphs * font.character_size.width + (glyphs - 1) * font.character_spacing;
    Size::new(width, font.character_size.height)
}
