// src/ui/components/text.rs
//! Static text element

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text as EgText};

use crate::ui::core::{Environment, bounded};
use crate::ui::fonts::text_size;

/// Maximum text length in bytes; longer strings are truncated.
pub const MAX_TEXT_LEN: usize = 64;

/// Single-line, non-interactive text.
///
/// Without an explicit frame the text sizes itself from the resolved font.
/// With one, the string is drawn at the frame's origin; zero dimensions in
/// the frame fill the containing extent.
///
/// # Examples
/// ```ignore
/// let title: View<Intent> = Text::new("Volume")
///     .with_point_size(14)
///     .with_color(COLOR_ACCENT)
///     .into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    content: heapless::String<MAX_TEXT_LEN>,
    frame: Option<Rectangle>,
    color: Option<Rgb565>,
    point_size: Option<u32>,
}

impl Text {
    pub fn new(content: &str) -> Self {
        Self {
            content: bounded(content),
            frame: None,
            color: None,
            point_size: None,
        }
    }

    pub fn with_frame(mut self, frame: Rectangle) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_point_size(mut self, point_size: u32) -> Self {
        self.point_size = Some(point_size);
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Natural rectangle: the explicit frame, or the measured string at the origin.
    pub fn measure(&self, env: &Environment<'_>) -> Rectangle {
        self.frame.unwrap_or_else(|| {
            let font = env.fonts.resolve(self.point_size);
            Rectangle::new(Point::zero(), text_size(font, &self.content))
        })
    }

    /// Draw the string with its top-left corner at `frame`'s origin.
    pub fn draw<D>(
        &self,
        frame: Rectangle,
        env: &Environment<'_>,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let font = env.fonts.resolve(self.point_size);
        let color = self.color.unwrap_or(env.theme.palette.text_primary);
        let style = MonoTextStyle::new(font, color);

        EgText::with_baseline(&self.content, frame.top_left, style, Baseline::Top)
            .draw(display)?;

        Ok(())
    }
}
