// src/ui/components/button.rs
//! Selectable button element

use embedded_graphics::Drawable as EgDrawable;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};
use embedded_graphics::text::{Alignment as TextAlignment, Baseline, Text, TextStyleBuilder};

use crate::ui::core::{Environment, bounded};
use crate::ui::fonts::text_size;

/// Maximum label length in bytes.
pub const MAX_LABEL_LEN: usize = 32;

/// Horizontal room between the label and the button edge.
const LABEL_PADDING_X_PX: u32 = 8;

/// Vertical room between the label and the button edge.
const LABEL_PADDING_Y_PX: u32 = 4;

/// Smallest auto-sized button, so unlabeled buttons stay visible.
const MIN_WIDTH_PX: u32 = 16;
const MIN_HEIGHT_PX: u32 = 12;

/// Visual state a button is painted in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Normal,
    Selected,
    Disabled,
}

/// Button component carrying an intent
///
/// Every enabled button owns one selection slot. The slot index is the
/// button's position among enabled buttons in document order, so the dial
/// walks buttons top-to-bottom, left-to-right. Activating the slot hands
/// the intent back to the [`Screen`](crate::driver::Screen).
///
/// # Visual Features
/// - Rounded corners (configurable radius)
/// - Separate fills for resting and selected state
/// - Optional label, centered in the button
/// - Dimmed fill and label while disabled
///
/// # Examples
/// ```ignore
/// let button = Button::new("Reset", Intent::Reset)
///     .with_selected_color(COLOR_ACCENT)
///     .with_corner_radius(6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Button<A> {
    label: Option<heapless::String<MAX_LABEL_LEN>>,
    frame: Option<Rectangle>,
    color: Option<Rgb565>,
    selected_color: Option<Rgb565>,
    label_color: Option<Rgb565>,
    corner_radius: Option<u32>,
    point_size: Option<u32>,
    intent: A,
    enabled: bool,
}

impl<A> Button<A> {
    /// Create a labeled button that sizes itself from the label.
    pub fn new(label: &str, intent: A) -> Self {
        Self {
            label: Some(bounded(label)),
            ..Self::unlabeled(intent)
        }
    }

    /// Create a button without a label.
    pub fn unlabeled(intent: A) -> Self {
        Self {
            label: None,
            frame: None,
            color: None,
            selected_color: None,
            label_color: None,
            corner_radius: None,
            point_size: None,
            intent,
            enabled: true,
        }
    }

    pub fn with_frame(mut self, frame: Rectangle) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Fill used while the button is not selected.
    pub fn with_color(mut self, color: Rgb565) -> Self {
        self.color = Some(color);
        self
    }

    /// Fill used while the dial points at this button.
    pub fn with_selected_color(mut self, color: Rgb565) -> Self {
        self.selected_color = Some(color);
        self
    }

    pub fn with_label_color(mut self, color: Rgb565) -> Self {
        self.label_color = Some(color);
        self
    }

    pub fn with_corner_radius(mut self, radius: u32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn with_point_size(mut self, point_size: u32) -> Self {
        self.point_size = Some(point_size);
        self
    }

    /// Enable or disable the button.
    ///
    /// Disabled buttons are drawn dimmed and take no selection slot.
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn intent(&self) -> &A {
        &self.intent
    }

    /// Natural rectangle: the explicit frame, or label size plus padding.
    pub fn measure(&self, env: &Environment<'_>) -> Rectangle {
        if let Some(frame) = self.frame {
            return frame;
        }

        let font = env.fonts.resolve(self.point_size);
        let label = match &self.label {
            Some(label) => text_size(font, label),
            None => Size::zero(),
        };

        let width = (label.width + 2 * LABEL_PADDING_X_PX).max(MIN_WIDTH_PX);
        let height = (label.height + 2 * LABEL_PADDING_Y_PX).max(MIN_HEIGHT_PX);
        Rectangle::new(Point::zero(), Size::new(width, height))
    }

    fn fill_color(&self, state: ButtonState, env: &Environment<'_>) -> Rgb565 {
        let palette = &env.theme.palette;
        match state {
            ButtonState::Normal => self.color.unwrap_or(palette.button),
            ButtonState::Selected => self.selected_color.unwrap_or(palette.button_selected),
            ButtonState::Disabled => palette.button_disabled,
        }
    }

    /// Paint the button into `frame`.
    pub fn draw<D>(
        &self,
        frame: Rectangle,
        state: ButtonState,
        env: &Environment<'_>,
        display: &mut D,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let radius = self.corner_radius.unwrap_or(env.theme.corner_radius);
        RoundedRectangle::with_equal_corners(frame, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(self.fill_color(state, env)))
            .draw(display)?;

        let Some(label) = &self.label else {
            return Ok(());
        };

        let label_color = match state {
            ButtonState::Disabled => env.theme.palette.text_secondary,
            _ => self.label_color.unwrap_or(env.theme.palette.text_primary),
        };
        let character_style = MonoTextStyle::new(env.fonts.resolve(self.point_size), label_color);
        let text_style = TextStyleBuilder::new()
            .alignment(TextAlignment::Center)
            .baseline(Baseline::Middle)
            .build();

        Text::with_text_style(label, frame.center(), character_style, text_style).draw(display)?;

        Ok(())
    }
}
