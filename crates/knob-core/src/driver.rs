//! Frame driver tying the view tree to the hardware
//!
//! Every frame runs the same fixed sequence on a single thread:
//!
//! 1. Sample the dial and map it onto the slots found in the previous frame
//!    (skipped while there are none), chirping when the selection moves.
//! 2. Ask the screen for a fresh view tree and rebuild the selection
//!    registry from it.
//! 3. Clear the frame buffer, paint the tree and flush the changed region to
//!    the display.
//! 4. Poll the trigger. A press with a selected slot chirps, hands the slot's
//!    intent to the screen and blocks until the trigger is released. If the
//!    pin fails during that wait, the press stays latched and later frames
//!    ignore the trigger until it reads released again.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, ErrorKind, InputPin};
use log::{debug, error, info, warn};
use thiserror_no_std::Error;

use crate::config::{FeedbackConfig, InputConfig, UiConfig};
use crate::feedback::{Buzzer, chirp};
use crate::framebuffer::FrameBuffer;
use crate::input::{AnalogInput, Trigger, map_with_hysteresis};
use crate::selection::SelectionRegistry;
use crate::ui::core::Environment;
use crate::ui::fonts::MonoFontBook;
use crate::ui::layout::{collect, paint};
use crate::ui::styling::Theme;
use crate::ui::view::View;

/// Application state rendered by the driver.
pub trait Screen {
    /// Value carried by buttons and handed back on activation.
    type Intent: Clone;

    /// Describe the current state; called once per frame.
    fn view(&self) -> View<Self::Intent>;

    /// React to an activated button.
    fn apply(&mut self, intent: Self::Intent);
}

/// Peripherals owned by the driver.
pub struct Hardware<D, P, T, B, W> {
    pub display: D,
    pub dial: P,
    pub trigger: T,
    pub buzzer: B,
    pub delay: W,
}

/// Errors raised by the collaborators during a frame
#[derive(Debug, Error)]
pub enum DriverError<E: core::fmt::Debug> {
    /// Pushing the frame to the display failed
    #[error("Display flush failed: {0:?}")]
    Display(E),

    /// The trigger pin could not be read
    #[error("Trigger read failed: {0:?}")]
    Trigger(ErrorKind),
}

/// Outcome of one [`FrameDriver::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Selected slot after the frame, `None` when nothing is selectable.
    pub selected: Option<usize>,
    /// Interactive slots discovered in this frame.
    pub slots: usize,
    /// Whether an intent was handed to the screen.
    pub activated: bool,
    /// Region pushed to the display, `None` when nothing changed.
    pub flushed: Option<Rectangle>,
}

/// Owns the peripherals, the frame buffer and the selection registry.
pub struct FrameDriver<S: Screen, D, P, T, B, W> {
    display: D,
    dial: P,
    trigger: Trigger<T>,
    buzzer: B,
    delay: W,
    frame: FrameBuffer,
    fonts: MonoFontBook,
    theme: Theme,
    input: InputConfig,
    feedback: FeedbackConfig,
    registry: SelectionRegistry<S::Intent>,
    /// An activation is waiting for the trigger to read released.
    release_pending: bool,
}

impl<S, D, P, T, B, W> FrameDriver<S, D, P, T, B, W>
where
    S: Screen,
    D: DrawTarget<Color = Rgb565>,
    D::Error: core::fmt::Debug,
    P: AnalogInput,
    T: InputPin,
    B: Buzzer,
    W: DelayNs,
{
    /// Take ownership of the peripherals; the frame buffer matches the display.
    pub fn new(hardware: Hardware<D, P, T, B, W>, config: &UiConfig, theme: Theme) -> Self {
        let size = hardware.display.bounding_box().size;
        info!(
            "Frame driver ready: {}x{} surface, font {} @ {}pt",
            size.width, size.height, config.font.font_path, config.font.point_size
        );

        Self {
            display: hardware.display,
            dial: hardware.dial,
            trigger: Trigger::new(hardware.trigger, config.input.trigger_active_low),
            buzzer: hardware.buzzer,
            delay: hardware.delay,
            frame: FrameBuffer::new(size),
            fonts: MonoFontBook::new(config.font.clone()),
            theme,
            input: config.input,
            feedback: config.feedback,
            registry: SelectionRegistry::new(),
            release_pending: false,
        }
    }

    /// Run one frame for `screen`.
    pub fn step(&mut self, screen: &mut S) -> Result<FrameReport, DriverError<D::Error>> {
        self.sample_dial();

        let view = screen.view();
        collect(&view, &mut self.registry);

        let env = Environment::new(self.frame.size(), self.theme, &self.fonts);
        self.frame.fill(self.theme.palette.background);
        paint(&view, Some(&self.registry), &env, &mut self.frame)
            .unwrap_or_else(|never| match never {});
        let flushed = self
            .frame
            .flush(&mut self.display)
            .map_err(DriverError::Display)?;

        let selected = self.registry.selection();
        let slots = self.registry.len();
        let activated = self.poll_trigger(screen)?;

        Ok(FrameReport {
            selected,
            slots,
            activated,
            flushed,
        })
    }

    /// Drive `screen` forever, logging failed frames.
    pub fn run(&mut self, screen: &mut S) -> ! {
        loop {
            if let Err(e) = self.step(screen) {
                error!("Frame failed: {}", e);
            }
        }
    }

    fn sample_dial(&mut self) {
        let raw = self.dial.read_raw();
        let count = self.registry.len();
        if count == 0 {
            return;
        }

        let current = self.registry.selection();
        let Some(index) =
            map_with_hysteresis(raw, self.dial.max_raw(), count, current, self.input.hysteresis)
        else {
            return;
        };

        if current != Some(index) {
            debug!("Selection moved to {} of {} (raw {})", index, count, raw);
            self.registry.select(index);
            chirp(&mut self.buzzer, &mut self.delay, self.feedback.selection);
        }
    }

    fn poll_trigger(&mut self, screen: &mut S) -> Result<bool, DriverError<D::Error>> {
        let pressed = self.trigger_pressed()?;
        if self.release_pending {
            self.release_pending = pressed;
            return Ok(false);
        }
        if !pressed {
            return Ok(false);
        }
        let Some(intent) = self.registry.current_action().cloned() else {
            return Ok(false);
        };

        info!("Activating slot {}", self.registry.selected_index());
        chirp(&mut self.buzzer, &mut self.delay, self.feedback.activation);
        screen.apply(intent);
        self.wait_for_release();
        Ok(true)
    }

    fn wait_for_release(&mut self) {
        loop {
            match self.trigger.is_pressed() {
                Ok(true) => self.delay.delay_ms(self.input.release_poll_ms),
                Ok(false) => return,
                Err(e) => {
                    warn!("Trigger read failed while awaiting release: {:?}", e.kind());
                    self.release_pending = true;
                    return;
                }
            }
        }
    }

    fn trigger_pressed(&mut self) -> Result<bool, DriverError<D::Error>> {
        self.trigger
            .is_pressed()
            .map_err(|e| DriverError::Trigger(e.kind()))
    }

    pub fn registry(&self) -> &SelectionRegistry<S::Intent> {
        &self.registry
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch palette and spacing; takes effect on the next frame.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
