//! Desktop stand-ins for the dial, trigger, buzzer and delay.
//!
//! The SDL event loop and the frame driver share the dial position and the
//! pending trigger press through `Rc<Cell<_>>` handles.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin};
use knob_core::feedback::Buzzer;
use knob_core::input::AnalogInput;
use log::debug;

/// Largest raw value the simulated potentiometer reports (10-bit ADC).
pub const DIAL_MAX_RAW: u16 = 1023;

/// Raw units moved per key press or wheel notch.
pub const DIAL_STEP: u16 = 48;

/// Potentiometer position shared with the event loop.
#[derive(Clone, Default)]
pub struct DialHandle(Rc<Cell<u16>>);

impl DialHandle {
    /// Turn the dial by `notches` steps, negative towards zero.
    pub fn turn(&self, notches: i32) {
        let raw = i32::from(self.0.get()) + notches * i32::from(DIAL_STEP);
        self.0.set(raw.clamp(0, i32::from(DIAL_MAX_RAW)) as u16);
    }

    pub fn position(&self) -> u16 {
        self.0.get()
    }
}

/// Analog input backed by a [`DialHandle`].
pub struct SimDial(pub DialHandle);

impl AnalogInput for SimDial {
    fn read_raw(&mut self) -> u16 {
        self.0.position()
    }

    fn max_raw(&self) -> u16 {
        DIAL_MAX_RAW
    }
}

/// Pending trigger press shared with the event loop.
#[derive(Clone, Default)]
pub struct TriggerHandle(Rc<Cell<bool>>);

impl TriggerHandle {
    pub fn press(&self) {
        self.0.set(true);
    }

    /// Consume the pending press, if any.
    fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// Active-low push button.
///
/// A key press is latched and reads as "held" exactly once, after which the
/// button reads as released, so the driver's release wait never blocks the
/// event loop.
pub struct SimTrigger(pub TriggerHandle);

impl ErrorType for SimTrigger {
    type Error = Infallible;
}

impl InputPin for SimTrigger {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.is_low().map(|low| !low)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.take())
    }
}

/// Buzzer that only logs the tones it would play.
pub struct LogBuzzer;

impl Buzzer for LogBuzzer {
    fn set_tone(&mut self, frequency_hz: u32, duty_percent: u8) {
        debug!("Buzzer: {} Hz at {}% duty", frequency_hz, duty_percent);
    }

    fn stop(&mut self) {
        debug!("Buzzer: off");
    }
}

/// Blocking delay on the host thread.
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}
