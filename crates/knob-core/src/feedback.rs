//! Audible feedback through a PWM buzzer.
//!
//! Chirps are short, blocking tones: the frame loop stops for the tone's
//! duration. They are not a correctness concern; a zero duration or
//! frequency disables the chirp entirely.

use embedded_hal::delay::DelayNs;
use serde::{Deserialize, Serialize};

/// PWM-driven piezo or speaker.
pub trait Buzzer {
    /// Start a square wave at `frequency_hz` with the given duty cycle (0-100).
    fn set_tone(&mut self, frequency_hz: u32, duty_percent: u8);

    /// Silence the output.
    fn stop(&mut self);
}

/// A fixed tone played for a fixed time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u32,
    pub duty_percent: u8,
    pub duration_ms: u32,
}

impl Tone {
    pub const fn new(frequency_hz: u32, duty_percent: u8, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duty_percent,
            duration_ms,
        }
    }

    /// A tone that never sounds.
    pub const fn silent() -> Self {
        Self::new(0, 0, 0)
    }

    pub const fn is_silent(&self) -> bool {
        self.frequency_hz == 0 || self.duration_ms == 0
    }
}

/// Play `tone` and block until it has finished.
pub fn chirp<B, W>(buzzer: &mut B, delay: &mut W, tone: Tone)
where
    B: Buzzer,
    W: DelayNs,
{
    if tone.is_silent() {
        return;
    }

    buzzer.set_tone(tone.frequency_hz, tone.duty_percent.min(100));
    delay.delay_ms(tone.duration_ms);
    buzzer.stop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Debug, PartialEq)]
    enum Call {
        Tone(u32, u8),
        Stop,
        Wait(u32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl Buzzer for Recorder {
        fn set_tone(&mut self, frequency_hz: u32, duty_percent: u8) {
            self.calls.push(Call::Tone(frequency_hz, duty_percent));
        }

        fn stop(&mut self) {
            self.calls.push(Call::Stop);
        }
    }

    struct RecordingDelay<'a>(&'a mut Vec<Call>);

    impl DelayNs for RecordingDelay<'_> {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.0.push(Call::Wait(ms));
        }
    }

    #[test]
    fn test_chirp_plays_waits_and_stops() {
        let mut buzzer = Recorder::default();
        let mut waits = Vec::new();
        chirp(&mut buzzer, &mut RecordingDelay(&mut waits), Tone::new(2000, 50, 15));

        assert_eq!(buzzer.calls, [Call::Tone(2000, 50), Call::Stop]);
        assert_eq!(waits, [Call::Wait(15)]);
    }

    #[test]
    fn test_silent_tone_is_skipped() {
        let mut buzzer = Recorder::default();
        let mut waits = Vec::new();
        chirp(&mut buzzer, &mut RecordingDelay(&mut waits), Tone::new(2000, 50, 0));
        chirp(&mut buzzer, &mut RecordingDelay(&mut waits), Tone::silent());

        assert!(buzzer.calls.is_empty());
        assert!(waits.is_empty());
    }

    #[test]
    fn test_duty_is_capped() {
        let mut buzzer = Recorder::default();
        let mut waits = Vec::new();
        chirp(&mut buzzer, &mut RecordingDelay(&mut waits), Tone::new(440, 250, 1));
        assert_eq!(buzzer.calls[0], Call::Tone(440, 100));
    }
}
