// src/input.rs
//! Dial and trigger input
//!
//! The dial is an analog potentiometer sampled as a raw integer in
//! `[0, max_raw]`; the trigger is a single digital push button. The mapping
//! from a raw sample to a selection index is deliberately linear: every
//! `max_raw / count` raw units form one bucket.

use embedded_hal::digital::InputPin;

/// Analog source backing the selection dial.
pub trait AnalogInput {
    /// Sample the current raw value.
    fn read_raw(&mut self) -> u16;

    /// Largest value `read_raw` can return.
    fn max_raw(&self) -> u16;
}

/// Map a raw dial sample onto `[0, count - 1]`.
///
/// Computes `floor(raw * count / max_raw)` and clamps it, so `raw == 0`
/// selects the first item and `raw == max_raw` the last. Samples above
/// `max_raw` are treated as `max_raw`.
///
/// Returns `None` when there is nothing to select or the dial has no range.
pub fn map_to_index(raw: u16, max_raw: u16, count: usize) -> Option<usize> {
    if count == 0 || max_raw == 0 {
        return None;
    }

    let raw = u64::from(raw.min(max_raw));
    let index = raw * count as u64 / u64::from(max_raw);
    Some((index as usize).min(count - 1))
}

/// Linear mapping with a dead band around the current bucket.
///
/// When `current` is a valid index and the linear mapping lands in another
/// bucket, the move is only accepted once `raw` is more than `margin` raw
/// units outside the current bucket. A `margin` of 0 behaves exactly like
/// [`map_to_index`].
pub fn map_with_hysteresis(
    raw: u16,
    max_raw: u16,
    count: usize,
    current: Option<usize>,
    margin: u16,
) -> Option<usize> {
    let candidate = map_to_index(raw, max_raw, count)?;

    let Some(current) = current.filter(|&c| c < count && c != candidate) else {
        return Some(candidate);
    };
    if margin == 0 {
        return Some(candidate);
    }

    let (low, high) = bucket_span(current, max_raw, count);
    let raw = u32::from(raw.min(max_raw));
    let margin = u32::from(margin);

    if raw + margin < low || raw >= high + margin {
        Some(candidate)
    } else {
        Some(current)
    }
}

/// Raw range `[low, high)` that maps onto `index`.
fn bucket_span(index: usize, max_raw: u16, count: usize) -> (u32, u32) {
    let max = u64::from(max_raw);
    let count = count as u64;
    let index = index as u64;

    let low = (index * max).div_ceil(count);
    let high = if index + 1 >= count {
        max + 1
    } else {
        ((index + 1) * max).div_ceil(count)
    };

    (low as u32, high as u32)
}

/// Push button wrapper that hides the pin's electrical polarity.
///
/// Buttons wired against a pull-up read low while pressed; set
/// `active_low` for those.
pub struct Trigger<P> {
    pin: P,
    active_low: bool,
}

impl<P: InputPin> Trigger<P> {
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Whether the button is currently held down.
    pub fn is_pressed(&mut self) -> Result<bool, P::Error> {
        if self.active_low {
            self.pin.is_low()
        } else {
            self.pin.is_high()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;

    #[test]
    fn test_mapping_endpoints() {
        for count in 1..=12 {
            assert_eq!(map_to_index(0, 4095, count), Some(0));
            assert_eq!(map_to_index(4095, 4095, count), Some(count - 1));
        }
    }

    #[test]
    fn test_mapping_stays_in_range() {
        let max_raw = 1023;
        for count in 1..=9 {
            for raw in 0..=max_raw {
                let index = map_to_index(raw, max_raw, count).unwrap();
                assert!(index < count, "raw {raw} count {count} gave {index}");
            }
        }
    }

    #[test]
    fn test_mapping_is_linear_buckets() {
        assert_eq!(map_to_index(249, 1000, 4), Some(0));
        assert_eq!(map_to_index(250, 1000, 4), Some(1));
        assert_eq!(map_to_index(500, 1000, 4), Some(2));
        assert_eq!(map_to_index(999, 1000, 4), Some(3));
    }

    #[test]
    fn test_mapping_without_items_or_range() {
        assert_eq!(map_to_index(100, 1000, 0), None);
        assert_eq!(map_to_index(0, 0, 3), None);
    }

    #[test]
    fn test_mapping_clamps_oversized_samples() {
        assert_eq!(map_to_index(u16::MAX, 1000, 3), Some(2));
    }

    #[test]
    fn test_hysteresis_holds_near_boundary() {
        // Buckets of 250 raw units; current selection is bucket 1 = [250, 500).
        assert_eq!(map_with_hysteresis(245, 1000, 4, Some(1), 20), Some(1));
        assert_eq!(map_with_hysteresis(229, 1000, 4, Some(1), 20), Some(0));
        assert_eq!(map_with_hysteresis(505, 1000, 4, Some(1), 20), Some(1));
        assert_eq!(map_with_hysteresis(520, 1000, 4, Some(1), 20), Some(2));
    }

    #[test]
    fn test_zero_margin_matches_linear_mapping() {
        for raw in (0..=1000).step_by(7) {
            assert_eq!(
                map_with_hysteresis(raw, 1000, 5, Some(2), 0),
                map_to_index(raw, 1000, 5)
            );
        }
    }

    #[test]
    fn test_hysteresis_ignores_stale_current() {
        assert_eq!(map_with_hysteresis(0, 1000, 2, Some(7), 50), Some(0));
        assert_eq!(map_with_hysteresis(999, 1000, 2, None, 50), Some(1));
    }

    struct FixedPin(bool);

    impl ErrorType for FixedPin {
        type Error = Infallible;
    }

    impl InputPin for FixedPin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn test_trigger_polarity() {
        assert_eq!(Trigger::new(FixedPin(true), false).is_pressed(), Ok(true));
        assert_eq!(Trigger::new(FixedPin(true), true).is_pressed(), Ok(false));
        assert_eq!(Trigger::new(FixedPin(false), true).is_pressed(), Ok(true));
    }
}
