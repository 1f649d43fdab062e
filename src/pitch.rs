//! Musical pitch references and playable frequency spans.
//!
//! A theremin voice does not play discrete notes; it glides over a
//! continuous span of frequencies. `Tone` anchors the endpoints of that
//! span to familiar pitches, and `FrequencyRange` does the linear
//! interpolation between them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A fixed musical pitch reference.
///
/// Frequencies follow the standard equal-temperament table
/// (<https://pages.mtu.edu/~suits/notefreqs.html>).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    A4,
    A5,
    A6,
}

impl Tone {
    /// Frequency in Hz. Constant for the process lifetime.
    pub fn frequency(self) -> f32 {
        match self {
            Tone::A4 => 440.0,
            Tone::A5 => 880.0,
            Tone::A6 => 1760.0,
        }
    }
}

/// A playable pitch span, owned by exactly one voice.
///
/// Invariant: `min_hz < max_hz`, checked at construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRange {
    min_hz: f32,
    max_hz: f32,
}

impl FrequencyRange {
    /// Build a range from raw endpoints in Hz.
    ///
    /// Returns `None` unless `0 < min_hz < max_hz`.
    pub fn new(min_hz: f32, max_hz: f32) -> Option<Self> {
        if min_hz > 0.0 && min_hz < max_hz {
            Some(Self { min_hz, max_hz })
        } else {
            None
        }
    }

    /// Build a range spanning two tones, low to high.
    pub fn between(low: Tone, high: Tone) -> Option<Self> {
        Self::new(low.frequency(), high.frequency())
    }

    pub fn min_hz(&self) -> f32 {
        self.min_hz
    }

    pub fn max_hz(&self) -> f32 {
        self.max_hz
    }

    /// Linear interpolation across the span.
    ///
    /// `t` must already be in [0, 1]; the endpoints map exactly to
    /// `min_hz` and `max_hz`.
    pub fn value_at(&self, t: f32) -> f32 {
        self.min_hz + (self.max_hz - self.min_hz) * t
    }
}

impl Default for FrequencyRange {
    /// One octave starting at A4, matching the single-voice default.
    fn default() -> Self {
        Self {
            min_hz: Tone::A4.frequency(),
            max_hz: Tone::A5.frequency(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_frequencies_are_fixed() {
        assert_eq!(Tone::A4.frequency(), 440.0);
        assert_eq!(Tone::A5.frequency(), 880.0);
        assert_eq!(Tone::A6.frequency(), 1760.0);
        // Repeated calls return the same value
        assert_eq!(Tone::A4.frequency(), Tone::A4.frequency());
    }

    #[test]
    fn range_endpoints_are_exact() {
        let range = FrequencyRange::between(Tone::A4, Tone::A5).unwrap();
        assert_eq!(range.value_at(0.0), 440.0);
        assert_eq!(range.value_at(1.0), 880.0);
    }

    #[test]
    fn range_interpolates_linearly() {
        let range = FrequencyRange::new(440.0, 880.0).unwrap();
        assert_eq!(range.value_at(0.75), 770.0);
    }

    #[test]
    fn inverted_or_degenerate_ranges_are_rejected() {
        assert!(FrequencyRange::new(880.0, 440.0).is_none());
        assert!(FrequencyRange::new(440.0, 440.0).is_none());
        assert!(FrequencyRange::new(0.0, 440.0).is_none());
        assert!(FrequencyRange::between(Tone::A6, Tone::A4).is_none());
    }
}
