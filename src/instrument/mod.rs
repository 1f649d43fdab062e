//! Instrument variants: how resolved hand positions become sound.
//!
//! Both variants implement `HandsListener`, the single seam between the
//! perception side and the audio side. The dual-voice instrument splits
//! the preview in half and gives each hand its own pitch range; the
//! single-voice instrument follows the first hand only.

pub mod mapper;
pub mod voice;

pub use mapper::{assign_sides, position_multiplier, PreviewLayout, SideAssignment};
pub use voice::Voice;

use crate::engine::{AudioBackend, BackendError};
use crate::perception::FrameResult;
use crate::pitch::{FrequencyRange, Tone};

/// Receiver of per-frame hand updates.
///
/// Silence is the universal fallback: an empty frame stops every voice,
/// and each frame fully determines which voices sound.
pub trait HandsListener {
    fn on_hands_updated(&mut self, frame: &FrameResult) -> Result<(), BackendError>;
}

/// Two-voice theremin: left and right halves of the preview each steer
/// their own voice.
pub struct DualVoiceInstrument<B: AudioBackend> {
    left: Voice<B>,
    right: Voice<B>,
    layout: PreviewLayout,
}

impl<B: AudioBackend + Clone> DualVoiceInstrument<B> {
    /// Default pitch layout: left hand spans A4..A5, right hand A5..A6.
    pub fn new(backend: B) -> Self {
        let left_range = FrequencyRange::between(Tone::A4, Tone::A5).expect("A4 < A5");
        let right_range = FrequencyRange::between(Tone::A5, Tone::A6).expect("A5 < A6");
        Self::with_ranges(backend, left_range, right_range)
    }

    pub fn with_ranges(backend: B, left: FrequencyRange, right: FrequencyRange) -> Self {
        Self {
            left: Voice::new("left", left, backend.clone()),
            right: Voice::new("right", right, backend),
            layout: PreviewLayout::default(),
        }
    }
}

impl<B: AudioBackend> DualVoiceInstrument<B> {
    pub fn with_layout(mut self, layout: PreviewLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn left(&self) -> &Voice<B> {
        &self.left
    }

    pub fn right(&self) -> &Voice<B> {
        &self.right
    }

    pub fn left_mut(&mut self) -> &mut Voice<B> {
        &mut self.left
    }

    pub fn right_mut(&mut self) -> &mut Voice<B> {
        &mut self.right
    }

    /// Silence both voices immediately.
    pub fn silence(&mut self) {
        self.left.stop();
        self.right.stop();
    }
}

impl<B: AudioBackend> HandsListener for DualVoiceInstrument<B> {
    fn on_hands_updated(&mut self, frame: &FrameResult) -> Result<(), BackendError> {
        let assignment = assign_sides(frame, &self.layout);

        match assignment.left {
            Some(multiplier) => self.left.play(multiplier)?,
            None => self.left.stop(),
        }
        match assignment.right {
            Some(multiplier) => self.right.play(multiplier)?,
            None => self.right.stop(),
        }
        Ok(())
    }
}

/// One-voice theremin: the first detected hand drives the whole pitch
/// span; any further hands are ignored for audio purposes.
pub struct SingleVoiceInstrument<B: AudioBackend> {
    voice: Voice<B>,
}

impl<B: AudioBackend> SingleVoiceInstrument<B> {
    pub fn new(backend: B) -> Self {
        Self::with_range(backend, FrequencyRange::default())
    }

    pub fn with_range(backend: B, range: FrequencyRange) -> Self {
        Self {
            voice: Voice::new("primary", range, backend),
        }
    }

    pub fn voice(&self) -> &Voice<B> {
        &self.voice
    }

    pub fn voice_mut(&mut self) -> &mut Voice<B> {
        &mut self.voice
    }
}

impl<B: AudioBackend> HandsListener for SingleVoiceInstrument<B> {
    fn on_hands_updated(&mut self, frame: &FrameResult) -> Result<(), BackendError> {
        match frame.points().first() {
            Some(point) => self.voice.play(position_multiplier(point)),
            None => {
                self.voice.stop();
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NullBackend;
    use crate::perception::HandPoint;

    fn frame(xs: &[f32]) -> FrameResult {
        xs.iter()
            .map(|&x| HandPoint { x, y: 0.5 })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn default_ranges_span_a4_a5_and_a5_a6() {
        let instrument = DualVoiceInstrument::new(NullBackend::new());
        assert_eq!(instrument.left().range().min_hz(), 440.0);
        assert_eq!(instrument.left().range().max_hz(), 880.0);
        assert_eq!(instrument.right().range().min_hz(), 880.0);
        assert_eq!(instrument.right().range().max_hz(), 1760.0);
    }

    #[test]
    fn empty_frame_silences_both_voices() {
        let backend = NullBackend::new();
        let mut instrument = DualVoiceInstrument::new(backend.clone());

        instrument.on_hands_updated(&frame(&[0.2, 0.8])).unwrap();
        assert!(instrument.left().is_active());
        assert!(instrument.right().is_active());

        instrument.on_hands_updated(&frame(&[])).unwrap();
        assert!(!instrument.left().is_active());
        assert!(!instrument.right().is_active());
        assert_eq!(backend.live_streams(), 0);
    }

    #[test]
    fn one_hand_stops_the_unassigned_voice() {
        let backend = NullBackend::new();
        let mut instrument = DualVoiceInstrument::new(backend.clone());
        instrument.on_hands_updated(&frame(&[0.2, 0.8])).unwrap();

        // Hand leaves the right half; only the left voice keeps sounding.
        instrument.on_hands_updated(&frame(&[0.25])).unwrap();
        assert!(instrument.left().is_active());
        assert!(!instrument.right().is_active());
    }

    #[test]
    fn same_side_collision_keeps_first_hand_and_silences_the_other_voice() {
        let backend = NullBackend::new();
        let mut instrument = DualVoiceInstrument::new(backend);

        instrument.on_hands_updated(&frame(&[0.2, 0.3])).unwrap();
        assert!(instrument.left().is_active());
        assert_eq!(instrument.left().target_frequency(), 440.0 + 440.0 * 0.8);
        assert!(!instrument.right().is_active());
    }

    #[test]
    fn single_voice_follows_the_first_hand_only() {
        let backend = NullBackend::new();
        let mut instrument = SingleVoiceInstrument::new(backend);

        instrument.on_hands_updated(&frame(&[0.25, 0.9])).unwrap();
        assert!(instrument.voice().is_active());
        assert_eq!(instrument.voice().target_frequency(), 440.0 + 440.0 * 0.75);

        instrument.on_hands_updated(&frame(&[])).unwrap();
        assert!(!instrument.voice().is_active());
    }
}
