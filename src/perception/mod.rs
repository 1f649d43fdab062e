//! Bridge from raw hand-landmark observations to per-frame hand points.
//!
//! The perception oracle (camera + landmark inference, external to this
//! crate) hands over zero or more `HandObservation`s per frame, each with
//! per-landmark confidence. The bridge filters them, flips the vertical
//! axis into capture-device orientation, and emits an ordered
//! `FrameResult` for the instrument to consume. A failed frame resolves
//! to an empty result: one bad frame silences the voices for that frame
//! instead of propagating an error up.

use std::fmt;

/// Landmarks below or at this confidence are discarded (strict `>`).
pub const MIN_LANDMARK_CONFIDENCE: f32 = 0.3;

/// One tracked landmark in normalized [0,1]×[0,1] sensor space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPoint {
    pub x: f32,
    pub y: f32,
    /// Oracle confidence in [0,1].
    pub confidence: f32,
}

/// One detected hand: the two landmarks the instrument cares about.
///
/// Ephemeral; produced and consumed within a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandObservation {
    pub index_tip: LandmarkPoint,
    pub thumb_tip: LandmarkPoint,
}

/// A resolved hand position in normalized sensor space, vertical axis
/// already flipped to capture-device orientation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandPoint {
    pub x: f32,
    pub y: f32,
}

/// Ordered hand positions for a single frame.
///
/// Order is the oracle's observation order, never sorted by position; the
/// instrument's side-assignment tie-break depends on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameResult {
    points: Vec<HandPoint>,
}

impl FrameResult {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[HandPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<HandPoint>> for FrameResult {
    fn from(points: Vec<HandPoint>) -> Self {
        Self { points }
    }
}

/// Resolve one frame's worth of raw observations.
///
/// An oracle failure yields an empty result (fail-soft); otherwise each
/// observation contributes at most one point, in observation order.
pub fn resolve_frame<E: fmt::Display>(
    outcome: Result<&[HandObservation], E>,
) -> FrameResult {
    let observations = match outcome {
        Ok(observations) => observations,
        Err(err) => {
            log::warn!("hand inference failed, silencing frame: {err}");
            return FrameResult::empty();
        }
    };

    observations
        .iter()
        .filter_map(point_for_observation)
        .collect::<Vec<_>>()
        .into()
}

/// Pick the point for one hand: index fingertip if confident enough,
/// thumb tip as fallback, nothing otherwise.
pub fn point_for_observation(observation: &HandObservation) -> Option<HandPoint> {
    if observation.index_tip.confidence > MIN_LANDMARK_CONFIDENCE {
        return Some(flip_vertical(observation.index_tip));
    }
    if observation.thumb_tip.confidence > MIN_LANDMARK_CONFIDENCE {
        return Some(flip_vertical(observation.thumb_tip));
    }
    None
}

/// The oracle's vertical axis is inverted relative to capture-device
/// coordinates.
fn flip_vertical(landmark: LandmarkPoint) -> HandPoint {
    HandPoint {
        x: landmark.x,
        y: 1.0 - landmark.y,
    }
}

/// Control-side intake of resolved frames.
///
/// The capture thread produces `FrameResult`s at its own cadence; the
/// control loop polls at its convenience. `None` means no frame is
/// pending right now.
pub trait FrameSource {
    fn poll(&mut self) -> Option<FrameResult>;
}

#[cfg(feature = "rtrb")]
impl FrameSource for rtrb::Consumer<FrameResult> {
    fn poll(&mut self) -> Option<FrameResult> {
        self.pop().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn landmark(x: f32, y: f32, confidence: f32) -> LandmarkPoint {
        LandmarkPoint { x, y, confidence }
    }

    fn hand(index_conf: f32, thumb_conf: f32) -> HandObservation {
        HandObservation {
            index_tip: landmark(0.2, 0.4, index_conf),
            thumb_tip: landmark(0.6, 0.8, thumb_conf),
        }
    }

    #[test]
    fn prefers_index_tip_over_thumb() {
        let point = point_for_observation(&hand(0.9, 0.9)).unwrap();
        assert_eq!(point.x, 0.2);
    }

    #[test]
    fn falls_back_to_thumb_when_index_is_weak() {
        let point = point_for_observation(&hand(0.1, 0.9)).unwrap();
        assert_eq!(point.x, 0.6);
    }

    #[test]
    fn confidence_at_threshold_is_rejected() {
        // Strict >: exactly 0.3 does not pass for either landmark.
        assert!(point_for_observation(&hand(0.3, 0.3)).is_none());
        assert!(point_for_observation(&hand(0.3, 0.301)).is_some());
    }

    #[test]
    fn low_confidence_hand_yields_no_point() {
        assert!(point_for_observation(&hand(0.0, 0.2)).is_none());
    }

    #[test]
    fn vertical_axis_is_flipped() {
        let point = point_for_observation(&hand(0.9, 0.0)).unwrap();
        assert_eq!(point.y, 1.0 - 0.4);
    }

    #[test]
    fn frame_preserves_observation_order() {
        let observations = [
            HandObservation {
                index_tip: landmark(0.9, 0.5, 0.9),
                thumb_tip: landmark(0.9, 0.5, 0.9),
            },
            HandObservation {
                index_tip: landmark(0.1, 0.5, 0.9),
                thumb_tip: landmark(0.1, 0.5, 0.9),
            },
        ];
        let frame = resolve_frame::<&str>(Ok(&observations));
        // Not sorted by position: the right-most hand stays first.
        assert_eq!(frame.points()[0].x, 0.9);
        assert_eq!(frame.points()[1].x, 0.1);
    }

    #[test]
    fn oracle_failure_resolves_to_an_empty_frame() {
        let frame = resolve_frame(Err("inference backend crashed"));
        assert!(frame.is_empty());
    }

    #[test]
    fn rejected_hands_are_skipped_without_gaps() {
        let observations = [hand(0.9, 0.9), hand(0.0, 0.0), hand(0.8, 0.0)];
        let frame = resolve_frame::<&str>(Ok(&observations));
        assert_eq!(frame.len(), 2);
    }

    #[cfg(feature = "rtrb")]
    #[test]
    fn rtrb_consumer_is_a_frame_source() {
        let (mut tx, mut rx) = rtrb::RingBuffer::<FrameResult>::new(4);
        tx.push(FrameResult::empty()).unwrap();
        assert_eq!(FrameSource::poll(&mut rx), Some(FrameResult::empty()));
        assert_eq!(FrameSource::poll(&mut rx), None);
    }
}
