//! Pure mapping from hand positions to voice assignments.
//!
//! Kept free of any audio state so the assignment policy is testable on
//! its own. The instrument variants apply the resulting assignments to
//! their voices.

use crate::perception::{FrameResult, HandPoint};

/// Screen-space geometry of the camera preview, used for the left/right
/// split. Only the width matters to the instrument.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    width: f32,
}

impl PreviewLayout {
    pub fn new(width: f32) -> Self {
        debug_assert!(width > 0.0);
        Self { width }
    }

    /// Horizontal screen coordinate of a normalized sensor-space point.
    pub fn screen_x(&self, point: &HandPoint) -> f32 {
        point.x * self.width
    }

    /// A hand belongs to the left voice when its screen position falls in
    /// the left half of the preview.
    pub fn is_left(&self, point: &HandPoint) -> bool {
        self.screen_x(point) < self.width / 2.0
    }
}

impl Default for PreviewLayout {
    /// Normalized-width preview; fine when no real screen exists.
    fn default() -> Self {
        Self { width: 1.0 }
    }
}

/// Positional multiplier for a hand: `1 - x`, clamped to [0, 1].
///
/// Pitch rises as the hand moves toward x = 0, matching the mirrored
/// front-camera display the instrument is played against.
pub fn position_multiplier(point: &HandPoint) -> f32 {
    (1.0 - point.x).clamp(0.0, 1.0)
}

/// Per-frame voice assignments: the multiplier each side should play,
/// or `None` to silence that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SideAssignment {
    pub left: Option<f32>,
    pub right: Option<f32>,
}

/// Classify each hand independently into the left or right half.
///
/// Tie-break policy ("first observation wins"): when two hands classify
/// to the same side, the earlier hand in the frame keeps that side and
/// the later hand is dropped for the frame. The opposite side stays
/// unassigned and will be silenced.
pub fn assign_sides(frame: &FrameResult, layout: &PreviewLayout) -> SideAssignment {
    let mut assignment = SideAssignment::default();

    for point in frame.points() {
        let slot = if layout.is_left(point) {
            &mut assignment.left
        } else {
            &mut assignment.right
        };
        if slot.is_none() {
            *slot = Some(position_multiplier(point));
        }
    }

    assignment
}
