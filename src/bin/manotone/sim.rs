//! Simulated perception oracle.
//!
//! Stands in for the camera + landmark-inference pipeline: a capture
//! thread samples the keyboard-controlled hand positions at camera
//! cadence, wraps them as landmark observations, resolves them through
//! the perception bridge, and pushes the resulting frames to the control
//! loop. Everything downstream of this module is identical to a real
//! deployment.

use manotone::perception::{resolve_frame, FrameResult, HandObservation, LandmarkPoint};
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Camera cadence of the simulated capture session.
const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// One simulated hand, shared between the key handler and the capture
/// thread. Position is an f32 bit pattern so both sides stay lock-free.
pub struct SimHand {
    present: AtomicBool,
    x_bits: AtomicU32,
}

impl SimHand {
    fn new(x: f32) -> Self {
        Self {
            present: AtomicBool::new(true),
            x_bits: AtomicU32::new(x.to_bits()),
        }
    }

    pub fn x(&self) -> f32 {
        f32::from_bits(self.x_bits.load(Ordering::Acquire))
    }

    pub fn set_x(&self, x: f32) {
        self.x_bits.store(x.clamp(0.0, 1.0).to_bits(), Ordering::Release);
    }

    pub fn nudge(&self, delta: f32) {
        self.set_x(self.x() + delta);
    }

    pub fn is_present(&self) -> bool {
        self.present.load(Ordering::Acquire)
    }

    pub fn toggle_present(&self) {
        self.present.fetch_xor(true, Ordering::AcqRel);
    }
}

/// Both simulated hands. Index 0 starts in the left half, 1 in the right.
pub struct SimHands {
    pub hands: [SimHand; 2],
}

impl Default for SimHands {
    fn default() -> Self {
        Self {
            hands: [SimHand::new(0.25), SimHand::new(0.75)],
        }
    }
}

impl SimHands {
    fn observations(&self) -> Vec<HandObservation> {
        self.hands
            .iter()
            .filter(|hand| hand.is_present())
            .map(|hand| {
                // A confidently tracked index fingertip at the simulated
                // position. The oracle's y axis is inverted, so feed the
                // pre-flip value; the bridge flips it back.
                let tip = LandmarkPoint {
                    x: hand.x(),
                    y: 0.5,
                    confidence: 1.0,
                };
                HandObservation {
                    index_tip: tip,
                    thumb_tip: tip,
                }
            })
            .collect()
    }
}

/// Run the simulated capture session on its own thread.
pub fn spawn_capture(hands: Arc<SimHands>, mut tx: rtrb::Producer<FrameResult>) {
    thread::spawn(move || loop {
        let observations = hands.observations();
        let frame = resolve_frame::<Infallible>(Ok(&observations));
        // A full ring just drops the frame; the next one supersedes it.
        let _ = tx.push(frame);
        thread::sleep(FRAME_INTERVAL);
    });
}
