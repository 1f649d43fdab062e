//! Cross-context frequency hand-off.
//!
//! Exactly one datum is shared between the control context (hand tracking)
//! and the render context (audio callback): the target frequency. It is an
//! atomic scalar rather than a mutex so the render thread can never be
//! blocked, and never suffers priority inversion against the writer.

use std::sync::atomic::{AtomicU32, Ordering};

/// An `f32` frequency published atomically through its bit pattern.
///
/// Writers use release stores, readers acquire loads; a reader sees either
/// the old value or the new one, never a torn mix. The render callback
/// loads it once per block, so a new target is audible within one render
/// buffer's worth of samples.
#[derive(Debug)]
pub struct FrequencyCell {
    bits: AtomicU32,
}

impl FrequencyCell {
    pub fn new(hz: f32) -> Self {
        Self {
            bits: AtomicU32::new(hz.to_bits()),
        }
    }

    /// Publish a new target frequency. Non-blocking, non-allocating.
    pub fn set(&self, hz: f32) {
        self.bits.store(hz.to_bits(), Ordering::Release);
    }

    /// Snapshot the current target frequency.
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_exact_values() {
        let cell = FrequencyCell::new(440.0);
        assert_eq!(cell.get(), 440.0);

        for hz in [0.1, 432.5, 770.0, 1760.0, 19_999.9] {
            cell.set(hz);
            assert_eq!(cell.get(), hz);
        }
    }

    #[test]
    fn shared_across_threads() {
        use std::sync::Arc;

        let cell = Arc::new(FrequencyCell::new(440.0));
        let writer = Arc::clone(&cell);
        let handle = std::thread::spawn(move || writer.set(880.0));
        handle.join().unwrap();
        assert_eq!(cell.get(), 880.0);
    }
}
