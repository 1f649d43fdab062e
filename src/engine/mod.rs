//! Tone engine: device lifecycle and cross-thread pitch control.
//!
//! One engine owns one render path. The control side steers its pitch
//! through an atomic frequency cell; the render side consumes the cell
//! once per block. Start and stop are both idempotent, and a stopped
//! engine restarts with a fresh zero-phase waveform.

pub mod backend;
pub mod control;

pub use backend::{AudioBackend, BackendError, CpalBackend, NullBackend, ToneRender};
pub use control::FrequencyCell;

use std::sync::Arc;

/// A steerable sine tone over one audio output stream.
///
/// The engine is "started" exactly when it holds a live stream. Dropping
/// the stream on `stop` releases the device and discards the render-side
/// phase, so the next `start` begins a fresh waveform.
pub struct ToneEngine<B: AudioBackend> {
    backend: B,
    frequency: Arc<FrequencyCell>,
    stream: Option<B::Stream>,
}

impl<B: AudioBackend> ToneEngine<B> {
    /// Create a stopped engine whose first audible frequency, absent any
    /// control update, is `initial_hz`.
    pub fn new(backend: B, initial_hz: f32) -> Self {
        Self {
            backend,
            frequency: Arc::new(FrequencyCell::new(initial_hz)),
            stream: None,
        }
    }

    /// Acquire the output device and begin rendering.
    ///
    /// No-op when already started. Device acquisition failure is returned
    /// to the caller; the engine stays stopped and can be retried.
    pub fn start(&mut self) -> Result<(), BackendError> {
        if self.stream.is_some() {
            return Ok(());
        }
        let stream = self.backend.open_stream(Arc::clone(&self.frequency))?;
        self.stream = Some(stream);
        Ok(())
    }

    /// Publish a new target frequency for the render path.
    ///
    /// Non-blocking and lock-free; safe to call from the control context
    /// at any rate. The caller keeps `hz` within its voice's range.
    pub fn set_target_frequency(&self, hz: f32) {
        debug_assert!(hz > 0.0, "target frequency must be positive, got {hz}");
        log::debug!("target frequency: {hz} Hz");
        self.frequency.set(hz);
    }

    /// Release the output device. No-op when already stopped.
    pub fn stop(&mut self) {
        // Dropping the stream discards the render-side oscillator, so a
        // later start begins at phase 0.
        self.stream = None;
    }

    pub fn is_started(&self) -> bool {
        self.stream.is_some()
    }

    /// The most recently published target frequency.
    pub fn target_frequency(&self) -> f32 {
        self.frequency.get()
    }

    /// Shared handle to the frequency cell, for observers such as
    /// visualizers or custom backends.
    pub fn frequency_cell(&self) -> Arc<FrequencyCell> {
        Arc::clone(&self.frequency)
    }

    /// The live stream, when started. Lets callers of `NullBackend`
    /// engines drive the render context by hand.
    pub fn stream_mut(&mut self) -> Option<&mut B::Stream> {
        self.stream.as_mut()
    }
}
