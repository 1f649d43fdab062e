//! Audio output backends.
//!
//! The engine talks to the audio subsystem through the `AudioBackend`
//! trait: hand it a bound renderer, get back a live stream handle. The
//! cpal implementation drives a real output device; `NullBackend` stands
//! in for it in tests and headless runs.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use thiserror::Error;

use super::control::FrequencyCell;
use crate::dsp::SineBlock;
use crate::MAX_BLOCK_SIZE;

/// Failure to acquire or start the real-time output path.
///
/// Setup failures are surfaced to the caller; the engine never retries or
/// aborts the process on its own.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("no default audio output device available")]
    NoOutputDevice,
    #[error("failed to fetch default output config: {0}")]
    DefaultConfig(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build audio output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start audio output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
}

/// Render-context state, bound to the stream that owns it.
///
/// Bundles the oscillator (exclusively owned by the render callback) with
/// the shared frequency cell (its only steerable input). The frequency is
/// snapshotted once per block, never per sample.
pub struct ToneRender {
    osc: SineBlock,
    frequency: Arc<FrequencyCell>,
}

impl ToneRender {
    pub fn new(osc: SineBlock, frequency: Arc<FrequencyCell>) -> Self {
        Self { osc, frequency }
    }

    /// Fill one mono block at the most recently published target frequency.
    pub fn render_block(&mut self, out: &mut [f32]) {
        let hz = self.frequency.get();
        self.osc.render(out, hz);
    }

    pub fn phase(&self) -> f32 {
        self.osc.phase()
    }
}

/// Opens real-time output streams for the engine.
///
/// The returned stream handle keeps the device alive; dropping it releases
/// the device and discards the renderer (and its phase) with it.
pub trait AudioBackend {
    type Stream;

    fn open_stream(&self, frequency: Arc<FrequencyCell>) -> Result<Self::Stream, BackendError>;
}

/// cpal-based backend targeting the default host output device.
#[derive(Debug, Default, Clone)]
pub struct CpalBackend;

impl AudioBackend for CpalBackend {
    type Stream = cpal::Stream;

    fn open_stream(&self, frequency: Arc<FrequencyCell>) -> Result<Self::Stream, BackendError> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(BackendError::NoOutputDevice)?;
        let config = device.default_output_config()?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        log::info!("audio output: {sample_rate} Hz, {channels} channel(s)");

        let mut renderer = ToneRender::new(SineBlock::new(sample_rate), frequency);
        // Scratch block allocated up front; the callback itself never allocates.
        let mut block = vec![0.0f32; MAX_BLOCK_SIZE];

        let stream = device.build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;

                while frames_written < total_frames {
                    let frames = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                    let buf = &mut block[..frames];
                    renderer.render_block(buf);

                    // Mono signal duplicated across all output channels
                    let out_off = frames_written * channels;
                    for (i, &sample) in buf.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = sample;
                        }
                    }

                    frames_written += frames;
                }
            },
            |err| log::error!("audio stream error: {err}"),
            None,
        )?;

        stream.play()?;
        Ok(stream)
    }
}

/// Backend that produces no sound but tracks stream lifecycle.
///
/// Used by tests and headless runs; open/close counts make start/stop
/// idempotence observable without a sound card.
#[derive(Debug, Default, Clone)]
pub struct NullBackend {
    opens: Arc<AtomicUsize>,
    live: Arc<AtomicUsize>,
    fail: bool,
}

impl NullBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that refuses every open, as when no output device exists.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Total number of streams ever opened through this backend.
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    /// Number of streams currently alive.
    pub fn live_streams(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

pub struct NullStream {
    renderer: ToneRender,
    live: Arc<AtomicUsize>,
}

impl NullStream {
    /// Advance the render context by hand, as the audio thread would.
    pub fn render_block(&mut self, out: &mut [f32]) {
        self.renderer.render_block(out);
    }

    pub fn phase(&self) -> f32 {
        self.renderer.phase()
    }
}

impl Drop for NullStream {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AudioBackend for NullBackend {
    type Stream = NullStream;

    fn open_stream(&self, frequency: Arc<FrequencyCell>) -> Result<Self::Stream, BackendError> {
        if self.fail {
            return Err(BackendError::NoOutputDevice);
        }
        self.opens.fetch_add(1, Ordering::SeqCst);
        self.live.fetch_add(1, Ordering::SeqCst);
        Ok(NullStream {
            renderer: ToneRender::new(SineBlock::new(48_000.0), frequency),
            live: Arc::clone(&self.live),
        })
    }
}
