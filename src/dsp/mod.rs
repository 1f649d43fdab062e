//! Low-level DSP primitives used by the tone engine.
//!
//! These components are allocation-free and realtime-safe, making them safe
//! to run inside the audio render callback. They intentionally stay focused
//! on the signal-processing math so the engine layer can handle device
//! lifecycle and cross-thread control.

/// Continuous-phase sine oscillator.
pub mod oscillator;

pub use oscillator::SineBlock;
