//! Hand-steered theremin core.
//!
//! A camera feed (external to this crate) yields per-frame hand landmark
//! observations; the horizontal position of each confident hand steers
//! the pitch of a continuously running sine voice. The crate covers the
//! realtime synthesis engine, the lock-free frequency hand-off between
//! the tracking thread and the audio callback, and the deterministic
//! mapping from hand position to pitch.

pub mod dsp; // Realtime-safe signal generation
pub mod engine; // Device lifecycle and cross-thread pitch control
pub mod instrument; // Voices and hand-to-pitch mapping
pub mod perception; // Landmark filtering and frame resolution
pub mod pitch; // Tone references and frequency ranges

/// Largest block the render path processes in one go.
pub const MAX_BLOCK_SIZE: usize = 2048;
/// Output gain of a voice; the instrument plays well below full scale.
pub const DEFAULT_AMPLITUDE: f32 = 0.25;
