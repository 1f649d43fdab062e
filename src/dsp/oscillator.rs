use std::f32::consts::TAU;

use crate::DEFAULT_AMPLITUDE;

/*
Continuous-Phase Sine Oscillator
================================

The whole instrument rests on one property: pitch can change at any moment
without an audible click. The trick is to keep a running phase accumulator
and only ever change the *rate* at which it advances.

Vocabulary
----------

  phase       Where we are on the sine cycle, in radians, wrapped to
              [0, 2π). Exclusively owned by the render context; nothing
              outside the callback ever touches it.

  frequency   How fast phase advances. This is the only steerable input,
              and it is sampled once per render block, not per sample.

  theta increment
              2π · frequency / sample_rate — the phase step per sample.

Why per-block frequency snapshots?
----------------------------------

The control side (hand tracking) updates frequency at camera cadence,
tens of milliseconds apart. Sampling it once per block means a change is
audible within one block's worth of samples, and because only the step
size changes (never phase itself), the waveform stays continuous across
the change. No discontinuity, no click, just a glide.
*/

/// Sine wave generator with a continuous phase accumulator.
///
/// `render` takes the frequency as an argument rather than storing it:
/// the caller owns the once-per-block snapshot policy.
pub struct SineBlock {
    /// Current phase in radians, wrapped to [0, 2π).
    phase: f32,
    /// Samples per second, fixed at construction.
    sample_rate: f32,
    /// Output gain, 0 < amplitude <= 1, fixed at construction.
    amplitude: f32,
}

impl SineBlock {
    pub fn new(sample_rate: f32) -> Self {
        Self::with_amplitude(sample_rate, DEFAULT_AMPLITUDE)
    }

    pub fn with_amplitude(sample_rate: f32, amplitude: f32) -> Self {
        debug_assert!(sample_rate > 0.0);
        debug_assert!(amplitude > 0.0 && amplitude <= 1.0);
        Self {
            phase: 0.0,
            sample_rate,
            amplitude,
        }
    }

    /// Fill `out` with sine samples at `frequency` Hz.
    ///
    /// Phase carries over from the previous call, so consecutive blocks at
    /// different frequencies join without a discontinuity.
    pub fn render(&mut self, out: &mut [f32], frequency: f32) {
        let theta_increment = TAU * frequency / self.sample_rate;
        let mut phase = self.phase;

        for sample in out.iter_mut() {
            *sample = self.amplitude * phase.sin();
            phase += theta_increment;
            if phase > TAU {
                phase -= TAU;
            }
        }

        self.phase = phase;
    }

    /// Reset phase to 0 so the next render starts a fresh waveform.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }
}
