use crate::engine::{AudioBackend, BackendError, ToneEngine};
use crate::pitch::FrequencyRange;

/// One independently pitched oscillator bound to a frequency range.
///
/// `play` maps a [0,1] positional multiplier linearly onto the range and
/// hands the result to the engine; by construction the target frequency
/// always lies within the range, endpoints included. The `active` flag is
/// local bookkeeping — the authoritative start/stop side effect lives in
/// the engine.
pub struct Voice<B: AudioBackend> {
    label: &'static str,
    range: FrequencyRange,
    engine: ToneEngine<B>,
    active: bool,
}

impl<B: AudioBackend> Voice<B> {
    pub fn new(label: &'static str, range: FrequencyRange, backend: B) -> Self {
        // Seed the cell at the low end so the first audible block never
        // renders a frequency outside the range.
        let engine = ToneEngine::new(backend, range.min_hz());
        Self {
            label,
            range,
            engine,
            active: false,
        }
    }

    /// Sound this voice at the pitch selected by `multiplier` in [0,1].
    ///
    /// Starts the engine if needed; a device failure is returned to the
    /// caller and leaves the voice inactive.
    pub fn play(&mut self, multiplier: f32) -> Result<(), BackendError> {
        let multiplier = multiplier.clamp(0.0, 1.0);
        let hz = self.range.value_at(multiplier);

        self.engine.start()?;
        self.active = true;
        log::debug!("voice {}: playing {hz} Hz", self.label);
        self.engine.set_target_frequency(hz);
        Ok(())
    }

    /// Silence this voice. No-op when already silent.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        log::debug!("voice {}: stopped", self.label);
        self.engine.stop();
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn range(&self) -> FrequencyRange {
        self.range
    }

    /// The frequency most recently handed to the engine.
    pub fn target_frequency(&self) -> f32 {
        self.engine.target_frequency()
    }

    pub fn engine(&self) -> &ToneEngine<B> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ToneEngine<B> {
        &mut self.engine
    }
}
