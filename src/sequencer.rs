//! Blocking tone playback.
//!
//! Provides [`ToneSequencer`] which plays the named sound effects on a
//! [`ToneEmitter`], and defines the emitter trait for hardware abstraction.

use crate::config::ChopperConfig;
use crate::time::{Delay, TimeDuration};
use crate::tone::{
    self, HUM_DURATION_MS, HUM_INTENSITY, MAX_SEGMENTS, ToneError, ToneSegment, ToneSequence,
};
use crate::types::ToneCue;

/// Trait for abstracting a tone-producing device (PWM buzzer, speaker, etc.).
pub trait ToneEmitter {
    /// Sets the output frequency in Hz.
    fn set_frequency(&mut self, frequency_hz: u32);

    /// Sets the output intensity (duty cycle or volume), 0.0-1.0.
    ///
    /// Zero silences the device. Handle any hardware errors internally -
    /// this method cannot fail.
    fn set_intensity(&mut self, intensity: f32);

    /// Whether a device is actually attached.
    ///
    /// Playback on an unavailable emitter returns immediately without
    /// blocking.
    fn is_available(&self) -> bool {
        true
    }
}

/// Plays tone sequences synchronously on a single emitter.
///
/// Every segment blocks the caller for its full duration, so nothing else
/// runs while a sound effect is playing.
pub struct ToneSequencer<E: ToneEmitter> {
    emitter: E,
    startup: ToneSequence<MAX_SEGMENTS>,
    shutdown: ToneSequence<MAX_SEGMENTS>,
    emergency: ToneSequence<MAX_SEGMENTS>,
    rng: fastrand::Rng,
    hum_base_hz: u32,
    hum_variation_hz: u32,
}

impl<E: ToneEmitter> ToneSequencer<E> {
    /// Creates a sequencer with the built-in sound effects and silences the emitter.
    pub fn new(mut emitter: E, config: &ChopperConfig) -> Result<Self, ToneError> {
        emitter.set_intensity(0.0);

        Ok(Self {
            emitter,
            startup: tone::startup_sequence()?,
            shutdown: tone::shutdown_sequence()?,
            emergency: tone::emergency_sequence()?,
            rng: fastrand::Rng::with_seed(config.rng_seed),
            hum_base_hz: config.engine_base_hz,
            hum_variation_hz: config.engine_variation_hz,
        })
    }

    /// Plays a named sound effect to completion.
    pub fn play<D: TimeDuration>(&mut self, cue: ToneCue, delay: &mut impl Delay<D>) {
        if !self.emitter.is_available() {
            return;
        }

        let sequence = match cue {
            ToneCue::Startup => {
                info!("engine starting");
                &self.startup
            }
            ToneCue::Shutdown => {
                info!("engine shutting down");
                &self.shutdown
            }
            ToneCue::Emergency => {
                info!("emergency alarm");
                &self.emergency
            }
            ToneCue::IdleHum => {
                let segment = self.next_hum();
                Self::drive(&mut self.emitter, segment, delay);
                return;
            }
        };

        for segment in sequence.segments() {
            Self::drive(&mut self.emitter, *segment, delay);
        }
    }

    fn drive<D: TimeDuration>(emitter: &mut E, segment: ToneSegment, delay: &mut impl Delay<D>) {
        emitter.set_frequency(segment.frequency_hz);
        emitter.set_intensity(segment.intensity);
        delay.delay(D::from_millis(segment.duration_ms as u64));
        emitter.set_intensity(0.0);
    }

    /// Returns the next engine hum note, jittered around the base frequency.
    ///
    /// Computed in `i64` so every `u32` base and variation yields a valid range.
    fn next_hum(&mut self) -> ToneSegment {
        let variation = i64::from(self.hum_variation_hz);
        let jitter = self.rng.i64(-variation..=variation);
        let frequency = (i64::from(self.hum_base_hz) + jitter).clamp(0, i64::from(u32::MAX));
        ToneSegment::new(frequency as u32, HUM_DURATION_MS, HUM_INTENSITY)
    }

    /// Returns a reference to the emitter.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Millis(u64);

    impl TimeDuration for Millis {
        fn as_millis(&self) -> u64 {
            self.0
        }

        fn from_millis(millis: u64) -> Self {
            Millis(millis)
        }
    }

    #[derive(Default)]
    struct SumDelay {
        total_ms: u64,
    }

    impl Delay<Millis> for SumDelay {
        fn delay(&mut self, duration: Millis) {
            self.total_ms += duration.0;
        }
    }

    #[derive(Default)]
    struct RecordingBuzzer {
        frequencies: Vec<u32, 64>,
        intensity: f32,
    }

    impl ToneEmitter for RecordingBuzzer {
        fn set_frequency(&mut self, frequency_hz: u32) {
            let _ = self.frequencies.push(frequency_hz);
        }

        fn set_intensity(&mut self, intensity: f32) {
            self.intensity = intensity;
        }
    }

    struct Unplugged;

    impl ToneEmitter for Unplugged {
        fn set_frequency(&mut self, _frequency_hz: u32) {
            panic!("unplugged emitter driven");
        }

        fn set_intensity(&mut self, _intensity: f32) {}

        fn is_available(&self) -> bool {
            false
        }
    }

    #[test]
    fn startup_blocks_for_whole_sequence_and_ends_silent() {
        let mut sequencer =
            ToneSequencer::new(RecordingBuzzer::default(), &ChopperConfig::default()).unwrap();
        let mut delay = SumDelay::default();

        sequencer.play(ToneCue::Startup, &mut delay);

        assert_eq!(delay.total_ms, 1800);
        assert_eq!(sequencer.emitter().frequencies.len(), 26);
        assert_eq!(sequencer.emitter().intensity, 0.0);
    }

    #[test]
    fn idle_hum_stays_within_variation() {
        let mut sequencer =
            ToneSequencer::new(RecordingBuzzer::default(), &ChopperConfig::default()).unwrap();
        let mut delay = SumDelay::default();

        for _ in 0..40 {
            sequencer.play(ToneCue::IdleHum, &mut delay);
        }

        assert_eq!(delay.total_ms, 40 * 50);
        assert!(
            sequencer
                .emitter()
                .frequencies
                .iter()
                .all(|f| (400..=500).contains(f))
        );
    }

    #[test]
    fn idle_hum_handles_frequencies_beyond_i32() {
        let config = ChopperConfig {
            engine_base_hz: 3_000_000_000,
            engine_variation_hz: 2_500_000_000,
            ..ChopperConfig::default()
        };
        let mut sequencer = ToneSequencer::new(RecordingBuzzer::default(), &config).unwrap();
        let mut delay = SumDelay::default();

        for _ in 0..20 {
            sequencer.play(ToneCue::IdleHum, &mut delay);
        }

        assert_eq!(sequencer.emitter().frequencies.len(), 20);
        assert!(
            sequencer
                .emitter()
                .frequencies
                .iter()
                .all(|f| *f >= 500_000_000)
        );
    }

    #[test]
    fn unavailable_emitter_is_a_silent_no_op() {
        let mut sequencer = ToneSequencer::new(Unplugged, &ChopperConfig::default()).unwrap();
        let mut delay = SumDelay::default();

        sequencer.play(ToneCue::Shutdown, &mut delay);
        sequencer.play(ToneCue::IdleHum, &mut delay);

        assert_eq!(delay.total_ms, 0);
    }
}
