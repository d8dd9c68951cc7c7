//! Tone segments, validated tone sequences and the built-in sound effects.

use heapless::Vec;

/// Maximum number of segments in one sound effect.
pub const MAX_SEGMENTS: usize = 32;

/// Buzzer duty used by the alarm and engine sweep effects (50 %).
pub const FULL_INTENSITY: f32 = 0.5;

/// Buzzer duty used by the engine hum (25 %).
pub const HUM_INTENSITY: f32 = 0.25;

/// Length of one engine hum note.
pub const HUM_DURATION_MS: u32 = 50;

/// A single note: frequency held at an intensity for a duration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToneSegment {
    /// Frequency in Hz. Zero is a rest.
    pub frequency_hz: u32,

    /// How long the note is held. Always non-zero in a built sequence.
    pub duration_ms: u32,

    /// Output intensity, 0.0-1.0.
    pub intensity: f32,
}

impl ToneSegment {
    /// Creates a new segment.
    #[inline]
    pub const fn new(frequency_hz: u32, duration_ms: u32, intensity: f32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
            intensity,
        }
    }

    fn validate(&self) -> Result<(), ToneError> {
        if self.duration_ms == 0 {
            return Err(ToneError::ZeroDuration);
        }
        if !(0.0..=1.0).contains(&self.intensity) {
            return Err(ToneError::IntensityOutOfRange);
        }
        Ok(())
    }
}

/// Tone sequence validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneError {
    /// No segments provided.
    EmptySequence,

    /// A segment has zero duration.
    ZeroDuration,

    /// A segment intensity is outside 0.0-1.0.
    IntensityOutOfRange,

    /// Sequence capacity exceeded.
    CapacityExceeded,
}

impl core::fmt::Display for ToneError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ToneError::EmptySequence => write!(f, "tone sequence must have at least one segment"),
            ToneError::ZeroDuration => write!(f, "tone segments must have a non-zero duration"),
            ToneError::IntensityOutOfRange => {
                write!(f, "tone intensity must be within 0.0-1.0")
            }
            ToneError::CapacityExceeded => write!(f, "tone sequence capacity exceeded"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ToneError {}

/// An ordered, non-empty list of tone segments.
///
/// # Type Parameters
/// * `N` - Maximum number of segments this sequence can hold
#[derive(Debug, Clone)]
pub struct ToneSequence<const N: usize> {
    segments: Vec<ToneSegment, N>,
}

impl<const N: usize> ToneSequence<N> {
    /// Creates a new sequence builder.
    pub fn builder() -> ToneSequenceBuilder<N> {
        ToneSequenceBuilder::new()
    }

    /// Builds a one-segment sequence.
    pub fn single(segment: ToneSegment) -> Result<Self, ToneError> {
        Self::builder().segment(segment)?.build()
    }

    /// Segments in playback order.
    pub fn segments(&self) -> &[ToneSegment] {
        &self.segments
    }

    /// Returns the number of segments in this sequence.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Wall-clock length of the whole sequence.
    pub fn total_duration_ms(&self) -> u64 {
        self.segments.iter().map(|s| s.duration_ms as u64).sum()
    }
}

/// Builder for constructing validated tone sequences.
#[derive(Debug)]
pub struct ToneSequenceBuilder<const N: usize> {
    segments: Vec<ToneSegment, N>,
}

impl<const N: usize> ToneSequenceBuilder<N> {
    /// Creates a new empty builder.
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Appends a segment.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The sequence is full
    pub fn segment(mut self, segment: ToneSegment) -> Result<Self, ToneError> {
        self.segments
            .push(segment)
            .map_err(|_| ToneError::CapacityExceeded)?;
        Ok(self)
    }

    /// Appends a note.
    pub fn note(self, frequency_hz: u32, duration_ms: u32, intensity: f32) -> Result<Self, ToneError> {
        self.segment(ToneSegment::new(frequency_hz, duration_ms, intensity))
    }

    /// Appends a frequency sweep from `from_hz` towards `to_hz`, excluding `to_hz`.
    ///
    /// The sweep runs upwards or downwards depending on the endpoints and
    /// produces `ceil(|to - from| / step)` notes. A zero step adds nothing.
    pub fn sweep(
        mut self,
        from_hz: u32,
        to_hz: u32,
        step_hz: u32,
        duration_ms: u32,
        intensity: f32,
    ) -> Result<Self, ToneError> {
        if step_hz == 0 {
            return Ok(self);
        }

        let mut frequency = from_hz;
        if from_hz <= to_hz {
            while frequency < to_hz {
                self = self.note(frequency, duration_ms, intensity)?;
                frequency += step_hz;
            }
        } else {
            while frequency > to_hz {
                self = self.note(frequency, duration_ms, intensity)?;
                frequency = frequency.saturating_sub(step_hz);
            }
        }
        Ok(self)
    }

    /// Appends `pattern` `times` times over.
    pub fn repeat(mut self, pattern: &[ToneSegment], times: usize) -> Result<Self, ToneError> {
        for _ in 0..times {
            for segment in pattern {
                self = self.segment(*segment)?;
            }
        }
        Ok(self)
    }

    /// Builds and validates the sequence.
    ///
    /// # Errors
    /// * `EmptySequence` - No segments were added
    /// * `ZeroDuration` - A segment has zero duration
    /// * `IntensityOutOfRange` - A segment intensity is outside 0.0-1.0
    pub fn build(self) -> Result<ToneSequence<N>, ToneError> {
        if self.segments.is_empty() {
            return Err(ToneError::EmptySequence);
        }

        for segment in &self.segments {
            segment.validate()?;
        }

        Ok(ToneSequence {
            segments: self.segments,
        })
    }
}

impl<const N: usize> Default for ToneSequenceBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Engine spin-up: 100→500 Hz in 25 Hz steps, then five 450/500 Hz warbles.
pub fn startup_sequence() -> Result<ToneSequence<MAX_SEGMENTS>, ToneError> {
    ToneSequence::builder()
        .sweep(100, 500, 25, 50, FULL_INTENSITY)?
        .repeat(
            &[
                ToneSegment::new(450, 100, FULL_INTENSITY),
                ToneSegment::new(500, 100, FULL_INTENSITY),
            ],
            5,
        )?
        .build()
}

/// Engine wind-down: 500→100 Hz in 25 Hz steps.
pub fn shutdown_sequence() -> Result<ToneSequence<MAX_SEGMENTS>, ToneError> {
    ToneSequence::builder()
        .sweep(500, 100, 25, 80, FULL_INTENSITY)?
        .build()
}

/// Alarm: three 800/400 Hz pairs.
pub fn emergency_sequence() -> Result<ToneSequence<MAX_SEGMENTS>, ToneError> {
    ToneSequence::builder()
        .repeat(
            &[
                ToneSegment::new(800, 100, FULL_INTENSITY),
                ToneSegment::new(400, 100, FULL_INTENSITY),
            ],
            3,
        )?
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_has_sweep_then_warble() {
        let sequence = startup_sequence().unwrap();
        assert_eq!(sequence.segment_count(), 26);

        let segments = sequence.segments();
        assert_eq!(segments[0].frequency_hz, 100);
        assert_eq!(segments[15].frequency_hz, 475);
        assert_eq!(segments[16], ToneSegment::new(450, 100, FULL_INTENSITY));
        assert_eq!(segments[25], ToneSegment::new(500, 100, FULL_INTENSITY));
        assert_eq!(sequence.total_duration_ms(), 1800);
    }

    #[test]
    fn shutdown_sweeps_down() {
        let sequence = shutdown_sequence().unwrap();
        assert_eq!(sequence.segment_count(), 16);
        assert_eq!(sequence.segments()[0].frequency_hz, 500);
        assert_eq!(sequence.segments()[15].frequency_hz, 125);
        assert_eq!(sequence.total_duration_ms(), 1280);
    }

    #[test]
    fn emergency_alternates() {
        let sequence = emergency_sequence().unwrap();
        let freqs: heapless::Vec<u32, 8> =
            sequence.segments().iter().map(|s| s.frequency_hz).collect();
        assert_eq!(freqs.as_slice(), &[800, 400, 800, 400, 800, 400]);
    }

    #[test]
    fn builder_rejects_invalid_sequences() {
        assert_eq!(
            ToneSequence::<4>::builder().build().unwrap_err(),
            ToneError::EmptySequence
        );
        assert_eq!(
            ToneSequence::<4>::single(ToneSegment::new(440, 0, 0.5)).unwrap_err(),
            ToneError::ZeroDuration
        );
        assert_eq!(
            ToneSequence::<4>::single(ToneSegment::new(440, 10, 1.5)).unwrap_err(),
            ToneError::IntensityOutOfRange
        );
        assert_eq!(
            ToneSequence::<2>::builder()
                .sweep(100, 500, 25, 50, 0.5)
                .unwrap_err(),
            ToneError::CapacityExceeded
        );
    }
}
