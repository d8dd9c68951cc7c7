//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
///
/// The source must be monotonic: successive calls never go backwards.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Blocking delay provider.
///
/// Tone playback and the outer poll loop suspend the single control path
/// through this trait; nothing else runs while a delay is in progress.
pub trait Delay<D: TimeDuration> {
    /// Blocks for the given duration.
    fn delay(&mut self, duration: D);
}
