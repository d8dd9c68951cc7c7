//! Tunable timing, animation and sound settings.

/// Controller settings.
///
/// `Default` reproduces the stock toy: 10 animation steps per second polled
/// at 20 Hz, a 50-step startup, three rotor blades and a 450 Hz engine hum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChopperConfig {
    /// Minimum time between animation steps.
    pub animation_interval_ms: u32,

    /// Sleep between outer loop polls.
    pub poll_interval_ms: u32,

    /// Startup auto-advances to flying once the frame counter exceeds this.
    pub startup_steps: u32,

    /// Number of rotor blades drawn.
    pub rotor_blades: u32,

    /// Navigation lights toggle every this many steps.
    pub nav_blink_steps: u32,

    /// Center strobe toggles every this many steps.
    pub strobe_steps: u32,

    /// Center frequency of the engine hum.
    pub engine_base_hz: u32,

    /// Maximum random deviation of the engine hum, either direction.
    pub engine_variation_hz: u32,

    /// Global strip brightness, 0.0-1.0.
    pub brightness: f32,

    /// Seed for the engine hum jitter.
    pub rng_seed: u64,
}

impl Default for ChopperConfig {
    fn default() -> Self {
        Self {
            animation_interval_ms: 100,
            poll_interval_ms: 50,
            startup_steps: 50,
            rotor_blades: 3,
            nav_blink_steps: 10,
            strobe_steps: 20,
            engine_base_hz: 450,
            engine_variation_hz: 50,
            brightness: 0.3,
            rng_seed: 0x0C40_9943,
        }
    }
}

impl ChopperConfig {
    /// Checks that every setting is usable.
    ///
    /// # Errors
    /// * `ZeroAnimationInterval` - `animation_interval_ms` is zero
    /// * `ZeroPollInterval` - `poll_interval_ms` is zero
    /// * `NoRotorBlades` - `rotor_blades` is zero
    /// * `ZeroBlinkPeriod` - `nav_blink_steps` or `strobe_steps` is zero
    /// * `BrightnessOutOfRange` - `brightness` outside 0.0-1.0
    /// * `EngineVariationTooLarge` - hum could drop to or below 0 Hz
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation_interval_ms == 0 {
            return Err(ConfigError::ZeroAnimationInterval);
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        if self.rotor_blades == 0 {
            return Err(ConfigError::NoRotorBlades);
        }
        if self.nav_blink_steps == 0 || self.strobe_steps == 0 {
            return Err(ConfigError::ZeroBlinkPeriod);
        }
        if !(0.0..=1.0).contains(&self.brightness) {
            return Err(ConfigError::BrightnessOutOfRange);
        }
        if self.engine_variation_hz >= self.engine_base_hz {
            return Err(ConfigError::EngineVariationTooLarge);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Animation interval is zero.
    ZeroAnimationInterval,

    /// Poll interval is zero.
    ZeroPollInterval,

    /// No rotor blades to draw.
    NoRotorBlades,

    /// A blink period is zero.
    ZeroBlinkPeriod,

    /// Brightness outside 0.0-1.0.
    BrightnessOutOfRange,

    /// Engine variation reaches the base frequency.
    EngineVariationTooLarge,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroAnimationInterval => {
                write!(f, "animation interval must be non-zero")
            }
            ConfigError::ZeroPollInterval => write!(f, "poll interval must be non-zero"),
            ConfigError::NoRotorBlades => write!(f, "at least one rotor blade is required"),
            ConfigError::ZeroBlinkPeriod => {
                write!(f, "navigation and strobe periods must be non-zero")
            }
            ConfigError::BrightnessOutOfRange => {
                write!(f, "brightness must be within 0.0-1.0")
            }
            ConfigError::EngineVariationTooLarge => {
                write!(f, "engine variation must be smaller than the base frequency")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
