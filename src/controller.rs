//! Fixed-tick controller loop.
//!
//! Provides [`ChopperController`], which owns every device capability plus the
//! state machine, renderer, sequencer and debouncer, and drives them from a
//! single control path. Two clock domains are in play: the outer poll
//! (button sampling) and the slower animation step, gated by elapsed time on
//! the monotonic clock rather than a fixed divider.

use crate::colors;
use crate::config::{ChopperConfig, ConfigError};
use crate::debounce::Debouncer;
use crate::devices::{DigitalInput, StatusOutput};
use crate::machine::{FrameStep, ModeStateMachine};
use crate::render::{LightStrip, Renderer};
use crate::sequencer::{ToneEmitter, ToneSequencer};
use crate::time::{Delay, TimeDuration, TimeInstant, TimeSource};
use crate::tone::ToneError;
use crate::types::{Mode, Transition};
use palette::Srgb;

/// How long the status LED stays lit by [`ChopperController::boot`].
pub const BOOT_BLINK_MS: u64 = 500;

/// The devices a controller drives.
///
/// Any of them may be `Option<T>` holding `None` when the device was not
/// detected at startup.
pub struct Peripherals<S, E, B, P> {
    /// LED strip for the animations.
    pub strip: S,
    /// Buzzer for the sound effects.
    pub tone: E,
    /// Mode button.
    pub button: B,
    /// Status LED.
    pub indicator: P,
}

/// Errors that can occur while constructing a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SetupError {
    /// The configuration failed validation.
    Config(ConfigError),

    /// A built-in sound effect failed to build.
    Tone(ToneError),
}

impl core::fmt::Display for SetupError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SetupError::Config(err) => write!(f, "configuration error: {}", err),
            SetupError::Tone(err) => write!(f, "tone sequence error: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SetupError {}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        SetupError::Config(err)
    }
}

impl From<ToneError> for SetupError {
    fn from(err: ToneError) -> Self {
        SetupError::Tone(err)
    }
}

/// Drives the toy: button in, lights and sound out.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `T` - Time source implementation type
/// * `Dl` - Blocking delay implementation type
/// * `S` - LED strip implementation type
/// * `E` - Tone emitter implementation type
/// * `B` - Button implementation type
/// * `P` - Status LED implementation type
/// * `N` - Number of cells on the strip
pub struct ChopperController<'t, I, T, Dl, S, E, B, P, const N: usize>
where
    I: TimeInstant,
    T: TimeSource<I>,
    Dl: Delay<I::Duration>,
    S: LightStrip,
    E: ToneEmitter,
    B: DigitalInput,
    P: StatusOutput,
{
    time_source: &'t T,
    delay: Dl,
    strip: S,
    button: B,
    indicator: P,
    sequencer: ToneSequencer<E>,
    renderer: Renderer,
    machine: ModeStateMachine,
    debouncer: Debouncer,
    pixels: [Srgb; N],
    brightness: f32,
    animation_interval_ms: u64,
    poll_interval: I::Duration,
    last_step: I,
}

impl<'t, I, T, Dl, S, E, B, P, const N: usize> ChopperController<'t, I, T, Dl, S, E, B, P, N>
where
    I: TimeInstant,
    T: TimeSource<I>,
    Dl: Delay<I::Duration>,
    S: LightStrip,
    E: ToneEmitter,
    B: DigitalInput,
    P: StatusOutput,
{
    /// Creates a controller in `Off` with the strip blank and the indicator off.
    ///
    /// # Errors
    /// * `Config` - `config` failed validation
    /// * `Tone` - a built-in sound effect could not be built
    pub fn new(
        peripherals: Peripherals<S, E, B, P>,
        time_source: &'t T,
        delay: Dl,
        config: &ChopperConfig,
    ) -> Result<Self, SetupError> {
        config.validate()?;
        let sequencer = ToneSequencer::new(peripherals.tone, config)?;

        let mut controller = Self {
            time_source,
            delay,
            strip: peripherals.strip,
            button: peripherals.button,
            indicator: peripherals.indicator,
            sequencer,
            renderer: Renderer::new(config),
            machine: ModeStateMachine::new(config),
            debouncer: Debouncer::new(),
            pixels: [colors::OFF; N],
            brightness: config.brightness,
            animation_interval_ms: config.animation_interval_ms as u64,
            poll_interval: I::Duration::from_millis(config.poll_interval_ms as u64),
            last_step: time_source.now(),
        };

        controller.commit();
        controller.indicator.set(false);
        Ok(controller)
    }

    /// Blinks the status LED once to show the toy is alive.
    pub fn boot(&mut self) {
        info!("baby chopper starting up");
        self.indicator.set(true);
        self.delay.delay(I::Duration::from_millis(BOOT_BLINK_MS));
        self.indicator.set(false);
    }

    /// Runs one outer tick: maybe an animation step, then a button sample.
    ///
    /// Sound effects block inside this call, so button presses during a
    /// sound effect are never seen.
    pub fn poll(&mut self) {
        let now = self.time_source.now();
        if now.duration_since(self.last_step).as_millis() >= self.animation_interval_ms {
            self.last_step = now;
            let step = self.machine.step();
            self.animate(step);
        }

        if self.debouncer.sample(self.button.is_pressed()) {
            let transition = self.machine.press();
            self.apply(transition);
        }
    }

    /// Polls forever at the configured poll interval.
    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
            self.delay.delay(self.poll_interval);
        }
    }

    fn animate(&mut self, step: FrameStep) {
        debug!("step {} frame {}", step.mode, step.frame);
        self.renderer.render(step.mode, step.frame, &mut self.pixels);
        self.commit();
        self.indicator.set(step.indicator);

        if let Some(cue) = step.cue {
            self.sequencer.play(cue, &mut self.delay);
        }
        if let Some(transition) = step.transition {
            self.apply(transition);
        }
    }

    fn apply(&mut self, transition: Transition) {
        if let Some(cue) = transition.cue() {
            self.sequencer.play(cue, &mut self.delay);
        }
        if transition.blanks_strip() {
            self.pixels.fill(colors::OFF);
            self.commit();
        }
    }

    /// Writes the pixel buffer to the strip at the configured brightness.
    fn commit(&mut self) {
        let mut scaled = [colors::OFF; N];
        for (out, pixel) in scaled.iter_mut().zip(self.pixels.iter()) {
            *out = colors::scale(*pixel, self.brightness);
        }
        self.strip.write(&scaled);
        self.strip.show();
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.machine.mode()
    }

    /// Returns the animation frame counter.
    pub fn frame(&self) -> u32 {
        self.machine.frame()
    }

    /// Returns the last rendered frame at full brightness.
    pub fn pixels(&self) -> &[Srgb; N] {
        &self.pixels
    }

    /// Returns a reference to the LED strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a reference to the tone emitter.
    pub fn tone(&self) -> &E {
        self.sequencer.emitter()
    }

    /// Returns a mutable reference to the button.
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }

    /// Returns a reference to the status LED.
    pub fn indicator(&self) -> &P {
        &self.indicator
    }

    /// Returns a reference to the delay provider.
    pub fn delay(&self) -> &Dl {
        &self.delay
    }
}
