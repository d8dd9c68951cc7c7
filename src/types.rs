//! Core types shared by the state machine, renderer and sequencer.

/// Operating mode of the toy.
///
/// Modes form a closed cycle: `Off → Startup → Flying → Landing → Emergency → Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Everything dark and silent.
    #[default]
    Off,

    /// Engine spin-up with a progressive fill animation.
    Startup,

    /// Rotor animation with navigation lights and continuous engine hum.
    Flying,

    /// Rotor animation with intermittent engine hum.
    Landing,

    /// Red strobe with a repeating alarm.
    Emergency,
}

impl Mode {
    /// All modes in cycle order, starting at `Off`.
    pub const ALL: [Mode; 5] = [
        Mode::Off,
        Mode::Startup,
        Mode::Flying,
        Mode::Landing,
        Mode::Emergency,
    ];

    /// Returns the next mode in the cycle.
    pub fn next(self) -> Self {
        match self {
            Mode::Off => Mode::Startup,
            Mode::Startup => Mode::Flying,
            Mode::Flying => Mode::Landing,
            Mode::Landing => Mode::Emergency,
            Mode::Emergency => Mode::Off,
        }
    }

    /// LED pattern drawn while this mode is active.
    pub fn pattern(self) -> Pattern {
        match self {
            Mode::Off => Pattern::Solid,
            Mode::Startup => Pattern::Progressive,
            Mode::Flying | Mode::Landing => Pattern::RotorNav,
            Mode::Emergency => Pattern::Strobe,
        }
    }

    /// Engine sound behaviour while this mode is active.
    pub fn engine(self) -> EngineSound {
        match self {
            Mode::Flying => EngineSound::Continuous,
            Mode::Landing => EngineSound::Intermittent,
            _ => EngineSound::Silent,
        }
    }

    /// Sound effect played when a button press enters this mode.
    pub fn entry_cue(self) -> Option<ToneCue> {
        match self {
            Mode::Startup => Some(ToneCue::Startup),
            Mode::Emergency => Some(ToneCue::Emergency),
            Mode::Off => Some(ToneCue::Shutdown),
            Mode::Flying | Mode::Landing => None,
        }
    }
}

/// LED animation pattern family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pattern {
    /// Whole strip a single color.
    Solid,

    /// Cells light up one after another from index 0.
    Progressive,

    /// Rotating blades with navigation light overlay.
    RotorNav,

    /// Whole strip flashing on and off.
    Strobe,
}

/// Engine hum behaviour of a mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineSound {
    /// No engine hum.
    Silent,

    /// Hum on every animation step.
    Continuous,

    /// Hum on every other animation step.
    Intermittent,
}

/// Named sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneCue {
    /// Rising sweep followed by a stabilising warble.
    Startup,

    /// Falling sweep.
    Shutdown,

    /// Alternating high/low alarm.
    Emergency,

    /// One short, slightly randomised engine note.
    IdleHum,
}

/// What caused a mode transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionCause {
    /// A debounced button press.
    Button,

    /// The startup sequence ran its course.
    AutoAdvance,
}

/// A completed mode transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Mode before the transition.
    pub from: Mode,

    /// Mode after the transition.
    pub to: Mode,

    /// Trigger of the transition.
    pub cause: TransitionCause,
}

impl Transition {
    /// Sound effect owed for this transition, if any.
    ///
    /// Only button-driven transitions play entry sounds.
    pub fn cue(&self) -> Option<ToneCue> {
        match self.cause {
            TransitionCause::Button => self.to.entry_cue(),
            TransitionCause::AutoAdvance => None,
        }
    }

    /// True when entering `Off`, which also blanks the strip.
    pub fn blanks_strip(&self) -> bool {
        self.to == Mode::Off
    }
}
