//! Mode state machine.
//!
//! Provides [`ModeStateMachine`], which owns the active mode and the
//! animation frame counter and decides, per animation step, which sound to
//! play, what the status indicator shows and whether startup has finished.
//! It never touches a device; the controller acts on what it returns.

use crate::config::ChopperConfig;
use crate::types::{EngineSound, Mode, ToneCue, Transition, TransitionCause};

/// Steps between emergency alarm repeats.
pub const ALARM_REPEAT_STEPS: u32 = 20;

/// Outcome of one animation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameStep {
    /// Mode to render for this step.
    pub mode: Mode,

    /// Frame counter to render for this step.
    pub frame: u32,

    /// Sound to play for this step.
    pub cue: Option<ToneCue>,

    /// Status indicator level for this step.
    pub indicator: bool,

    /// Auto-advance that happened after this step was rendered.
    pub transition: Option<Transition>,
}

/// Current mode plus frame counter.
///
/// The frame counter is reset to zero by every transition and increments by
/// one per animation step otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeStateMachine {
    mode: Mode,
    frame: u32,
    startup_steps: u32,
}

impl ModeStateMachine {
    /// Creates a state machine in `Off` with the frame counter at zero.
    pub fn new(config: &ChopperConfig) -> Self {
        Self {
            mode: Mode::Off,
            frame: 0,
            startup_steps: config.startup_steps,
        }
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the animation frame counter.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Handles a button press: moves to the next mode in the cycle.
    pub fn press(&mut self) -> Transition {
        self.transition_to(self.mode.next(), TransitionCause::Button)
    }

    /// Advances one animation step.
    ///
    /// The frame counter is incremented first and the returned step describes
    /// the current mode at the new frame. While in `Startup`, once the counter
    /// exceeds the startup length the machine moves to `Flying`; the step
    /// still renders the final startup frame.
    pub fn step(&mut self) -> FrameStep {
        self.frame = self.frame.wrapping_add(1);

        let mode = self.mode;
        let frame = self.frame;
        let cue = step_cue(mode, frame);
        let indicator = status_indicator(mode, frame);

        let transition = if mode == Mode::Startup && frame > self.startup_steps {
            Some(self.transition_to(Mode::Flying, TransitionCause::AutoAdvance))
        } else {
            None
        };

        FrameStep {
            mode,
            frame,
            cue,
            indicator,
            transition,
        }
    }

    fn transition_to(&mut self, to: Mode, cause: TransitionCause) -> Transition {
        let transition = Transition {
            from: self.mode,
            to,
            cause,
        };
        info!("mode {} -> {} ({})", transition.from, transition.to, cause);

        self.mode = to;
        self.frame = 0;
        transition
    }
}

/// Sound owed by a mode at a given frame.
pub fn step_cue(mode: Mode, frame: u32) -> Option<ToneCue> {
    match mode.engine() {
        EngineSound::Continuous => return Some(ToneCue::IdleHum),
        EngineSound::Intermittent if frame % 2 == 0 => return Some(ToneCue::IdleHum),
        _ => {}
    }

    if mode == Mode::Emergency && frame % ALARM_REPEAT_STEPS == 0 {
        return Some(ToneCue::Emergency);
    }
    None
}

/// Status indicator level for a mode at a given frame.
pub fn status_indicator(mode: Mode, frame: u32) -> bool {
    match mode {
        Mode::Off => false,
        Mode::Startup => (frame / 5) % 2 == 1,
        Mode::Flying => true,
        Mode::Landing => (frame / 10) % 2 == 1,
        Mode::Emergency => (frame / 3) % 2 == 1,
    }
}
