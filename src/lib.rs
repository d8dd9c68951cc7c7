#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Mode`**: The five operating modes, cycled by the button
//! - **`ModeStateMachine`**: Owns the active mode and the animation frame counter
//! - **`Debouncer`**: Turns raw button samples into single press events
//! - **`Renderer`**: Draws one animation frame for a mode into a pixel buffer
//! - **`ToneSequencer`**: Plays the blocking sound effects
//! - **`ChopperController`**: The fixed-tick loop gluing everything together
//! - **`LightStrip`**, **`ToneEmitter`**, **`DigitalInput`**, **`StatusOutput`**: Traits to implement for your hardware
//! - **`TimeSource`**, **`Delay`**: Traits to implement for your timing system
//!
//! The library uses `Srgb<f32>` (0.0-1.0 range) for all colors. When
//! implementing `LightStrip` for your hardware, convert these values to your
//! device's native format (see [`colors::to_rgb8`]).

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

#[macro_use]
mod fmt;

pub mod colors;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod devices;
pub mod machine;
pub mod render;
pub mod sequencer;
pub mod time;
pub mod tone;
pub mod types;

pub use config::{ChopperConfig, ConfigError};
pub use controller::{ChopperController, Peripherals, SetupError};
pub use debounce::Debouncer;
pub use devices::{DeviceUnavailable, DigitalInput, Inverted, StatusOutput, probe};
pub use machine::{FrameStep, ModeStateMachine};
pub use render::{LightStrip, Renderer};
pub use sequencer::{ToneEmitter, ToneSequencer};
pub use time::{Delay, TimeDuration, TimeInstant, TimeSource};
pub use tone::{ToneError, ToneSegment, ToneSequence, ToneSequenceBuilder};
pub use types::{EngineSound, Mode, Pattern, ToneCue, Transition, TransitionCause};
