//! Per-frame LED strip animation.
//!
//! [`Renderer::render`] is a pure function of mode, frame counter and strip
//! length: every call overwrites every cell, so no stale state survives from
//! one frame to the next.

use crate::colors;
use crate::config::ChopperConfig;
use crate::types::{Mode, Pattern};
use palette::Srgb;

/// Steps per additional lit cell of the startup fill.
pub const STARTUP_FILL_STEPS: u32 = 5;

/// Steps per on/off phase of the emergency strobe.
pub const ALARM_FLASH_STEPS: u32 = 5;

/// Trait for abstracting an addressable RGB strip.
///
/// Writes are staged; nothing needs to be visible until [`LightStrip::show`].
pub trait LightStrip {
    /// Stages the colors of the whole strip, cell 0 first.
    ///
    /// Color components are in the range 0.0-1.0. Implementations should
    /// convert these to their hardware's native format and handle any
    /// hardware errors internally - this method cannot fail.
    fn write(&mut self, pixels: &[Srgb]);

    /// Latches the staged colors onto the LEDs.
    fn show(&mut self);
}

/// Draws mode animations into a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    rotor_blades: u32,
    nav_blink_steps: u32,
    strobe_steps: u32,
}

impl Renderer {
    /// Creates a renderer using the animation settings of `config`.
    ///
    /// Zero periods are treated as one so rendering stays total.
    pub fn new(config: &ChopperConfig) -> Self {
        Self {
            rotor_blades: config.rotor_blades.max(1),
            nav_blink_steps: config.nav_blink_steps.max(1),
            strobe_steps: config.strobe_steps.max(1),
        }
    }

    /// Overwrites every cell of `strip` with the frame for `mode` at `frame`.
    pub fn render(&self, mode: Mode, frame: u32, strip: &mut [Srgb]) {
        if strip.is_empty() {
            return;
        }

        match mode.pattern() {
            Pattern::Solid => strip.fill(colors::OFF),
            Pattern::Progressive => self.progressive_fill(frame, strip),
            Pattern::RotorNav => {
                self.rotor(frame, strip);
                self.navigation_lights(frame, strip);
            }
            Pattern::Strobe => self.alarm_strobe(frame, strip),
        }
    }

    fn progressive_fill(&self, frame: u32, strip: &mut [Srgb]) {
        let len = strip.len();
        let progress = (frame / STARTUP_FILL_STEPS) as usize % len;

        for (i, cell) in strip.iter_mut().enumerate() {
            *cell = if i <= progress {
                colors::STARTUP
            } else {
                colors::OFF
            };
        }
    }

    /// Clears `strip` and draws the rotating blades, each with a dim cell behind it.
    pub fn rotor(&self, frame: u32, strip: &mut [Srgb]) {
        if strip.is_empty() {
            return;
        }
        let len = strip.len();
        let spacing = len / self.rotor_blades as usize;
        let base = frame as usize % len;

        strip.fill(colors::OFF);
        for blade in 0..self.rotor_blades as usize {
            let position = (base + blade * spacing) % len;
            let trailing = (position + len - 1) % len;
            strip[position] = colors::BLADE;
            strip[trailing] = colors::BLADE_TRAIL;
        }
    }

    /// Overlays port/starboard lights at the ends and a strobe in the middle.
    pub fn navigation_lights(&self, frame: u32, strip: &mut [Srgb]) {
        if strip.is_empty() {
            return;
        }
        let last = strip.len() - 1;
        let nav_on = (frame / self.nav_blink_steps) % 2 == 1;

        strip[0] = if nav_on { colors::NAV_LEFT } else { colors::OFF };
        strip[last] = if nav_on { colors::NAV_RIGHT } else { colors::OFF };

        if (frame / self.strobe_steps) % 2 == 1 {
            strip[strip.len() / 2] = colors::STROBE;
        }
    }

    fn alarm_strobe(&self, frame: u32, strip: &mut [Srgb]) {
        let color = if (frame / ALARM_FLASH_STEPS) % 2 == 1 {
            colors::ALARM
        } else {
            colors::OFF
        };
        strip.fill(color);
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&ChopperConfig::default())
    }
}
