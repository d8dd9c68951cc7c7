//! Device capabilities consumed by the controller.
//!
//! Device construction happens once at startup, outside the core. A device
//! that fails to come up is turned into `None` by [`probe`] and every
//! capability trait is implemented for `Option<T>` as a silent sink, so the
//! controller never sees a device error at runtime.

use crate::render::LightStrip;
use crate::sequencer::ToneEmitter;
use palette::Srgb;

/// Trait for the mode button.
pub trait DigitalInput {
    /// Returns `true` while the button is physically held down.
    fn is_pressed(&mut self) -> bool;
}

/// Trait for the single on/off status LED.
pub trait StatusOutput {
    /// Drives the indicator on or off.
    fn set(&mut self, on: bool);
}

/// A peripheral that failed to initialize or is not fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceUnavailable {
    /// Addressable LED strip.
    LightStrip,

    /// Buzzer or speaker.
    ToneEmitter,

    /// Mode button.
    Button,

    /// Status LED.
    StatusOutput,
}

impl core::fmt::Display for DeviceUnavailable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DeviceUnavailable::LightStrip => write!(f, "LED strip not connected"),
            DeviceUnavailable::ToneEmitter => write!(f, "buzzer not connected"),
            DeviceUnavailable::Button => write!(f, "button not connected"),
            DeviceUnavailable::StatusOutput => write!(f, "status LED not connected"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeviceUnavailable {}

/// Converts a device construction result into an optional capability.
///
/// Failure is logged once here and never re-checked.
pub fn probe<T>(device: Result<T, DeviceUnavailable>) -> Option<T> {
    match device {
        Ok(device) => Some(device),
        Err(_err) => {
            warn!("{}, continuing without it", _err);
            None
        }
    }
}

/// Adapts an active-low raw input (pressed reads `false`) to [`DigitalInput`].
pub struct Inverted<F>(pub F);

impl<F: FnMut() -> bool> DigitalInput for Inverted<F> {
    fn is_pressed(&mut self) -> bool {
        !(self.0)()
    }
}

impl<T: LightStrip> LightStrip for Option<T> {
    fn write(&mut self, pixels: &[Srgb]) {
        if let Some(strip) = self {
            strip.write(pixels);
        }
    }

    fn show(&mut self) {
        if let Some(strip) = self {
            strip.show();
        }
    }
}

impl<T: ToneEmitter> ToneEmitter for Option<T> {
    fn set_frequency(&mut self, frequency_hz: u32) {
        if let Some(emitter) = self {
            emitter.set_frequency(frequency_hz);
        }
    }

    fn set_intensity(&mut self, intensity: f32) {
        if let Some(emitter) = self {
            emitter.set_intensity(intensity);
        }
    }

    fn is_available(&self) -> bool {
        self.as_ref().is_some_and(ToneEmitter::is_available)
    }
}

impl<T: DigitalInput> DigitalInput for Option<T> {
    fn is_pressed(&mut self) -> bool {
        self.as_mut().is_some_and(DigitalInput::is_pressed)
    }
}

impl<T: StatusOutput> StatusOutput for Option<T> {
    fn set(&mut self, on: bool) {
        if let Some(output) = self {
            output.set(on);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Level(bool);

    impl StatusOutput for Level {
        fn set(&mut self, on: bool) {
            self.0 = on;
        }
    }

    #[test]
    fn probe_absorbs_missing_devices() {
        let missing: Option<Level> = probe(Err(DeviceUnavailable::StatusOutput));
        assert!(missing.is_none());

        let mut present = probe(Ok(Level(false)));
        present.set(true);
        assert!(present.is_some_and(|level| level.0));
    }

    #[test]
    fn inverted_reads_active_low() {
        let mut raw = false;
        let mut button = Inverted(|| {
            raw = !raw;
            raw
        });
        // First read returns raw = true (released).
        assert!(!button.is_pressed());
        assert!(button.is_pressed());
    }

    #[test]
    fn missing_button_never_presses() {
        let mut button: Option<Inverted<fn() -> bool>> = None;
        assert!(!button.is_pressed());
    }
}
