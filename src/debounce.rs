//! Press detection for the mode button.

/// Turns per-tick raw button samples into single press events.
///
/// A press is reported on the sample where the input goes from released to
/// pressed. There is no debounce timer: sampling at the poll rate is the
/// only noise filter. An event is reported for exactly one call and never
/// queued.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    previous_pressed: bool,
}

impl Debouncer {
    /// Creates a debouncer that assumes the button starts released.
    pub const fn new() -> Self {
        Self {
            previous_pressed: false,
        }
    }

    /// Consumes one raw sample, returning `true` on a released-to-pressed edge.
    pub fn sample(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.previous_pressed;
        self.previous_pressed = pressed;
        edge
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
