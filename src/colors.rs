//! Named colors and conversion helpers.
//!
//! All colors are `palette::Srgb` in the 0.0-1.0 range.

use palette::Srgb;

pub const OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const WHITE: Srgb = Srgb::new(1.0, 1.0, 1.0);
pub const YELLOW: Srgb = Srgb::new(1.0, 1.0, 0.0);
pub const DIM_WHITE: Srgb = Srgb::new(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0);

/// Fill color of the startup progress bar.
pub const STARTUP: Srgb = YELLOW;
/// Leading cell of a rotor blade.
pub const BLADE: Srgb = WHITE;
/// Cell trailing each rotor blade.
pub const BLADE_TRAIL: Srgb = DIM_WHITE;
/// Port navigation light (cell 0).
pub const NAV_LEFT: Srgb = RED;
/// Starboard navigation light (last cell).
pub const NAV_RIGHT: Srgb = GREEN;
/// Anti-collision strobe (center cell).
pub const STROBE: Srgb = WHITE;
/// Emergency flash color.
pub const ALARM: Srgb = RED;

/// Scales a color by a brightness factor, clamped to 0.0-1.0.
#[inline]
pub fn scale(color: Srgb, brightness: f32) -> Srgb {
    let b = brightness.clamp(0.0, 1.0);
    Srgb::new(color.red * b, color.green * b, color.blue * b)
}

/// Converts a color to 8-bit components for byte-oriented drivers.
#[inline]
pub fn to_rgb8(color: Srgb) -> (u8, u8, u8) {
    let c: Srgb<u8> = color.into_format();
    (c.red, c.green, c.blue)
}
