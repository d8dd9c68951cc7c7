//! Host simulator: runs the controller against console-backed devices.
//!
//! The strip is drawn as a row of glyphs, tones are printed as they start and
//! the button is pressed at random (about 1 % of polls). Stop with Ctrl+C.

use std::io::Write;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use baby_chopper::{
    ChopperConfig, ChopperController, Delay, DigitalInput, LightStrip, Peripherals, Srgb,
    StatusOutput, TimeDuration, TimeInstant, TimeSource, ToneEmitter, colors,
};

const STRIP_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
struct SimDuration(Duration);

impl TimeDuration for SimDuration {
    fn as_millis(&self) -> u64 {
        self.0.as_millis() as u64
    }

    fn from_millis(millis: u64) -> Self {
        SimDuration(Duration::from_millis(millis))
    }
}

#[derive(Debug, Clone, Copy)]
struct SimInstant(Instant);

impl TimeInstant for SimInstant {
    type Duration = SimDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        SimDuration(self.0.saturating_duration_since(earlier.0))
    }
}

struct HostClock;

impl TimeSource<SimInstant> for HostClock {
    fn now(&self) -> SimInstant {
        SimInstant(Instant::now())
    }
}

struct ThreadDelay;

impl Delay<SimDuration> for ThreadDelay {
    fn delay(&mut self, duration: SimDuration) {
        std::thread::sleep(duration.0);
    }
}

/// Prints the strip whenever it is latched.
struct ConsoleStrip {
    staged: [Srgb; STRIP_LEN],
    last_line: String,
}

impl ConsoleStrip {
    fn glyph(color: Srgb) -> char {
        let (r, g, b) = colors::to_rgb8(color);
        match (r, g, b) {
            (0, 0, 0) => '○',
            _ if r == g && g == b && r > 60 => '●',
            (_, 0, 0) => 'R',
            (0, _, 0) => 'G',
            _ => '◐',
        }
    }
}

impl LightStrip for ConsoleStrip {
    fn write(&mut self, pixels: &[Srgb]) {
        for (cell, pixel) in self.staged.iter_mut().zip(pixels) {
            *cell = *pixel;
        }
    }

    fn show(&mut self) {
        let line: String = self.staged.iter().map(|c| Self::glyph(*c)).collect();
        if line != self.last_line {
            println!("LEDs: {line}");
            self.last_line = line;
        }
    }
}

/// Prints each note as it starts.
struct ConsoleBuzzer {
    frequency_hz: u32,
}

impl ToneEmitter for ConsoleBuzzer {
    fn set_frequency(&mut self, frequency_hz: u32) {
        self.frequency_hz = frequency_hz;
    }

    fn set_intensity(&mut self, intensity: f32) {
        if intensity > 0.0 {
            let glyph = match self.frequency_hz {
                0..300 => '♪',
                300..600 => '♫',
                _ => '♬',
            };
            println!("Sound: {glyph} {}Hz", self.frequency_hz);
        }
    }
}

/// Presses for exactly one poll, at random.
struct RandomButton {
    rng: fastrand::Rng,
    presses: u32,
}

impl DigitalInput for RandomButton {
    fn is_pressed(&mut self) -> bool {
        if self.rng.u8(1..=100) == 1 {
            self.presses += 1;
            println!("Button pressed! (#{})", self.presses);
            true
        } else {
            false
        }
    }
}

struct ConsoleIndicator {
    on: Option<bool>,
}

impl StatusOutput for ConsoleIndicator {
    fn set(&mut self, on: bool) {
        if self.on != Some(on) {
            println!("Status LED: {}", if on { "on" } else { "off" });
            self.on = Some(on);
        }
    }
}

fn main() {
    println!("Baby Chopper Simulator");
    println!("{}", "=".repeat(40));
    println!("OFF -> STARTUP -> FLYING -> LANDING -> EMERGENCY -> OFF");
    println!("Press Ctrl+C to stop\n");
    let _ = std::io::stdout().flush();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);

    let peripherals = Peripherals {
        strip: ConsoleStrip {
            staged: [colors::OFF; STRIP_LEN],
            last_line: String::new(),
        },
        tone: ConsoleBuzzer { frequency_hz: 0 },
        button: RandomButton {
            rng: fastrand::Rng::with_seed(seed),
            presses: 0,
        },
        indicator: ConsoleIndicator { on: None },
    };
    let config = ChopperConfig {
        rng_seed: seed,
        ..ChopperConfig::default()
    };

    let clock = HostClock;
    let mut chopper = match ChopperController::<_, _, _, _, _, _, _, STRIP_LEN>::new(
        peripherals,
        &clock,
        ThreadDelay,
        &config,
    ) {
        Ok(chopper) => chopper,
        Err(err) => {
            eprintln!("failed to start: {err}");
            std::process::exit(1);
        }
    };

    chopper.boot();
    chopper.run()
}
