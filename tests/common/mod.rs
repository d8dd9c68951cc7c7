//! Shared test infrastructure for baby-chopper integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use baby_chopper::{
    ChopperConfig, ChopperController, Delay, DigitalInput, LightStrip, Peripherals, StatusOutput,
    TimeDuration, TimeInstant, TimeSource, ToneEmitter,
};
use palette::Srgb;

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Time Source and Delay
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

/// Delay that moves the mock clock forward instead of sleeping
pub struct MockDelay<'a> {
    clock: &'a MockTimeSource,
    pub total_ms: u64,
}

impl<'a> MockDelay<'a> {
    pub fn new(clock: &'a MockTimeSource) -> Self {
        Self { clock, total_ms: 0 }
    }
}

impl Delay<TestDuration> for MockDelay<'_> {
    fn delay(&mut self, duration: TestDuration) {
        self.clock.advance(duration.0);
        self.total_ms += duration.0;
    }
}

// ============================================================================
// Mock Devices
// ============================================================================

/// Mock LED strip that keeps the last shown frame
pub struct MockStrip {
    staged: heapless::Vec<Srgb, 16>,
    shown: heapless::Vec<Srgb, 16>,
    pub show_count: u32,
}

impl MockStrip {
    pub fn new() -> Self {
        Self {
            staged: heapless::Vec::new(),
            shown: heapless::Vec::new(),
            show_count: 0,
        }
    }

    pub fn shown(&self) -> &[Srgb] {
        &self.shown
    }

    pub fn is_dark(&self) -> bool {
        self.shown.iter().all(|c| *c == Srgb::new(0.0, 0.0, 0.0))
    }
}

impl LightStrip for MockStrip {
    fn write(&mut self, pixels: &[Srgb]) {
        self.staged.clear();
        let _ = self.staged.extend_from_slice(pixels);
    }

    fn show(&mut self) {
        self.shown = self.staged.clone();
        self.show_count += 1;
    }
}

/// Mock buzzer that records every note started
pub struct MockBuzzer {
    frequencies: heapless::Vec<u32, 256>,
    pub notes: u32,
    pub intensity: f32,
}

impl MockBuzzer {
    pub fn new() -> Self {
        Self {
            frequencies: heapless::Vec::new(),
            notes: 0,
            intensity: 0.0,
        }
    }

    pub fn frequencies(&self) -> &[u32] {
        &self.frequencies
    }
}

impl ToneEmitter for MockBuzzer {
    fn set_frequency(&mut self, frequency_hz: u32) {
        self.notes += 1;
        let _ = self.frequencies.push(frequency_hz);
    }

    fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }
}

/// Mock button whose level is set by the test
pub struct MockButton {
    pub pressed: bool,
}

impl DigitalInput for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.pressed
    }
}

/// Mock status LED
pub struct MockIndicator {
    pub on: bool,
    pub writes: u32,
}

impl StatusOutput for MockIndicator {
    fn set(&mut self, on: bool) {
        self.on = on;
        self.writes += 1;
    }
}

// ============================================================================
// Controller helpers
// ============================================================================

pub const STRIP_LEN: usize = 10;

pub type TestController<'t, S, E> = ChopperController<
    't,
    TestInstant,
    MockTimeSource,
    MockDelay<'t>,
    S,
    E,
    MockButton,
    MockIndicator,
    STRIP_LEN,
>;

/// Controller with every mock device attached
pub fn controller(clock: &MockTimeSource) -> TestController<'_, MockStrip, MockBuzzer> {
    let peripherals = Peripherals {
        strip: MockStrip::new(),
        tone: MockBuzzer::new(),
        button: MockButton { pressed: false },
        indicator: MockIndicator { on: false, writes: 0 },
    };
    ChopperController::new(
        peripherals,
        clock,
        MockDelay::new(clock),
        &ChopperConfig::default(),
    )
    .unwrap()
}

/// Press and release the button over two polls
pub fn tap<S: LightStrip, E: ToneEmitter>(controller: &mut TestController<'_, S, E>) {
    controller.button_mut().pressed = true;
    controller.poll();
    controller.button_mut().pressed = false;
    controller.poll();
}

/// Let one animation interval pass and poll once
pub fn step<S: LightStrip, E: ToneEmitter>(
    clock: &MockTimeSource,
    controller: &mut TestController<'_, S, E>,
) {
    clock.advance(100);
    controller.poll();
}

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
