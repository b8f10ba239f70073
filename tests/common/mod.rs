//! Shared test infrastructure for pomodoro-controller integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::{Cell, RefCell};

use palette::Srgb;
use pomodoro_controller::{Buzzer, Clock, IndicatorLed, Screen, TextDisplay};

// ============================================================================
// Mock Clock
// ============================================================================

/// Mock monotonic clock with controllable time advancement
pub struct MockClock {
    now: Cell<u64>,
}

impl MockClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0) }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get() + millis);
    }

    pub fn set(&self, millis: u64) {
        self.now.set(millis);
    }
}

impl Clock for MockClock {
    fn now_millis(&self) -> u64 {
        self.now.get()
    }
}

// ============================================================================
// Recording sinks
// ============================================================================
//
// The controller takes its sinks by value, so the recording state lives
// behind shared references: construct the recorder, hand `&recorder` to the
// controller, and inspect the recorder afterwards.

/// Records every screen pushed to the display
pub struct RecordingDisplay {
    screens: RefCell<Vec<Screen>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self {
            screens: RefCell::new(Vec::new()),
        }
    }

    pub fn screens(&self) -> Vec<Screen> {
        self.screens.borrow().clone()
    }

    pub fn last_screen(&self) -> Option<Screen> {
        self.screens.borrow().last().cloned()
    }

    pub fn push_count(&self) -> usize {
        self.screens.borrow().len()
    }
}

impl TextDisplay for &RecordingDisplay {
    fn show(&mut self, screen: &Screen) {
        self.screens.borrow_mut().push(screen.clone());
    }
}

/// Records every color pushed to the indicator
pub struct RecordingIndicator {
    colors: RefCell<Vec<Srgb>>,
}

impl RecordingIndicator {
    pub fn new() -> Self {
        Self {
            colors: RefCell::new(Vec::new()),
        }
    }

    pub fn colors(&self) -> Vec<Srgb> {
        self.colors.borrow().clone()
    }

    pub fn last_color(&self) -> Option<Srgb> {
        self.colors.borrow().last().copied()
    }

    pub fn push_count(&self) -> usize {
        self.colors.borrow().len()
    }
}

impl IndicatorLed for &RecordingIndicator {
    fn set_color(&mut self, color: Srgb) {
        self.colors.borrow_mut().push(color);
    }
}

/// One buzzer call, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuzzerEvent {
    Tone { freq_hz: u32, duration_ms: u32 },
    Rest { duration_ms: u32 },
}

/// Records every tone and rest in call order
pub struct RecordingBuzzer {
    events: RefCell<Vec<BuzzerEvent>>,
}

impl RecordingBuzzer {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<BuzzerEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl Buzzer for &RecordingBuzzer {
    fn tone(&mut self, freq_hz: u32, duration_ms: u32) {
        self.events.borrow_mut().push(BuzzerEvent::Tone {
            freq_hz,
            duration_ms,
        });
    }

    fn rest(&mut self, duration_ms: u32) {
        self.events
            .borrow_mut()
            .push(BuzzerEvent::Rest { duration_ms });
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
