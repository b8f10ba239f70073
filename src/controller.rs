//! The cooperative control cycle and its hardware seams.
//!
//! [`Controller`] glues the pure input and timer components to three sink
//! traits. One [`service`](Controller::service) call is one control cycle;
//! run it from your main loop every few milliseconds. The encoder counter is
//! the only state shared with interrupt context, everything else lives in
//! the controller.

use palette::Srgb;

use crate::button::{Button, ButtonEvent};
use crate::colors::indicator_color;
use crate::display::{self, Screen};
use crate::encoder::EncoderCounter;
use crate::time::Clock;
use crate::timer::PomodoroTimer;
use crate::types::{Chime, Mode, Settings};

/// Duration of the phase-end beep.
pub const BEEP_MS: u32 = 150;

/// Fanfare note frequency.
pub const FANFARE_HZ: u32 = 1500;

/// Fanfare note on and off time.
pub const FANFARE_NOTE_MS: u32 = 100;

/// Silence between fanfare repetitions.
pub const FANFARE_GAP_MS: u32 = 150;

/// Trait for abstracting the two-line character display.
///
/// Called only when the screen content changes. Handle any hardware errors
/// internally - this method cannot fail.
pub trait TextDisplay {
    /// Replaces the entire display content.
    fn show(&mut self, screen: &Screen);
}

/// Trait for abstracting the RGB mode indicator.
///
/// Called once per mode change with that mode's fixed color. Implementations
/// are expected to ramp smoothly toward the target rather than jump;
/// blocking for the ramp is acceptable under the cooperative model (the
/// countdown gate absorbs the stall by losing, not fast-forwarding, time).
/// Handle any hardware errors internally - this method cannot fail.
pub trait IndicatorLed {
    /// Sets (or starts ramping toward) the given color.
    fn set_color(&mut self, color: Srgb);
}

/// Trait for abstracting the piezo buzzer.
///
/// Both methods block for the stated duration; chime patterns rely on that
/// for their spacing. Handle any hardware errors internally - these methods
/// cannot fail.
pub trait Buzzer {
    /// Plays a tone at the given frequency for the given duration.
    fn tone(&mut self, freq_hz: u32, duration_ms: u32);

    /// Stays silent for the given duration.
    fn rest(&mut self, duration_ms: u32);
}

/// Runs the Pomodoro control cycle against real hardware.
///
/// Owns the display, indicator and buzzer, borrows the clock and the shared
/// encoder counter. The button level is passed into each cycle rather than
/// abstracted behind a trait because it is a plain level sample with no
/// timing of its own.
pub struct Controller<'a, C: Clock, D: TextDisplay, L: IndicatorLed, B: Buzzer> {
    clock: &'a C,
    encoder: &'a EncoderCounter,
    display: D,
    indicator: L,
    buzzer: B,
    button: Button,
    timer: PomodoroTimer,
    shown_mode: Option<Mode>,
}

impl<'a, C: Clock, D: TextDisplay, L: IndicatorLed, B: Buzzer> Controller<'a, C, D, L, B> {
    /// Creates a controller in the first edit mode.
    ///
    /// Nothing is pushed to the sinks until the first [`service`] call.
    ///
    /// [`service`]: Controller::service
    pub fn new(
        clock: &'a C,
        encoder: &'a EncoderCounter,
        display: D,
        indicator: L,
        buzzer: B,
        settings: Settings,
    ) -> Self {
        Self {
            clock,
            encoder,
            display,
            indicator,
            buzzer,
            button: Button::new(),
            timer: PomodoroTimer::new(settings),
            shown_mode: None,
        }
    }

    /// Runs one control cycle.
    ///
    /// Drains the encoder counter, classifies the sampled button level,
    /// advances the countdown, and pushes display, indicator and buzzer
    /// updates. `button_pressed` is the instantaneous, polarity-corrected
    /// button level.
    pub fn service(&mut self, button_pressed: bool) {
        let now = self.clock.now_millis();

        let detents = self.encoder.drain();
        if detents != 0 {
            self.timer.handle_detents(detents);
        }

        let running = self.timer.mode().is_running();
        match self.button.poll(button_pressed, now, running) {
            Some(ButtonEvent::Activate) => self.timer.handle_activate(now),
            Some(ButtonEvent::Skip) => self.timer.handle_skip(),
            None => {}
        }

        if let Some(chime) = self.timer.tick(now) {
            self.play(chime);
        }

        if self.timer.take_dirty() {
            let screen = display::screen(
                self.timer.mode(),
                self.timer.settings(),
                self.timer.run_state(),
            );
            self.display.show(&screen);
        }

        let mode = self.timer.mode();
        if self.shown_mode != Some(mode) {
            self.shown_mode = Some(mode);
            self.indicator.set_color(indicator_color(mode));
        }
    }

    /// Returns the timer state machine for inspection.
    pub fn timer(&self) -> &PomodoroTimer {
        &self.timer
    }

    fn play(&mut self, chime: Chime) {
        self.buzzer
            .tone(self.timer.settings().buzzer_tone_hz, BEEP_MS);

        if chime == Chime::Completion {
            for repetition in 0..3 {
                if repetition > 0 {
                    self.buzzer.rest(FANFARE_GAP_MS);
                }
                self.buzzer.tone(FANFARE_HZ, FANFARE_NOTE_MS);
                self.buzzer.rest(FANFARE_NOTE_MS);
            }
        }
    }
}
