//! The Pomodoro timer state machine.
//!
//! [`PomodoroTimer`] owns the mode, settings and countdown state and is the
//! single place transitions happen. It is pure with respect to hardware:
//! inputs arrive as already-classified events plus a millisecond timestamp,
//! and phase boundaries come back as [`Chime`]s for the caller to sound.

use crate::adjust::{adjust_setting, adjust_tone};
use crate::types::{Chime, Mode, RunState, Settings};

/// Length of the long break following the final work session.
pub const LONG_BREAK_MINUTES: u32 = 15;

/// Countdown tick interval.
const TICK_MS: u64 = 1000;

/// The timer state machine. Starts in [`Mode::EditWork`].
#[derive(Debug)]
pub struct PomodoroTimer {
    mode: Mode,
    settings: Settings,
    run: RunState,
    last_tick: u64,
    dirty: bool,
}

impl PomodoroTimer {
    /// Creates a timer in the first edit mode with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            mode: Mode::EditWork,
            settings,
            run: RunState::idle(),
            last_tick: 0,
            dirty: true,
        }
    }

    /// Returns the current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the current countdown state.
    ///
    /// Meaningful only after leaving [`Mode::Waiting`]; reset to session 1
    /// whenever the timer is (re)started.
    pub fn run_state(&self) -> &RunState {
        &self.run
    }

    /// Handles a debounced button activation.
    ///
    /// Cycles through the edit modes, starts the countdown from
    /// [`Mode::Waiting`], and returns from [`Mode::Complete`] to the first
    /// edit mode. Ignored while a countdown runs; skipping is a separate
    /// signal with its own gesture.
    pub fn handle_activate(&mut self, now_millis: u64) {
        let next = match self.mode {
            Mode::EditWork => Mode::EditBreak,
            Mode::EditBreak => Mode::EditSession,
            Mode::EditSession => Mode::EditBuzzerTone,
            Mode::EditBuzzerTone => Mode::Waiting,
            Mode::Waiting => {
                self.run = RunState {
                    session: 1,
                    remaining_seconds: u32::from(self.settings.work_minutes) * 60,
                };
                self.last_tick = now_millis;
                Mode::Working
            }
            Mode::Complete => Mode::EditWork,
            Mode::Working | Mode::OnBreak | Mode::LongBreak => return,
        };

        self.mode = next;
        self.dirty = true;
    }

    /// Applies drained encoder detents to the setting being edited.
    ///
    /// Ignored outside edit modes; deltas drained there are discarded.
    pub fn handle_detents(&mut self, delta: i32) {
        if delta == 0 {
            return;
        }

        match self.mode {
            Mode::EditWork => {
                self.settings.work_minutes = adjust_setting(self.settings.work_minutes, delta);
            }
            Mode::EditBreak => {
                self.settings.break_minutes = adjust_setting(self.settings.break_minutes, delta);
            }
            Mode::EditSession => {
                self.settings.total_sessions = adjust_setting(self.settings.total_sessions, delta);
            }
            Mode::EditBuzzerTone => {
                self.settings.buzzer_tone_hz = adjust_tone(self.settings.buzzer_tone_hz, delta);
            }
            Mode::Waiting
            | Mode::Working
            | Mode::OnBreak
            | Mode::LongBreak
            | Mode::Complete => return,
        }

        self.dirty = true;
    }

    /// Forces the current phase to end.
    ///
    /// Drops the remaining time to zero; the next tick then processes the
    /// boundary exactly as a natural expiry. Ignored outside running modes.
    pub fn handle_skip(&mut self) {
        if self.mode.is_running() {
            self.run.remaining_seconds = 0;
            self.dirty = true;
        }
    }

    /// Advances the countdown on the 1 Hz edge.
    ///
    /// Call once per control cycle with the monotonic clock. Fires at most
    /// once per elapsed second and never catches up: if cycles stall (for
    /// example during a blocking fade), the timer loses real time rather
    /// than fast-forwarding.
    ///
    /// Returns the chime to sound when a phase boundary is crossed.
    pub fn tick(&mut self, now_millis: u64) -> Option<Chime> {
        if !self.mode.is_running() {
            return None;
        }
        if now_millis.saturating_sub(self.last_tick) < TICK_MS {
            return None;
        }
        self.last_tick = now_millis;

        if self.run.remaining_seconds > 0 {
            self.run.remaining_seconds -= 1;
            self.dirty = true;
        }
        if self.run.remaining_seconds > 0 {
            return None;
        }

        Some(self.finish_phase())
    }

    /// Takes the render flag, true if anything user-visible changed since
    /// the last take.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    fn finish_phase(&mut self) -> Chime {
        self.dirty = true;

        match self.mode {
            Mode::Working if self.run.session < self.settings.total_sessions => {
                self.mode = Mode::OnBreak;
                self.run.remaining_seconds = u32::from(self.settings.break_minutes) * 60;
                Chime::PhaseEnd
            }
            Mode::Working => {
                self.mode = Mode::LongBreak;
                self.run.remaining_seconds = LONG_BREAK_MINUTES * 60;
                Chime::Completion
            }
            Mode::OnBreak => {
                self.mode = Mode::Working;
                self.run.session += 1;
                self.run.remaining_seconds = u32::from(self.settings.work_minutes) * 60;
                Chime::PhaseEnd
            }
            Mode::LongBreak => {
                self.mode = Mode::Complete;
                Chime::PhaseEnd
            }
            // Unreachable: tick returns early for non-running modes.
            _ => Chime::PhaseEnd,
        }
    }
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
