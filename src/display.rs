//! Two-line screen text for a 16-column character display.

use core::fmt::Write;

use heapless::String;

use crate::types::{Mode, RunState, Settings};

/// Width of one display line in characters.
pub const LINE_WIDTH: usize = 16;

/// The full content of the character display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    pub line1: String<LINE_WIDTH>,
    pub line2: String<LINE_WIDTH>,
}

/// Renders the mode-appropriate screen text.
///
/// Every string fits the 16-column budget given the clamped settings ranges,
/// so the capacity results of the formatting writes are discarded.
pub fn screen(mode: Mode, settings: &Settings, run: &RunState) -> Screen {
    let mut out = Screen::default();

    match mode {
        Mode::EditWork => {
            let _ = out.line1.push_str("Set Work Time");
            let _ = write!(out.line2, "Work: {} min", settings.work_minutes);
        }
        Mode::EditBreak => {
            let _ = out.line1.push_str("Set Break Time");
            let _ = write!(out.line2, "Break: {} min", settings.break_minutes);
        }
        Mode::EditSession => {
            let _ = out.line1.push_str("Set Sessions");
            let _ = write!(out.line2, "Sessions: {}", settings.total_sessions);
        }
        Mode::EditBuzzerTone => {
            let _ = out.line1.push_str("Set Buzzer Tone");
            let _ = write!(out.line2, "Freq: {} Hz", settings.buzzer_tone_hz);
        }
        Mode::Waiting => {
            let _ = out.line1.push_str("Pomodoro");
            let _ = out.line2.push_str("Press to start");
        }
        Mode::Working => {
            let _ = write!(out.line1, "Work {}/{}", run.session, settings.total_sessions);
            write_countdown(&mut out.line2, run.remaining_seconds);
        }
        Mode::OnBreak => {
            let _ = write!(
                out.line1,
                "Break {}/{}",
                run.session, settings.total_sessions
            );
            write_countdown(&mut out.line2, run.remaining_seconds);
        }
        Mode::LongBreak => {
            let _ = out.line1.push_str("Long Break");
            write_countdown(&mut out.line2, run.remaining_seconds);
        }
        Mode::Complete => {
            let _ = out.line1.push_str("Pomodoro");
            let _ = out.line2.push_str("Complete!");
        }
    }

    out
}

fn write_countdown(line: &mut String<LINE_WIDTH>, remaining_seconds: u32) {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    let _ = write!(line, "Time: {minutes:02}:{seconds:02}");
}
