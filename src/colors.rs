//! Fixed indicator colors per mode.
//!
//! One `Srgb` triple per mode; the smooth ramp between colors is the LED
//! driver's concern. Components are in the 0.0-1.0 range. Convert to your
//! hardware's native format (8-bit values, PWM duty cycles) in the
//! [`IndicatorLed`](crate::controller::IndicatorLed) implementation.

use palette::Srgb;

use crate::types::Mode;

pub const EDIT_WORK: Srgb = Srgb::new(1.0, 0.5, 0.0);
pub const EDIT_BREAK: Srgb = Srgb::new(1.0, 0.8, 0.0);
pub const EDIT_SESSION: Srgb = Srgb::new(1.0, 0.3, 0.3);
pub const EDIT_BUZZER_TONE: Srgb = Srgb::new(1.0, 0.0, 0.6);
pub const WAITING: Srgb = Srgb::new(1.0, 1.0, 1.0);
pub const WORKING: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const ON_BREAK: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const LONG_BREAK: Srgb = Srgb::new(0.0, 0.3, 1.0);
pub const COMPLETE: Srgb = Srgb::new(0.6, 0.0, 1.0);

/// Returns the fixed indicator color for a mode.
pub fn indicator_color(mode: Mode) -> Srgb {
    match mode {
        Mode::EditWork => EDIT_WORK,
        Mode::EditBreak => EDIT_BREAK,
        Mode::EditSession => EDIT_SESSION,
        Mode::EditBuzzerTone => EDIT_BUZZER_TONE,
        Mode::Waiting => WAITING,
        Mode::Working => WORKING,
        Mode::OnBreak => ON_BREAK,
        Mode::LongBreak => LONG_BREAK,
        Mode::Complete => COMPLETE,
    }
}
