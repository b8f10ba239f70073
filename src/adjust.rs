//! Pure value-adjustment helpers for encoder-driven settings.

/// Lower bound for minute and session settings.
pub const SETTING_MIN: u16 = 1;

/// Upper bound for minute and session settings.
pub const SETTING_MAX: u16 = 250;

/// Quantization step for minute and session settings.
pub const SETTING_STEP: i32 = 5;

/// Lower bound for the buzzer tone frequency in hertz.
pub const TONE_MIN_HZ: u32 = 100;

/// Frequency change per encoder detent in hertz.
pub const TONE_STEP_HZ: i32 = 50;

/// Applies an encoder delta to a minute or session setting.
///
/// Adds the delta, truncates toward zero to the lower multiple of 5, then
/// clamps to [1, 250]. The truncation is deliberately lossy and
/// path-dependent: repeated single detents can keep landing on the same
/// multiple of 5 until the sum crosses the next boundary (24 becomes 20, not
/// 25). This matches the feel of the device this core was written for; do
/// not change it to round-to-nearest without flagging the semantic change.
pub fn adjust_setting(base: u16, delta: i32) -> u16 {
    let raw = i32::from(base) + delta;
    let quantized = raw / SETTING_STEP * SETTING_STEP;
    quantized.clamp(i32::from(SETTING_MIN), i32::from(SETTING_MAX)) as u16
}

/// Applies an encoder delta to the buzzer tone frequency.
///
/// Steps by 50 Hz per detent with a floor of 100 Hz. No upper bound and no
/// quantization beyond the step size.
pub fn adjust_tone(freq_hz: u32, delta: i32) -> u32 {
    let raw = freq_hz as i64 + i64::from(delta) * i64::from(TONE_STEP_HZ);
    raw.max(i64::from(TONE_MIN_HZ)) as u32
}
