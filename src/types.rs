//! Core data types for the timer state machine.

/// The current mode of the controller.
///
/// Exactly one mode is current at any time. Button semantics are determined
/// solely by mode class: running modes interpret a long hold as a skip, all
/// other modes interpret a short press as an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Adjusting work phase length.
    EditWork,

    /// Adjusting break phase length.
    EditBreak,

    /// Adjusting the number of work sessions.
    EditSession,

    /// Adjusting the buzzer tone frequency.
    EditBuzzerTone,

    /// Configured, waiting for the start press.
    Waiting,

    /// Work phase counting down.
    Working,

    /// Break between work sessions counting down.
    OnBreak,

    /// Extended rest after the final work session counting down.
    LongBreak,

    /// All sessions and the long break finished.
    Complete,
}

impl Mode {
    /// Returns true while a countdown phase is active.
    pub fn is_running(self) -> bool {
        matches!(self, Mode::Working | Mode::OnBreak | Mode::LongBreak)
    }

    /// Returns true while a setting is being adjusted.
    pub fn is_edit(self) -> bool {
        matches!(
            self,
            Mode::EditWork | Mode::EditBreak | Mode::EditSession | Mode::EditBuzzerTone
        )
    }
}

/// User-adjustable configuration.
///
/// Each field is adjustable only while its corresponding edit mode is
/// current. The minute and session values stay within [1, 250] and land on
/// multiples of 5 after adjustment; the tone frequency stays at or above
/// 100 Hz. Settings are not persisted across power loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Work phase length in minutes.
    pub work_minutes: u16,

    /// Break phase length in minutes.
    pub break_minutes: u16,

    /// Number of work sessions before the long break.
    pub total_sessions: u16,

    /// Buzzer tone frequency in hertz.
    pub buzzer_tone_hz: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_minutes: 25,
            break_minutes: 5,
            total_sessions: 4,
            buzzer_tone_hz: 1000,
        }
    }
}

/// Countdown state while a session sequence is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunState {
    /// Current work session, 1-based up to `Settings::total_sessions`.
    pub session: u16,

    /// Seconds left in the current phase.
    pub remaining_seconds: u32,
}

impl RunState {
    pub(crate) fn idle() -> Self {
        Self {
            session: 1,
            remaining_seconds: 0,
        }
    }
}

/// Audio outcome of a phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Chime {
    /// A phase ended; play a single beep.
    PhaseEnd,

    /// The final work session ended; play the beep plus the fanfare.
    Completion,
}
