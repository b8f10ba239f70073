//! Button debouncing and hold-to-skip detection.

/// Discrete event produced from the raw button level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Debounced short press. Cycles modes, starts the timer, or leaves
    /// the complete screen, depending on the current mode.
    Activate,

    /// Button held past the skip threshold while a countdown runs.
    Skip,
}

/// Classifies the level-sampled button into [`ButtonEvent`]s.
///
/// The meaning of the button depends on the mode class the caller passes in:
///
/// - outside running modes, a press is accepted as one [`Activate`] at most
///   once per 500 ms window, so a single physical press never registers as
///   multiple logical presses;
/// - in running modes, a continuous hold of 2 s emits one [`Skip`]. The skip
///   is latched until release so a held button cannot re-trigger it every
///   cycle.
///
/// Feed `poll` once per control cycle with the instantaneous level.
///
/// [`Activate`]: ButtonEvent::Activate
/// [`Skip`]: ButtonEvent::Skip
#[derive(Debug, Default)]
pub struct Button {
    last_activate: Option<u64>,
    press_start: Option<u64>,
    skip_latched: bool,
}

impl Button {
    /// Minimum time between two accepted activations.
    pub const DEBOUNCE_WINDOW_MS: u64 = 500;

    /// Continuous hold required to trigger a skip.
    pub const SKIP_HOLD_MS: u64 = 2000;

    /// Creates a button with no press history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples the button level once and returns the event it completes.
    ///
    /// `pressed` is the instantaneous (already polarity-corrected) level,
    /// `now_millis` the monotonic clock, and `running` whether the current
    /// mode is a countdown phase.
    pub fn poll(&mut self, pressed: bool, now_millis: u64, running: bool) -> Option<ButtonEvent> {
        if running {
            return self.poll_running(pressed, now_millis);
        }

        // Hold tracking is meaningless outside running modes; drop any
        // leftover press-start so a hold that straddles a mode change
        // restarts its timing.
        self.press_start = None;
        self.skip_latched = false;

        if !pressed {
            return None;
        }

        match self.last_activate {
            Some(accepted) if now_millis - accepted <= Self::DEBOUNCE_WINDOW_MS => None,
            _ => {
                self.last_activate = Some(now_millis);
                Some(ButtonEvent::Activate)
            }
        }
    }

    fn poll_running(&mut self, pressed: bool, now_millis: u64) -> Option<ButtonEvent> {
        if !pressed {
            self.press_start = None;
            self.skip_latched = false;
            return None;
        }

        let start = match self.press_start {
            Some(start) => start,
            None => {
                self.press_start = Some(now_millis);
                return None;
            }
        };

        if !self.skip_latched && now_millis - start >= Self::SKIP_HOLD_MS {
            self.skip_latched = true;
            return Some(ButtonEvent::Skip);
        }

        None
    }
}
