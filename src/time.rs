//! Time abstraction for platform-agnostic timing.

/// Trait for abstracting monotonic millisecond clocks.
///
/// The core compares timestamps only by subtraction, so any monotonically
/// increasing millisecond counter works (a hardware tick counter, an RTOS
/// uptime counter, `Instant` on hosted platforms). Wrap-around is not
/// handled; use a 64-bit counter.
pub trait Clock {
    /// Returns milliseconds elapsed since some fixed epoch.
    fn now_millis(&self) -> u64;
}
