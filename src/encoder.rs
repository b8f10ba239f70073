//! Quadrature encoder decoding and the shared detent counter.
//!
//! The decoder half runs wherever the platform delivers encoder edges,
//! typically an interrupt handler. The counter half is the single piece of
//! state shared between that handler and the control cycle: the handler adds
//! validated detents, the cycle drains the accumulated total once per pass.

use core::sync::atomic::{AtomicI32, Ordering};

/// Rotation direction of one validated detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Phase sequence 00 -> 01 -> 11 -> 10.
    Clockwise,

    /// Phase sequence 00 -> 10 -> 11 -> 01.
    CounterClockwise,
}

/// Decodes level changes on the two encoder lines into detents.
///
/// On every level change, the 2-bit phase read from both lines is combined
/// with the previous phase into a 4-bit transition code. Four codes mean one
/// detent clockwise, four mean one detent counter-clockwise; every other
/// code is an invalid transition (electrical noise) and produces nothing.
/// The stored phase is updated unconditionally either way, so a noise pulse
/// cannot wedge the decoder.
///
/// `update` is allocation-free and completes in constant time, making it
/// safe to call from interrupt context.
#[derive(Debug)]
pub struct QuadratureDecoder {
    prev_phase: u8,
}

impl QuadratureDecoder {
    /// Creates a decoder seeded with the current levels of both lines.
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            prev_phase: Self::phase(a, b),
        }
    }

    /// Classifies a level change on either encoder line.
    ///
    /// Returns the direction if the transition completes a valid detent,
    /// `None` for no-ops and invalid (noisy) transitions.
    pub fn update(&mut self, a: bool, b: bool) -> Option<Direction> {
        let phase = Self::phase(a, b);
        let code = (self.prev_phase << 2) | phase;
        self.prev_phase = phase;

        match code {
            0b0001 | 0b0111 | 0b1110 | 0b1000 => Some(Direction::Clockwise),
            0b0010 | 0b0100 | 0b1011 | 0b1101 => Some(Direction::CounterClockwise),
            _ => None,
        }
    }

    fn phase(a: bool, b: bool) -> u8 {
        (u8::from(a) << 1) | u8::from(b)
    }
}

/// Signed detent counter shared between the decoder and the control cycle.
///
/// Detents accumulate additively: the interrupt side calls [`record`] per
/// validated transition, the control cycle calls [`drain`] once per pass.
/// Both operations are single atomic read-modify-writes, so no detent is
/// lost or double-counted across the drain boundary and nothing ever blocks.
///
/// `new` is const so the counter can live in a `static` reachable from the
/// interrupt handler.
///
/// [`record`]: EncoderCounter::record
/// [`drain`]: EncoderCounter::drain
#[derive(Debug)]
pub struct EncoderCounter {
    detents: AtomicI32,
}

impl EncoderCounter {
    /// Creates a counter at zero.
    pub const fn new() -> Self {
        Self {
            detents: AtomicI32::new(0),
        }
    }

    /// Adds one detent in the given direction.
    pub fn record(&self, direction: Direction) {
        let delta = match direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        };
        self.detents.fetch_add(delta, Ordering::Relaxed);
    }

    /// Takes the accumulated net detents, resetting the counter to zero.
    pub fn drain(&self) -> i32 {
        self.detents.swap(0, Ordering::Relaxed)
    }
}

impl Default for EncoderCounter {
    fn default() -> Self {
        Self::new()
    }
}
