#![cfg_attr(not(test), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`QuadratureDecoder`**: classifies encoder line transitions into detents, interrupt-safe
//! - **`EncoderCounter`**: atomic detent counter shared between interrupt and control cycle
//! - **`Button`**: debounced activation and hold-to-skip detection
//! - **`PomodoroTimer`**: the mode/countdown/session state machine
//! - **`Controller`**: one cooperative control cycle per `service` call
//! - **`Clock`**, **`TextDisplay`**, **`IndicatorLed`**, **`Buzzer`**: traits to implement
//!   for your platform
//!
//! The indicator color interchange type is `palette::Srgb` (0.0-1.0 range);
//! convert to your hardware's native format in the `IndicatorLed`
//! implementation.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod adjust;
pub mod button;
pub mod colors;
pub mod controller;
pub mod display;
pub mod encoder;
pub mod time;
pub mod timer;
pub mod types;

pub use button::{Button, ButtonEvent};
pub use controller::{Buzzer, Controller, IndicatorLed, TextDisplay};
pub use display::{Screen, screen};
pub use encoder::{Direction, EncoderCounter, QuadratureDecoder};
pub use time::Clock;
pub use timer::PomodoroTimer;
pub use types::{Chime, Mode, RunState, Settings};
