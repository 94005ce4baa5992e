//! Platform abstraction layer
//!
//! The simulation never talks to a window or keyboard directly. Hosts hand it:
//! - Input, through [`InputProvider`]
//! - Time, through [`FrameClock`] or their own `dt`

pub mod input;
pub mod time;

pub use input::{Autopilot, InputProvider, Key, ScriptedInput};
pub use time::FrameClock;
