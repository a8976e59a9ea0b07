//! Platform abstraction layer
//!
//! Handles the desktop side of the frame loop:
//! - Monotonic time
//! - Input polling into `TickInput`

pub mod input;
pub mod time;

pub use input::InputPoller;
pub use time::Clock;
