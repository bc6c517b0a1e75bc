//! Time subsystem.
//!
//! Provides stable, testable frame timing utilities without coupling to the runtime.
//! Intended usage:
//! - one `FrameClock` per window (or per render loop)
//! - call `tick()` once per presented frame to obtain `FrameTime`
//! - feed `FrameTime::dt` into a `FrameRateCounter` for an FPS readout
//!
//! `Timer` is the pausable elapsed/lap timer everything else is built on.
//! All of it reads time through the `Clock` trait; `ManualClock` makes it
//! deterministic under test.

mod clock;
mod frame_clock;
mod frame_rate;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use frame_clock::{FrameClock, FrameTime};
pub use frame_rate::{FrameRate, FrameRateCounter};
pub use timer::Timer;
