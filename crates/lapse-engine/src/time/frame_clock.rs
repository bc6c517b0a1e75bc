use super::clock::{Clock, SystemClock};
use super::timer::Timer;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Total running time of the clock, in seconds.
    pub elapsed: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// `FrameClock` is designed to be used per window (or per loop) so that multi-window
/// applications do not share delta-time state.
///
/// Delta time is the lap time of an internal [`Timer`], so pausing the clock
/// freezes `elapsed` and yields a zero `dt` until it is resumed. Deltas are
/// not clamped; callers that need a bounded step clamp it themselves.
#[derive(Debug, Clone)]
pub struct FrameClock<C: Clock = SystemClock> {
    timer: Timer<C>,
    frame_index: u64,
}

impl FrameClock<SystemClock> {
    /// Creates a running clock on the system monotonic clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FrameClock<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FrameClock<C> {
    /// Creates a running clock driven by `clock`.
    pub fn with_clock(clock: C) -> Self {
        let mut timer = Timer::with_clock(clock);
        timer.start();
        Self {
            timer,
            frame_index: 0,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.timer.reset();
    }

    pub fn pause(&mut self) {
        self.timer.stop();
    }

    pub fn resume(&mut self) {
        self.timer.start();
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        !self.timer.is_running()
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let dt = self.timer.lap_time();

        let ft = FrameTime {
            dt,
            elapsed: self.timer.time(),
            frame_index: self.frame_index,
        };

        self.frame_index = self
            .frame_index
            .wrapping_add(1);

        ft
    }
}
