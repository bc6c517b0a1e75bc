use std::fmt;
use std::time::Duration;

/// Averaged frame timing over one reporting window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameRate {
    /// Mean frame time over the window, in seconds.
    pub avg_frame_time: f32,

    /// Frames per second, rounded to the nearest integer.
    pub fps: u32,
}

impl FrameRate {
    #[inline]
    pub fn frame_time_ms(&self) -> f32 {
        self.avg_frame_time * 1000.0
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}ms, FPS: {}", self.frame_time_ms(), self.fps)
    }
}

/// Accumulates per-frame deltas and reports an average once per window.
///
/// The counter owns its accumulator: callers feed every frame's `dt` and
/// get a report back only when the accumulated time passes the window.
#[derive(Debug, Clone)]
pub struct FrameRateCounter {
    window: f32,
    total: f32,
    frames: u64,
    latest: Option<FrameRate>,
}

impl FrameRateCounter {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

    pub fn new() -> Self {
        Self::with_window(Self::DEFAULT_WINDOW)
    }

    pub fn with_window(window: Duration) -> Self {
        debug_assert!(!window.is_zero());
        Self {
            window: window.as_secs_f32(),
            total: 0.0,
            frames: 0,
            latest: None,
        }
    }

    /// Records one frame of `dt` seconds.
    ///
    /// Returns a report when the accumulated time strictly exceeds the
    /// window, then starts a new window.
    pub fn update(&mut self, dt: f32) -> Option<FrameRate> {
        self.total += dt;
        self.frames += 1;

        if self.total <= self.window {
            return None;
        }

        let avg_frame_time = self.total / self.frames as f32;
        let report = FrameRate {
            avg_frame_time,
            fps: (1.0 / avg_frame_time + 0.5) as u32,
        };

        self.total = 0.0;
        self.frames = 0;
        self.latest = Some(report);

        Some(report)
    }

    /// Most recent report, if any window has completed.
    pub fn latest(&self) -> Option<FrameRate> {
        self.latest
    }
}

impl Default for FrameRateCounter {
    fn default() -> Self {
        Self::new()
    }
}
