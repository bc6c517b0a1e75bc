use std::time::{Duration, Instant};

use super::clock::{Clock, SystemClock};

/// Pausable elapsed-time and lap timer.
///
/// Two readings are available:
/// - [`Timer::time`]: total running time since the last reset, excluding
///   every interval spent stopped
/// - [`Timer::lap_time`]: time since the previous lap read (or start/reset),
///   which also rebases the lap reference
///
/// Stopping freezes both readings at the stop instant. Starting again shifts
/// the reference instants forward by the length of the pause, so the paused
/// interval never shows up in later readings.
///
/// All durations are derived from a monotonic [`Clock`] and reported as
/// seconds. Intended for a single owner polling it once per loop iteration.
#[derive(Debug, Clone)]
pub struct Timer<C: Clock = SystemClock> {
    clock: C,
    start: Instant,
    lap: Instant,
    stop: Instant,
    running: bool,
}

impl Timer<SystemClock> {
    /// Creates a stopped timer reading zero.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a timer and starts it immediately.
    pub fn started() -> Self {
        let mut timer = Self::new();
        timer.start();
        timer
    }
}

impl Default for Timer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timer<C> {
    /// Creates a stopped timer reading zero, driven by `clock`.
    pub fn with_clock(clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            start: now,
            lap: now,
            stop: now,
            running: false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Resumes accumulating time. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }

        let paused = self.clock.now().saturating_duration_since(self.stop);
        self.start += paused;
        self.lap += paused;
        self.running = true;
    }

    /// Freezes both readings at the current instant. No-op if already stopped.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }

        self.stop = self.clock.now();
        self.running = false;
    }

    /// Rebases elapsed and lap time to zero at the current instant.
    ///
    /// The running state is left as is: a running timer keeps running from
    /// the new zero point, a stopped one resumes from it on the next `start`.
    pub fn reset(&mut self) {
        let now = self.clock.now();
        self.start = now;
        self.lap = now;
        self.stop = now;
    }

    /// Total running time since the last reset.
    pub fn elapsed(&self) -> Duration {
        self.end().saturating_duration_since(self.start)
    }

    /// [`Timer::elapsed`] in seconds.
    #[inline]
    pub fn time(&self) -> f32 {
        self.elapsed().as_secs_f32()
    }

    /// Running time since the previous lap read, then moves the lap
    /// reference to the instant just measured.
    pub fn lap(&mut self) -> Duration {
        let end = self.end();
        let lap = end.saturating_duration_since(self.lap);
        self.lap = end;
        lap
    }

    /// [`Timer::lap`] in seconds.
    #[inline]
    pub fn lap_time(&mut self) -> f32 {
        self.lap().as_secs_f32()
    }

    fn end(&self) -> Instant {
        if self.running {
            self.clock.now()
        } else {
            self.stop
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::ManualClock;
    use approx::assert_abs_diff_eq;
    use std::thread;

    const EPS: f32 = 1e-6;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn manual() -> (ManualClock, Timer<ManualClock>) {
        let clock = ManualClock::new();
        let timer = Timer::with_clock(clock.clone());
        (clock, timer)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_timer_is_stopped_at_zero() {
        let (clock, timer) = manual();
        assert!(!timer.is_running());

        clock.advance(ms(500));
        assert_eq!(timer.elapsed(), Duration::ZERO);
    }

    #[test]
    fn first_start_counts_from_start_not_construction() {
        let (clock, mut timer) = manual();
        clock.advance(ms(300));

        timer.start();
        assert_eq!(timer.elapsed(), Duration::ZERO);

        clock.advance(ms(40));
        assert_eq!(timer.elapsed(), ms(40));
    }

    #[test]
    fn lap_without_start_reads_zero() {
        let (clock, mut timer) = manual();
        clock.advance(ms(250));
        assert_eq!(timer.lap(), Duration::ZERO);
    }

    // ── elapsed ───────────────────────────────────────────────────────────

    #[test]
    fn elapsed_is_monotonic_while_running() {
        let (clock, mut timer) = manual();
        timer.start();

        let mut last = timer.elapsed();
        for step in [1, 0, 7, 3, 0, 16] {
            clock.advance(ms(step));
            let now = timer.elapsed();
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, ms(27));
    }

    #[test]
    fn time_does_not_mutate() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(10));

        assert_eq!(timer.time(), timer.time());
        // Reading time leaves the lap reference alone.
        assert_eq!(timer.lap(), ms(10));
    }

    // ── stop / start ──────────────────────────────────────────────────────

    #[test]
    fn pause_is_excluded_from_elapsed() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(120));
        timer.stop();

        for pause in [1, 50, 10_000] {
            clock.advance(ms(pause));
        }
        timer.start();
        assert_eq!(timer.elapsed(), ms(120));
    }

    #[test]
    fn elapsed_is_frozen_while_stopped() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(80));
        timer.stop();

        let frozen = timer.elapsed();
        clock.advance(ms(200));
        assert_eq!(timer.elapsed(), frozen);
        clock.advance(ms(200));
        assert_eq!(timer.elapsed(), frozen);
    }

    #[test]
    fn double_start_matches_single_start() {
        let (clock_a, mut once) = manual();
        let (clock_b, mut twice) = manual();

        once.start();
        twice.start();
        clock_b.advance(ms(5));
        twice.start();

        clock_a.advance(ms(5));
        for _ in 0..3 {
            clock_a.advance(ms(9));
            clock_b.advance(ms(9));
            assert_eq!(once.elapsed(), twice.elapsed());
        }
    }

    #[test]
    fn double_stop_keeps_first_stop_value() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(30));
        timer.stop();

        clock.advance(ms(70));
        timer.stop();
        assert_eq!(timer.elapsed(), ms(30));

        timer.start();
        clock.advance(ms(5));
        assert_eq!(timer.elapsed(), ms(35));
    }

    #[test]
    fn pause_is_excluded_from_lap() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(20));
        timer.stop();
        clock.advance(ms(1_000));
        timer.start();
        clock.advance(ms(15));

        assert_eq!(timer.lap(), ms(35));
    }

    // ── lap ───────────────────────────────────────────────────────────────

    #[test]
    fn lap_resets_on_read() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(16));

        assert_eq!(timer.lap(), ms(16));
        assert_eq!(timer.lap(), Duration::ZERO);
    }

    #[test]
    fn laps_sum_to_elapsed() {
        let (clock, mut timer) = manual();
        timer.reset();
        timer.start();

        clock.advance(ms(30));
        assert_abs_diff_eq!(timer.lap_time(), 0.030, epsilon = EPS);
        clock.advance(ms(40));
        assert_abs_diff_eq!(timer.lap_time(), 0.040, epsilon = EPS);
        assert_abs_diff_eq!(timer.time(), 0.070, epsilon = EPS);
    }

    #[test]
    fn lap_while_stopped_catches_up_then_reads_zero() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(12));
        timer.stop();
        clock.advance(ms(100));

        assert_eq!(timer.lap(), ms(12));
        assert_eq!(timer.lap(), Duration::ZERO);
        clock.advance(ms(100));
        assert_eq!(timer.lap(), Duration::ZERO);
    }

    // ── reset ─────────────────────────────────────────────────────────────

    #[test]
    fn reset_rebases_to_zero() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(900));
        let _ = timer.lap();
        clock.advance(ms(100));

        timer.reset();
        assert_eq!(timer.elapsed(), Duration::ZERO);
        assert_eq!(timer.lap(), Duration::ZERO);
    }

    #[test]
    fn reset_keeps_running_timer_running() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(50));

        timer.reset();
        assert!(timer.is_running());
        clock.advance(ms(25));
        assert_eq!(timer.elapsed(), ms(25));
    }

    #[test]
    fn reset_while_stopped_resumes_from_new_baseline() {
        let (clock, mut timer) = manual();
        timer.start();
        clock.advance(ms(50));
        timer.stop();
        clock.advance(ms(10));

        timer.reset();
        assert!(!timer.is_running());
        clock.advance(ms(60));
        assert_eq!(timer.elapsed(), Duration::ZERO);

        timer.start();
        clock.advance(ms(5));
        assert_eq!(timer.elapsed(), ms(5));
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn stop_start_scenario() {
        let (clock, mut timer) = manual();
        timer.start();
        timer.reset();

        clock.advance(ms(100));
        assert_abs_diff_eq!(timer.time(), 0.100, epsilon = EPS);

        timer.stop();
        clock.advance(ms(200));
        assert_abs_diff_eq!(timer.time(), 0.100, epsilon = EPS);

        timer.start();
        clock.advance(ms(50));
        assert_abs_diff_eq!(timer.time(), 0.150, epsilon = EPS);
    }

    #[test]
    fn system_clock_pause_is_excluded() {
        let mut timer = Timer::started();
        timer.reset();

        thread::sleep(ms(100));
        let before_pause = timer.time();
        assert!(before_pause >= 0.100);

        timer.stop();
        let frozen = timer.time();
        thread::sleep(ms(200));
        assert_eq!(timer.time(), frozen);

        timer.start();
        thread::sleep(ms(50));
        let after = timer.time();
        assert!(after >= frozen + 0.050, "resumed time {after}s too small");
        // The 200ms pause must not leak into the reading.
        assert!(after < frozen + 0.200, "resumed time {after}s includes the pause");
    }

    #[test]
    fn system_clock_laps_sum_to_elapsed() {
        let mut timer = Timer::started();
        timer.reset();

        thread::sleep(ms(30));
        let first = timer.lap_time();
        thread::sleep(ms(40));
        let second = timer.lap_time();

        timer.stop();
        let total = timer.time();
        assert!(first >= 0.030);
        assert!(second >= 0.040);
        assert_abs_diff_eq!(first + second, total, epsilon = 1e-3);
    }
}
