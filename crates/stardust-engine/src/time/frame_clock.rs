use std::time::{Duration, Instant};

/// Frame timing sample.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped wall time elapsed since the previous tick.
    pub elapsed: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` samples.
///
/// `FrameClock` is designed to be used per driving loop so that two loops
/// (two windows, a loop and a headless replay) never share elapsed-time
/// state.
///
/// Elapsed time is clamped to avoid pathological values when the process is
/// paused by the debugger, minimized, or stalls.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    min_elapsed: Duration,
    max_elapsed: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    ///
    /// Clamp rationale:
    /// - minimum prevents zero-elapsed frames from tight loops on some platforms
    /// - maximum prevents simulation jumps after long stalls
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            min_elapsed: Duration::from_micros(100), // 0.0001s
            max_elapsed: Duration::from_millis(250), // 0.25s
        }
    }

    /// Creates a clock with custom elapsed-time clamps.
    pub fn with_clamps(min_elapsed: Duration, max_elapsed: Duration) -> Self {
        debug_assert!(min_elapsed <= max_elapsed);
        Self {
            last: Instant::now(),
            frame_index: 0,
            min_elapsed,
            max_elapsed,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after resuming from suspension, when the wall time that passed
    /// should not count as animation time.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut elapsed = now.saturating_duration_since(self.last);

        // Clamp to keep downstream simulation steps stable.
        if elapsed < self.min_elapsed {
            elapsed = self.min_elapsed;
        } else if elapsed > self.max_elapsed {
            elapsed = self.max_elapsed;
        }

        self.last = now;

        let ft = FrameTime {
            elapsed,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
