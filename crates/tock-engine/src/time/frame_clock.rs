use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick.
    pub dt: Duration,

    /// Total time accumulated over all ticks of this clock.
    pub elapsed: Duration,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

#[derive(Debug, Clone)]
enum Source {
    /// Wall-clock deltas, clamped.
    Realtime { last: Instant, dt_min: Duration, dt_max: Duration },
    /// Every tick advances by the same step; no wall clock involved.
    Fixed { step: Duration },
}

/// Frame clock producing `FrameTime` snapshots.
///
/// A realtime clock measures the wall clock between ticks. Delta time is clamped
/// to avoid pathological values when the process is paused by a debugger or stalls.
///
/// A fixed clock advances by a constant step per tick, which gives headless hosts
/// and tests a reproducible timeline.
#[derive(Debug, Clone)]
pub struct FrameClock {
    source: Source,
    elapsed: Duration,
    frame_index: u64,
}

impl FrameClock {
    /// Creates a realtime clock with default clamps.
    pub fn new() -> Self {
        Self::with_clamps(
            Duration::from_micros(100), // 0.0001s
            Duration::from_millis(250), // 0.25s
        )
    }

    /// Creates a realtime clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            source: Source::Realtime { last: Instant::now(), dt_min, dt_max },
            elapsed: Duration::ZERO,
            frame_index: 0,
        }
    }

    /// Creates a clock that advances by `step` on every tick.
    pub fn fixed(step: Duration) -> Self {
        Self {
            source: Source::Fixed { step },
            elapsed: Duration::ZERO,
            frame_index: 0,
        }
    }

    /// Creates a fixed clock ticking `fps` times per simulated second.
    ///
    /// `fps` is clamped to at least 1.
    pub fn fixed_fps(fps: u32) -> Self {
        Self::fixed(Duration::from_secs(1) / fps.max(1))
    }

    /// Total time accumulated so far.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let dt = match &mut self.source {
            Source::Realtime { last, dt_min, dt_max } => {
                let now = Instant::now();
                let dt = now.saturating_duration_since(*last).clamp(*dt_min, *dt_max);
                *last = now;
                dt
            }
            Source::Fixed { step } => *step,
        };

        self.elapsed = self.elapsed.saturating_add(dt);

        let ft = FrameTime {
            dt,
            elapsed: self.elapsed,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances_by_step() {
        let mut clock = FrameClock::fixed(Duration::from_millis(20));
        let a = clock.tick();
        let b = clock.tick();
        assert_eq!(a.dt, Duration::from_millis(20));
        assert_eq!(a.frame_index, 0);
        assert_eq!(b.frame_index, 1);
        assert_eq!(b.elapsed, Duration::from_millis(40));
        assert_eq!(clock.elapsed(), Duration::from_millis(40));
    }

    #[test]
    fn fixed_fps_never_divides_by_zero() {
        let mut clock = FrameClock::fixed_fps(0);
        assert_eq!(clock.tick().dt, Duration::from_secs(1));
    }

    #[test]
    fn realtime_dt_is_clamped() {
        let min = Duration::from_millis(5);
        let max = Duration::from_millis(10);
        let mut clock = FrameClock::with_clamps(min, max);
        let ft = clock.tick();
        assert!(ft.dt >= min && ft.dt <= max);
    }
}
