//! Hand sweep animation.
//!
//! The hands start at 12 o'clock and sweep forward to their target angles once.
//! Everything here is explicit state passing: [`interpolate`] is a pure step
//! function and [`HandAnimator`] only accumulates elapsed time around it.

use std::f32::consts::PI;
use std::time::Duration;

use crate::angles::TimeDegree;

/// Current hand angles in degrees, clockwise from 12 o'clock.
///
/// Produced whole by the animator and read whole by the renderer.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct AnimationState {
    pub angle_seconds: f32,
    pub angle_minutes: f32,
    pub angle_hours: f32,
}

impl AnimationState {
    pub const ZERO: Self = Self { angle_seconds: 0.0, angle_minutes: 0.0, angle_hours: 0.0 };

    /// The resting state once the sweep has reached `targets`.
    #[inline]
    pub fn at(targets: TimeDegree) -> Self {
        Self {
            angle_seconds: targets.second_deg,
            angle_minutes: targets.minute_deg,
            angle_hours: targets.hour_deg,
        }
    }
}

/// Progress curve applied to the linear time fraction.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Easing {
    /// Angle proportional to elapsed time.
    #[default]
    Linear,
    /// Slow start and slow finish: `0.5 - cos(t·π) / 2`.
    AccelerateDecelerate,
}

impl Easing {
    /// Maps `t` in `[0, 1]` to eased progress. Both curves fix 0 and 1.
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,
            Easing::AccelerateDecelerate => 0.5 - (t * PI).cos() / 2.0,
        }
    }
}

/// Hand angles after `elapsed` of a sweep lasting `duration`.
///
/// A zero `duration` is already complete. `elapsed` beyond `duration` holds the targets.
pub fn interpolate(
    elapsed: Duration,
    duration: Duration,
    targets: TimeDegree,
    easing: Easing,
) -> AnimationState {
    let fraction = if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    };

    if fraction >= 1.0 {
        return AnimationState::at(targets);
    }

    let p = easing.apply(fraction);
    AnimationState {
        angle_seconds: targets.second_deg * p,
        angle_minutes: targets.minute_deg * p,
        angle_hours: targets.hour_deg * p,
    }
}

/// One-shot sweep from zero to `targets` over `duration`.
///
/// No pause, resume or cancel: the sweep only moves forward and stops at the targets.
#[derive(Debug, Clone)]
pub struct HandAnimator {
    targets: TimeDegree,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
    finished: bool,
}

impl HandAnimator {
    pub fn new(targets: TimeDegree, duration: Duration) -> Self {
        log::debug!("hand sweep to {targets:?} over {duration:?}");
        Self {
            targets,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::Linear,
            finished: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Advances the sweep by `dt`.
    ///
    /// Returns the new state for every tick up to and including the one that
    /// completes the sweep, then `None` forever.
    pub fn advance(&mut self, dt: Duration) -> Option<AnimationState> {
        if self.finished {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
        if self.elapsed >= self.duration {
            self.finished = true;
            log::debug!("hand sweep finished after {:?}", self.duration);
        }

        Some(self.state())
    }

    /// Angles at the current elapsed time.
    #[inline]
    pub fn state(&self) -> AnimationState {
        interpolate(self.elapsed, self.duration, self.targets, self.easing)
    }

    /// Linear time fraction in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[inline]
    pub fn targets(&self) -> TimeDegree {
        self.targets
    }

    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }
}
