use std::time::Duration;

/// Time of day shown by the clock.
///
/// Canonical ranges are hour `0..=23`, minute `0..=59`, second `0..=59`, but nothing
/// enforces them: out-of-range values flow through to out-of-range angles.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Time {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl Time {
    #[inline]
    pub const fn new(hour: i32, minute: i32, second: i32) -> Self {
        Self { hour, minute, second }
    }

    /// Seconds elapsed since midnight.
    #[inline]
    pub fn to_seconds(self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// [`to_seconds`](Self::to_seconds) as a duration; negative totals become zero.
    #[inline]
    pub fn to_duration(self) -> Duration {
        Duration::from_secs(self.to_seconds().max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_since_midnight() {
        assert_eq!(Time::new(0, 0, 0).to_seconds(), 0);
        assert_eq!(Time::new(1, 2, 3).to_seconds(), 3723);
        assert_eq!(Time::new(23, 59, 59).to_seconds(), 86_399);
    }

    #[test]
    fn out_of_range_values_are_not_clamped() {
        assert_eq!(Time::new(0, 90, 0).to_seconds(), 5400);
        assert_eq!(Time::new(0, 0, -5).to_seconds(), -5);
    }

    #[test]
    fn negative_total_becomes_zero_duration() {
        assert_eq!(Time::new(0, 0, -5).to_duration(), Duration::ZERO);
        assert_eq!(Time::new(0, 1, 0).to_duration(), Duration::from_secs(60));
    }
}
