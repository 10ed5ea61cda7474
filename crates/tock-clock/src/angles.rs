//! Time of day to hand angles.
//!
//! Angles are degrees, clockwise from 12 o'clock. They are not reduced modulo 360:
//! the minute and second hands accumulate full turns since midnight, which is what
//! makes them sweep the right number of revolutions when animated from zero.

use crate::time::Time;

/// Hour hand travel per hour on a 12-hour dial.
pub const HOUR_DEG: f32 = 30.0;
/// Minute hand travel per minute.
pub const MINUTE_DEG: f32 = 6.0;
/// Second hand travel per second.
pub const SECOND_DEG: f32 = 6.0;

/// Target angles of the three hands.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TimeDegree {
    pub hour_deg: f32,
    pub minute_deg: f32,
    pub second_deg: f32,
}

/// Converts a time of day to hand angles. All three fields are always computed.
pub fn convert(hour: i32, minute: i32, second: i32) -> TimeDegree {
    let hour = hour as f32;
    let minute = minute as f32;
    let second = second as f32;

    TimeDegree {
        hour_deg: hour * HOUR_DEG,
        minute_deg: (hour * 60.0 + minute) * MINUTE_DEG,
        second_deg: (hour * 3600.0 + minute * 60.0 + second) * SECOND_DEG,
    }
}

impl From<Time> for TimeDegree {
    fn from(t: Time) -> Self {
        convert(t.hour, t.minute, t.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_oclock() {
        let d = convert(3, 0, 0);
        assert_eq!(d.hour_deg, 90.0);
        assert_eq!(d.minute_deg, 1080.0);
        assert_eq!(d.second_deg, 64800.0);
    }

    #[test]
    fn midnight_is_all_zero() {
        assert_eq!(convert(0, 0, 0), TimeDegree::default());
    }

    #[test]
    fn every_field_is_set_even_when_hour_is_zero() {
        let d = convert(0, 15, 30);
        assert_eq!(d.hour_deg, 0.0);
        assert_eq!(d.minute_deg, 90.0);
        assert_eq!(d.second_deg, 5580.0);
    }

    #[test]
    fn second_angle_tracks_seconds_since_midnight() {
        for h in [0, 1, 7, 12, 23] {
            for m in [0, 1, 29, 59] {
                for s in [0, 1, 30, 59] {
                    let expected = ((h * 3600 + m * 60 + s) as f32) * 6.0;
                    assert_eq!(convert(h, m, s).second_deg, expected, "{h}:{m}:{s}");
                }
            }
        }
    }

    #[test]
    fn out_of_range_input_is_not_rejected() {
        let d = convert(25, -1, 0);
        assert_eq!(d.hour_deg, 750.0);
        assert_eq!(d.minute_deg, (25.0 * 60.0 - 1.0) * 6.0);
    }

    #[test]
    fn from_time_matches_convert() {
        let t = Time::new(10, 8, 42);
        assert_eq!(TimeDegree::from(t), convert(10, 8, 42));
    }
}
