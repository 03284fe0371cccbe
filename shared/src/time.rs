//! Dial time values and the angle/time codec
//!
//! Maps positions on a 24-hour dial (0° at the top of the circle = midnight,
//! increasing clockwise) to hour/minute pairs and back.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Full turn of the dial in degrees.
pub const MAX_ANGLE: f32 = 360.0;
/// Angular span of one hour on a 24-hour dial (15°).
pub const HOUR_ANGLE: f32 = MAX_ANGLE / 24.0;
/// Angular span of one minute (0.25°).
pub const MINUTE_ANGLE: f32 = HOUR_ANGLE / 60.0;

/// A time-of-day value selected on the dial.
///
/// `hour` is normally in `0..24`; the one exception is the dial's far
/// boundary, where exactly 360° decodes to `24:00`. `minute` is in `0..60`.
/// Construction does not validate: values come from dial angles produced by
/// the geometry layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialTime {
    /// Hour on the 24-hour scale
    pub hour: u32,
    /// Minute (0-59)
    pub minute: u32,
}

impl DialTime {
    pub fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Decode a dial angle at one-minute granularity.
    pub fn from_degrees(degrees: f32) -> Self {
        Self::from_degrees_spanned(degrees, MINUTE_ANGLE)
    }

    /// Decode a dial angle with a custom minute granularity.
    ///
    /// `minute_span` is the angular width of one minute step. The default
    /// span is [`MINUTE_ANGLE`]; a coarser span decodes minutes in larger
    /// steps. At exactly 360° the result is `24:00`, a display-only boundary
    /// value.
    pub fn from_degrees_spanned(degrees: f32, minute_span: f32) -> Self {
        let hour = (degrees / HOUR_ANGLE) as u32;
        let minute = (degrees % HOUR_ANGLE / minute_span) as u32;
        Self { hour, minute }
    }

    /// Encode this time as a dial angle.
    pub fn to_degrees(self) -> f32 {
        self.hour as f32 * HOUR_ANGLE + self.minute as f32 * MINUTE_ANGLE
    }

    /// Format as zero-padded "HH:MM".
    pub fn format_text(self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }

    /// Current wall-clock time of day.
    pub fn now() -> Self {
        let now = chrono::Local::now().time();
        Self {
            hour: now.hour(),
            minute: now.minute(),
        }
    }

    /// Convert from a chrono time of day. Seconds are dropped.
    pub fn from_naive(time: NaiveTime) -> Self {
        Self {
            hour: time.hour(),
            minute: time.minute(),
        }
    }

    /// Convert to a chrono time of day.
    ///
    /// Returns `None` for the `24:00` boundary value, which has no
    /// `NaiveTime` representation.
    pub fn to_naive(self) -> Option<NaiveTime> {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Coarse span used by the granularity tests: one minute step per 6°.
    const COARSE_SPAN: f32 = 6.0;

    #[test]
    fn test_from_degrees_hour_scale() {
        let cases = [
            (0.0, 0, "00:00"),
            (45.0, 3, "03:00"),
            (90.0, 6, "06:00"),
            (135.0, 9, "09:00"),
            (180.0, 12, "12:00"),
            (225.0, 15, "15:00"),
            (270.0, 18, "18:00"),
        ];
        for (degrees, hour, text) in cases {
            let time = DialTime::from_degrees_spanned(degrees, COARSE_SPAN);
            assert_eq!(time.hour, hour);
            assert_eq!(time.minute, 0);
            assert_eq!(time.format_text(), text);
        }
    }

    #[test]
    fn test_from_degrees_full_turn_boundary() {
        // 360° is accepted and decodes to the 24:00 display value.
        let time = DialTime::from_degrees(360.0);
        assert_eq!(time.hour, 24);
        assert_eq!(time.minute, 0);
        assert_eq!(time.format_text(), "24:00");
    }

    #[test]
    fn test_round_trip_at_tick_granularity() {
        // Ten-minute steps match the dial's minute-tick spacing; the codec
        // must round-trip them exactly.
        for hour in 0..24 {
            for minute in [0, 10, 20, 30, 40, 50] {
                let time = DialTime::new(hour, minute);
                let back = DialTime::from_degrees(time.to_degrees());
                assert_eq!(back, time, "round trip failed for {hour}:{minute}");
            }
        }
    }

    #[test]
    fn test_interpolated_angle_floors_to_lower_minute() {
        // 1° past the hour is 4 minutes; 0.1° more is still 4 minutes.
        assert_eq!(DialTime::from_degrees(16.0), DialTime::new(1, 4));
        assert_eq!(DialTime::from_degrees(16.1), DialTime::new(1, 4));
    }

    #[test]
    fn test_format_text_zero_padding() {
        assert_eq!(DialTime::new(7, 5).format_text(), "07:05");
        assert_eq!(DialTime::new(23, 59).format_text(), "23:59");
    }

    #[test]
    fn test_naive_time_interop() {
        let naive = NaiveTime::from_hms_opt(13, 37, 42).unwrap();
        let time = DialTime::from_naive(naive);
        assert_eq!(time, DialTime::new(13, 37));
        assert_eq!(time.to_naive(), NaiveTime::from_hms_opt(13, 37, 0));

        // The dial boundary value has no chrono representation.
        assert_eq!(DialTime::new(24, 0).to_naive(), None);
    }
}
