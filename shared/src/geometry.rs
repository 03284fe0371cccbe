//! Dial geometry - polar/Cartesian conversions and handle hit testing
//!
//! All functions work in screen-style coordinates (y grows downward), the
//! frame pointer events arrive in. 0° is the top of the dial and angles
//! increase clockwise.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::time::{DialTime, MAX_ANGLE};

/// A point on the picker canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialPoint {
    pub x: f32,
    pub y: f32,
}

impl DialPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Point on the circle around `center` at the given dial angle.
///
/// The quarter-turn offset moves 0° from the trigonometric east to the top
/// of the dial.
pub fn point_at_angle(center: DialPoint, radius: f32, degrees: f32) -> DialPoint {
    let radian = degrees.to_radians() - FRAC_PI_2;
    DialPoint {
        x: center.x + radius * radian.cos(),
        y: center.y + radius * radian.sin(),
    }
}

/// Point on the circle for a time value.
pub fn point_at_time(center: DialPoint, radius: f32, time: DialTime) -> DialPoint {
    point_at_angle(center, radius, time.to_degrees())
}

/// Angle of `point` as seen from `center`, in degrees.
///
/// Raw atan2 frame: (−180, 180], 0° pointing east. Not yet adjusted to the
/// dial's top-of-circle origin; see [`canonical_angle`].
pub fn raw_angle(point: DialPoint, center: DialPoint) -> f32 {
    (point.y - center.y).atan2(point.x - center.x).to_degrees()
}

/// Shift a raw atan2 angle into the dial frame `[0, 360)`.
pub fn canonical_angle(raw_degrees: f32) -> f32 {
    let mut degrees = raw_degrees + 90.0;
    if degrees < 0.0 {
        degrees += MAX_ANGLE;
    }
    if degrees >= MAX_ANGLE {
        degrees -= MAX_ANGLE;
    }
    degrees
}

/// Canonical dial angle of `point` as seen from `center`.
///
/// This is the entry point for drag positions: the result feeds directly
/// into tick snapping.
pub fn angle_at_point(point: DialPoint, center: DialPoint) -> f32 {
    canonical_angle(raw_angle(point, center))
}

/// Whether `point` falls inside the grab area around `target`.
///
/// The grab area is an axis-aligned square of half-width `radius`, closed on
/// its boundary.
pub fn in_drag_area(point: DialPoint, target: DialPoint, radius: f32) -> bool {
    (point.x - target.x).abs() <= radius && (point.y - target.y).abs() <= radius
}

/// Clockwise sweep from `start_degrees` to `end_degrees`.
///
/// Wraps forward through 360° when the selected range crosses midnight.
pub fn sweep_angle(start_degrees: f32, end_degrees: f32) -> f32 {
    let mut sweep = end_degrees - start_degrees;
    if end_degrees < start_degrees {
        sweep += MAX_ANGLE;
    }
    sweep
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < EPSILON, "{a} != {b}");
    }

    #[test]
    fn test_point_at_angle_cardinal_directions() {
        let center = DialPoint::new(100.0, 100.0);
        let radius = 50.0;

        // Midnight is straight up (smaller y in screen coordinates).
        let top = point_at_angle(center, radius, 0.0);
        assert_close(top.x, 100.0);
        assert_close(top.y, 50.0);

        // 06:00 (90°) is to the right.
        let right = point_at_angle(center, radius, 90.0);
        assert_close(right.x, 150.0);
        assert_close(right.y, 100.0);

        // 12:00 (180°) is straight down.
        let bottom = point_at_angle(center, radius, 180.0);
        assert_close(bottom.x, 100.0);
        assert_close(bottom.y, 150.0);

        // 18:00 (270°) is to the left.
        let left = point_at_angle(center, radius, 270.0);
        assert_close(left.x, 50.0);
        assert_close(left.y, 100.0);
    }

    #[test]
    fn test_point_at_time_matches_point_at_angle() {
        let center = DialPoint::new(0.0, 0.0);
        let by_time = point_at_time(center, 80.0, DialTime::new(6, 0));
        let by_angle = point_at_angle(center, 80.0, 90.0);
        assert_close(by_time.x, by_angle.x);
        assert_close(by_time.y, by_angle.y);
    }

    #[test]
    fn test_raw_angle_is_atan2_frame() {
        let center = DialPoint::new(0.0, 0.0);
        assert_close(raw_angle(DialPoint::new(10.0, 0.0), center), 0.0);
        assert_close(raw_angle(DialPoint::new(0.0, 10.0), center), 90.0);
        assert_close(raw_angle(DialPoint::new(-10.0, 0.0), center), 180.0);
        assert_close(raw_angle(DialPoint::new(0.0, -10.0), center), -90.0);
    }

    #[test]
    fn test_canonical_angle_rotates_and_wraps() {
        // East in the atan2 frame is 06:00 on the dial.
        assert_close(canonical_angle(0.0), 90.0);
        // Straight up (-90° raw) is midnight.
        assert_close(canonical_angle(-90.0), 0.0);
        // Values past the rotation wrap back under 360.
        assert_close(canonical_angle(275.0), 5.0);
        // Negative values past -90 wrap forward.
        assert_close(canonical_angle(-100.0), 350.0);
    }

    #[test]
    fn test_angle_point_round_trip() {
        let center = DialPoint::new(200.0, 200.0);
        for degrees in [0.0_f32, 15.0, 45.0, 90.0, 137.5, 180.0, 270.0, 355.0] {
            let point = point_at_angle(center, 120.0, degrees);
            let back = angle_at_point(point, center);
            assert!(
                (back - degrees).abs() < 1e-2,
                "round trip failed for {degrees}: got {back}"
            );
        }
    }

    #[test]
    fn test_in_drag_area_boundary_is_closed() {
        let target = DialPoint::new(50.0, 50.0);
        let radius = 10.0;

        assert!(in_drag_area(DialPoint::new(50.0, 50.0), target, radius));
        // Exactly on each edge counts as inside.
        assert!(in_drag_area(DialPoint::new(60.0, 50.0), target, radius));
        assert!(in_drag_area(DialPoint::new(40.0, 50.0), target, radius));
        assert!(in_drag_area(DialPoint::new(50.0, 60.0), target, radius));
        assert!(in_drag_area(DialPoint::new(50.0, 40.0), target, radius));
        // The corner of the square is inside too.
        assert!(in_drag_area(DialPoint::new(60.0, 60.0), target, radius));
        // Just outside on either axis is not.
        assert!(!in_drag_area(DialPoint::new(60.1, 50.0), target, radius));
        assert!(!in_drag_area(DialPoint::new(50.0, 39.9), target, radius));
    }

    #[test]
    fn test_sweep_angle() {
        assert_close(sweep_angle(10.0, 350.0), 340.0);
        // Crossing midnight wraps forward.
        assert_close(sweep_angle(350.0, 10.0), 20.0);
        assert_close(sweep_angle(90.0, 90.0), 0.0);
    }
}
