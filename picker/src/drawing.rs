//! Drawing module - dial ring, ticks, range arc, handles, and readout
//!
//! Renders the picker with nannou's Draw API. The engine works in y-down
//! screen coordinates while nannou's frame is y-up with the origin at the
//! window center, so every engine point passes through `to_screen` on its
//! way out.

use nannou::prelude::*;
use shared::{
    point_at_angle, point_at_time, sweep_angle, DialPoint, DialTime, Tick, TickKind, MINUTE_ANGLE,
};

use crate::DragTarget;

/// Dial center in the engine frame. nannou's origin is the window center,
/// so the same coordinates serve both frames.
pub const DIAL_CENTER: DialPoint = DialPoint { x: 0.0, y: 0.0 };

/// Track radius of the range arc, relative to the tick ring.
const ARC_RADIUS_FACTOR: f32 = 1.12;
/// Inner end of a tick line, relative to the tick ring.
const TICK_INNER_FACTOR: f32 = 0.95;
/// Radius of the hour numeral ring, relative to the tick ring.
const NUMERAL_RADIUS_FACTOR: f32 = 0.86;
/// Radius of the wall-clock marker, relative to the tick ring.
const NOW_RADIUS_FACTOR: f32 = 1.05;

pub fn to_screen(point: DialPoint) -> Point2 {
    pt2(point.x, -point.y)
}

pub fn to_dial(point: Point2) -> DialPoint {
    DialPoint::new(point.x, -point.y)
}

/// Color palette for the picker
pub mod colors {
    use nannou::prelude::*;

    pub const BACKGROUND: Srgb<u8> = Srgb {
        red: 24,
        green: 26,
        blue: 32,
        standard: std::marker::PhantomData,
    };
    pub const TRACK: Srgb<u8> = Srgb {
        red: 58,
        green: 62,
        blue: 72,
        standard: std::marker::PhantomData,
    };
    pub const TICK_MINUTE: Srgb<u8> = Srgb {
        red: 88,
        green: 92,
        blue: 102,
        standard: std::marker::PhantomData,
    };
    pub const TICK_HOUR: Srgb<u8> = Srgb {
        red: 150,
        green: 155,
        blue: 165,
        standard: std::marker::PhantomData,
    };
    pub const NUMERAL: Srgb<u8> = Srgb {
        red: 190,
        green: 195,
        blue: 205,
        standard: std::marker::PhantomData,
    };
    pub const RANGE_ARC: Srgb<u8> = Srgb {
        red: 235,
        green: 158,
        blue: 52,
        standard: std::marker::PhantomData,
    };
    pub const HANDLE_START: Srgb<u8> = Srgb {
        red: 235,
        green: 158,
        blue: 52,
        standard: std::marker::PhantomData,
    };
    pub const HANDLE_END: Srgb<u8> = Srgb {
        red: 110,
        green: 190,
        blue: 255,
        standard: std::marker::PhantomData,
    };
    pub const NOW_MARKER: Srgb<u8> = Srgb {
        red: 120,
        green: 230,
        blue: 170,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_PRIMARY: Srgb<u8> = Srgb {
        red: 238,
        green: 238,
        blue: 238,
        standard: std::marker::PhantomData,
    };
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb {
        red: 150,
        green: 150,
        blue: 150,
        standard: std::marker::PhantomData,
    };
}

/// Draw the tick ring: minute ticks, hour ticks, and hour numerals.
///
/// Hours that fall on the numeral span draw the numeral in place of the
/// tick line.
pub fn draw_dial(draw: &Draw, table: &[Tick], radius: f32, hour_label_span: u32) {
    for tick in table {
        let labeled = tick.kind == TickKind::Hour && tick.time.hour % hour_label_span == 0;

        if labeled {
            let anchor = point_at_angle(DIAL_CENTER, radius * NUMERAL_RADIUS_FACTOR, tick.angle);
            draw.text(&tick.time.hour.to_string())
                .xy(to_screen(anchor))
                .color(colors::NUMERAL)
                .font_size(18)
                .w(60.0);
            continue;
        }

        let outer = to_screen(tick.position);
        let inner = to_screen(point_at_angle(
            DIAL_CENTER,
            radius * TICK_INNER_FACTOR,
            tick.angle,
        ));

        match tick.kind {
            TickKind::Hour => {
                draw.line()
                    .start(inner)
                    .end(outer)
                    .color(colors::TICK_HOUR)
                    .weight(3.0);
            }
            TickKind::Minute => {
                draw.line()
                    .start(inner)
                    .end(outer)
                    .color(colors::TICK_MINUTE)
                    .weight(1.5);
            }
        }
    }
}

/// Draw the arc track and the selected range on it.
///
/// The range sweeps clockwise from the start angle; a range that crosses
/// midnight wraps forward through 360°.
pub fn draw_range_arc(draw: &Draw, radius: f32, start_degrees: f32, end_degrees: f32) {
    let track_radius = radius * ARC_RADIUS_FACTOR;

    let track: Vec<Point2> = (0..=180)
        .map(|i| {
            let degrees = i as f32 * 2.0;
            to_screen(point_at_angle(DIAL_CENTER, track_radius, degrees))
        })
        .collect();
    draw.polyline().weight(2.0).color(colors::TRACK).points(track);

    let sweep = sweep_angle(start_degrees, end_degrees);
    // Sample roughly every 2° along the sweep.
    let steps = (sweep / 2.0).ceil().max(1.0) as usize;
    let arc: Vec<Point2> = (0..=steps)
        .map(|i| {
            let degrees = start_degrees + sweep * i as f32 / steps as f32;
            to_screen(point_at_angle(DIAL_CENTER, track_radius, degrees))
        })
        .collect();
    draw.polyline()
        .weight(9.0)
        .color(colors::RANGE_ARC)
        .points(arc);
}

/// Draw the start and end handles with a glow behind the grabbed one.
pub fn draw_handles(
    draw: &Draw,
    start: DialPoint,
    end: DialPoint,
    drag: Option<DragTarget>,
) {
    let handles = [
        (
            start,
            colors::HANDLE_START,
            srgba(235u8, 158u8, 52u8, 70u8),
            drag == Some(DragTarget::Start),
        ),
        (
            end,
            colors::HANDLE_END,
            srgba(110u8, 190u8, 255u8, 70u8),
            drag == Some(DragTarget::End),
        ),
    ];

    for (position, color, glow, active) in handles {
        let screen = to_screen(position);
        draw.ellipse()
            .xy(screen)
            .radius(if active { 20.0 } else { 15.0 })
            .color(glow);
        draw.ellipse().xy(screen).radius(8.0).color(color);
    }
}

/// Draw a marker for the current wall-clock time, between the tick ring and
/// the arc track.
pub fn draw_now_marker(draw: &Draw, radius: f32, now: DialTime) {
    let position = to_screen(point_at_time(DIAL_CENTER, radius * NOW_RADIUS_FACTOR, now));
    draw.ellipse()
        .xy(position)
        .radius(7.0)
        .color(srgba(120u8, 230u8, 170u8, 60u8));
    draw.ellipse()
        .xy(position)
        .radius(3.5)
        .color(colors::NOW_MARKER);
}

/// Draw the center readout: start and end times plus the range length.
pub fn draw_readout(draw: &Draw, start: DialTime, end: DialTime) {
    draw.text("START")
        .xy(pt2(0.0, 92.0))
        .color(colors::TEXT_SECONDARY)
        .font_size(14)
        .w(200.0);
    draw.text(&start.format_text())
        .xy(pt2(0.0, 60.0))
        .color(colors::TEXT_PRIMARY)
        .font_size(40)
        .w(220.0);
    draw.text("END")
        .xy(pt2(0.0, 4.0))
        .color(colors::TEXT_SECONDARY)
        .font_size(14)
        .w(200.0);
    draw.text(&end.format_text())
        .xy(pt2(0.0, -28.0))
        .color(colors::TEXT_PRIMARY)
        .font_size(40)
        .w(220.0);
    draw.text(&format_duration(start, end))
        .xy(pt2(0.0, -76.0))
        .color(colors::TEXT_SECONDARY)
        .font_size(16)
        .w(220.0);
}

/// Length of the selected range as "Nh MMm", derived from the arc sweep.
pub fn format_duration(start: DialTime, end: DialTime) -> String {
    let sweep = sweep_angle(start.to_degrees(), end.to_degrees());
    let minutes = (sweep / MINUTE_ANGLE).round() as u32;
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_round_trip() {
        let point = DialPoint::new(12.5, -40.0);
        let back = to_dial(to_screen(point));
        assert_eq!(back, point);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(
            format_duration(DialTime::new(9, 0), DialTime::new(17, 30)),
            "8h 30m"
        );
        // A range across midnight wraps forward.
        assert_eq!(
            format_duration(DialTime::new(22, 0), DialTime::new(6, 0)),
            "8h 00m"
        );
        assert_eq!(
            format_duration(DialTime::new(7, 0), DialTime::new(7, 0)),
            "0h 00m"
        );
    }
}
