//! Tick table and drag snapping
//!
//! The dial snaps drags to 144 fixed positions: one hour tick per hour plus
//! five minute ticks between each pair, every 2.5° (ten minutes of time).

use crate::geometry::{point_at_angle, DialPoint};
use crate::time::{DialTime, HOUR_ANGLE};

/// Number of hour ticks on the dial.
pub const HOUR_TICK_COUNT: usize = 24;
/// Snap positions per hour: the hour tick itself plus five minute ticks.
pub const TICKS_PER_HOUR: usize = 6;

/// Kind of snap position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickKind {
    Hour,
    Minute,
}

/// One snap position on the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Position on the dial circle.
    pub position: DialPoint,
    /// Canonical angle in `[0, 360)`.
    pub angle: f32,
    /// Hour tick or in-between minute tick.
    pub kind: TickKind,
    /// Time value this position decodes to.
    pub time: DialTime,
}

/// Build the snap table for a dial with the given center and radius.
///
/// Pure function of its inputs; callers rebuild the table whenever the
/// canvas geometry changes and never mutate it in place. The result is
/// sorted ascending by angle, which [`nearest_tick`] relies on; construction
/// already emits angles in order, the sort stays as the precondition guard.
pub fn build_tick_table(center: DialPoint, radius: f32) -> Vec<Tick> {
    let sub_span = HOUR_ANGLE / TICKS_PER_HOUR as f32;
    let mut table = Vec::with_capacity(HOUR_TICK_COUNT * TICKS_PER_HOUR);

    for hour in 0..HOUR_TICK_COUNT {
        for sub in 0..TICKS_PER_HOUR {
            let angle = hour as f32 * HOUR_ANGLE + sub as f32 * sub_span;
            table.push(Tick {
                position: point_at_angle(center, radius, angle),
                angle,
                kind: if sub == 0 { TickKind::Hour } else { TickKind::Minute },
                time: DialTime::from_degrees(angle),
            });
        }
    }

    table.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    table
}

/// Snap a canonical angle to the nearest tick.
///
/// Binary-searches the angle-sorted table for the insertion point, then
/// compares the neighboring entries. On an exact hit the matching tick wins;
/// between two ticks the smaller absolute difference wins, and an exact tie
/// goes to the higher-angle tick. Queries outside the table's angle span are
/// clamped to the first or last entry rather than wrapped, so 359.9° snaps
/// to the 357.5° tick and not to midnight.
///
/// # Panics
///
/// Panics if `table` is empty.
pub fn nearest_tick(table: &[Tick], degrees: f32) -> &Tick {
    let insertion = table.partition_point(|tick| tick.angle < degrees);
    let lower = insertion.saturating_sub(1);
    let upper = insertion.min(table.len() - 1);

    if (degrees - table[lower].angle).abs() < (degrees - table[upper].angle).abs() {
        &table[lower]
    } else {
        &table[upper]
    }
}
