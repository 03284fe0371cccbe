//! Engine crate for the 24-hour range dial
//!
//! Pure geometry, the angle/time codec, tick snapping, and settings
//! persistence shared by the picker application. No rendering here: the app
//! layer feeds raw pointer coordinates in and reads snapped ticks and time
//! values back.

pub mod config;
pub mod geometry;
pub mod ticks;
pub mod time;

pub use config::{config_path, load_config, save_config, ConfigError};
pub use geometry::{
    angle_at_point, canonical_angle, in_drag_area, point_at_angle, point_at_time, raw_angle,
    sweep_angle, DialPoint,
};
pub use ticks::{build_tick_table, nearest_tick, Tick, TickKind, HOUR_TICK_COUNT, TICKS_PER_HOUR};
pub use time::{DialTime, HOUR_ANGLE, MAX_ANGLE, MINUTE_ANGLE};
