//! 24-Hour Range Dial
//!
//! A circular time-range picker: two handles on a 24-hour dial select a
//! start and end time of day. Drags snap to ten-minute ticks and the
//! selected range is drawn as an arc sweeping clockwise from start to end.

mod drawing;
mod ui;

use nannou::prelude::*;
use nannou_egui::{self, Egui};
use serde::{Deserialize, Serialize};
use shared::{
    angle_at_point, build_tick_table, in_drag_area, nearest_tick, point_at_time, DialPoint,
    DialTime, Tick,
};

use crate::drawing::{
    colors, draw_dial, draw_handles, draw_now_marker, draw_range_arc, draw_readout, to_dial,
    DIAL_CENTER,
};
use crate::ui::{draw_settings_panel, Preset};

/// Half-width of the square grab area around each handle, in pixels.
const HANDLE_GRAB_RADIUS: f32 = 30.0;
/// Fraction of the half-window used as the tick-ring radius.
const DIAL_RADIUS_FACTOR: f32 = 0.72;

fn main() {
    nannou::app(model).update(update).run();
}

/// Persisted display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Config {
    hour_label_span: u32,
    show_now_marker: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hour_label_span: 6,
            show_now_marker: true,
        }
    }
}

/// Which handle a drag is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTarget {
    Start,
    End,
}

/// Application state
struct Model {
    /// Selected range, always snapped to a tick
    start_time: DialTime,
    end_time: DialTime,
    /// Handle positions on the tick ring (engine frame)
    start_handle: DialPoint,
    end_handle: DialPoint,
    /// Snap table, rebuilt when the dial radius changes
    tick_table: Vec<Tick>,
    dial_radius: f32,
    /// Active drag, if any
    drag: Option<DragTarget>,
    /// Draw an hour numeral every this many hours
    hour_label_span: u32,
    /// Show the wall-clock marker on the dial
    show_now_marker: bool,
    /// egui integration
    egui: Egui,
}

fn model(app: &App) -> Model {
    let window_id = app
        .new_window()
        .title("24-Hour Range Dial")
        .size(900, 900)
        .view(view)
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    let window = app.window(window_id).unwrap();
    let egui = Egui::from_window(&window);

    let config: Config = match shared::load_config() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Failed to load settings: {}", e);
            Config::default()
        }
    };

    let rect = app.window_rect();
    let dial_radius = rect.w().min(rect.h()) / 2.0 * DIAL_RADIUS_FACTOR;

    let start_time = DialTime::new(0, 0);
    let end_time = DialTime::new(12, 0);

    Model {
        start_time,
        end_time,
        start_handle: point_at_time(DIAL_CENTER, dial_radius, start_time),
        end_handle: point_at_time(DIAL_CENTER, dial_radius, end_time),
        tick_table: build_tick_table(DIAL_CENTER, dial_radius),
        dial_radius,
        drag: None,
        // A hand-edited settings file could hold zero; the numeral span is a
        // modulus.
        hour_label_span: config.hour_label_span.max(1),
        show_now_marker: config.show_now_marker,
        egui,
    }
}

fn save_settings(model: &Model) {
    let config = Config {
        hour_label_span: model.hour_label_span,
        show_now_marker: model.show_now_marker,
    };
    if let Err(e) = shared::save_config(&config) {
        eprintln!("Failed to save settings: {}", e);
    }
}

/// Change-notification boundary. Fires once per committed snapped-range
/// change; the sample logs to stdout.
fn notify_changed(start: DialTime, end: DialTime) {
    println!(
        "range changed: {} - {}",
        start.format_text(),
        end.format_text()
    );
}

/// Apply a new snapped range and move both handles onto the tick ring.
fn set_range(model: &mut Model, start: DialTime, end: DialTime) {
    if model.start_time == start && model.end_time == end {
        return;
    }
    model.start_time = start;
    model.end_time = end;
    model.start_handle = point_at_time(DIAL_CENTER, model.dial_radius, start);
    model.end_handle = point_at_time(DIAL_CENTER, model.dial_radius, end);
    notify_changed(start, end);
}

fn update(app: &App, model: &mut Model, update: Update) {
    // Rebuild the dial geometry when the window size changes. The tick
    // table is a pure function of center and radius.
    let rect = app.window_rect();
    let dial_radius = rect.w().min(rect.h()) / 2.0 * DIAL_RADIUS_FACTOR;
    if (dial_radius - model.dial_radius).abs() > f32::EPSILON {
        model.dial_radius = dial_radius;
        model.tick_table = build_tick_table(DIAL_CENTER, dial_radius);
        model.start_handle = point_at_time(DIAL_CENTER, dial_radius, model.start_time);
        model.end_handle = point_at_time(DIAL_CENTER, dial_radius, model.end_time);
    }

    // Begin egui frame
    model.egui.set_elapsed_time(update.since_start);
    let ctx = model.egui.begin_frame();

    let mut hour_label_span = model.hour_label_span;
    let mut show_now_marker = model.show_now_marker;
    let panel = draw_settings_panel(&ctx, &mut hour_label_span, &mut show_now_marker);

    drop(ctx);

    if panel.settings_changed {
        model.hour_label_span = hour_label_span;
        model.show_now_marker = show_now_marker;
        save_settings(model);
    }

    if let Some(preset) = panel.preset {
        let (start, end) = preset.range();
        set_range(model, start, end);
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(colors::BACKGROUND);

    draw_dial(
        &draw,
        &model.tick_table,
        model.dial_radius,
        model.hour_label_span,
    );
    draw_range_arc(
        &draw,
        model.dial_radius,
        model.start_time.to_degrees(),
        model.end_time.to_degrees(),
    );
    if model.show_now_marker {
        draw_now_marker(&draw, model.dial_radius, DialTime::now());
    }
    draw_handles(&draw, model.start_handle, model.end_handle, model.drag);
    draw_readout(&draw, model.start_time, model.end_time);

    draw.to_frame(app, &frame).unwrap();

    model.egui.draw_to_frame(&frame).unwrap();
}

fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if button != MouseButton::Left {
        return;
    }
    let position = to_dial(app.mouse.position());

    // The start handle gets grab priority when the two overlap.
    model.drag = if in_drag_area(position, model.start_handle, HANDLE_GRAB_RADIUS) {
        Some(DragTarget::Start)
    } else if in_drag_area(position, model.end_handle, HANDLE_GRAB_RADIUS) {
        Some(DragTarget::End)
    } else {
        None
    };
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.drag = None;
    }
}

fn mouse_moved(_app: &App, model: &mut Model, position: Point2) {
    let Some(target) = model.drag else {
        return;
    };

    let degrees = angle_at_point(to_dial(position), DIAL_CENTER);
    let tick = *nearest_tick(&model.tick_table, degrees);

    match target {
        DragTarget::Start => {
            if model.start_time != tick.time {
                model.start_time = tick.time;
                model.start_handle = tick.position;
                notify_changed(model.start_time, model.end_time);
            }
        }
        DragTarget::End => {
            if model.end_time != tick.time {
                model.end_time = tick.time;
                model.end_handle = tick.position;
                notify_changed(model.start_time, model.end_time);
            }
        }
    }
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    match key {
        Key::R => {
            let (start, end) = Preset::HalfDay.range();
            set_range(model, start, end);
        }
        Key::W => {
            let (start, end) = Preset::WorkShift.range();
            set_range(model, start, end);
        }
        Key::N => {
            let (start, end) = Preset::NightShift.range();
            set_range(model, start, end);
        }
        _ => {}
    }
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Let egui handle raw events for keyboard and mouse input
    model.egui.handle_raw_event(event);
}
