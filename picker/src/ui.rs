//! UI module - egui settings overlay
//!
//! The settings window exposes the dial's display options and a few preset
//! ranges, using nannou_egui.

use nannou_egui::egui;
use shared::DialTime;

/// A canned start/end range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Midnight to noon, the launch default
    HalfDay,
    /// 09:00 - 17:00
    WorkShift,
    /// 22:00 - 06:00, wraps past midnight
    NightShift,
}

impl Preset {
    pub fn range(self) -> (DialTime, DialTime) {
        match self {
            Preset::HalfDay => (DialTime::new(0, 0), DialTime::new(12, 0)),
            Preset::WorkShift => (DialTime::new(9, 0), DialTime::new(17, 0)),
            Preset::NightShift => (DialTime::new(22, 0), DialTime::new(6, 0)),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Preset::HalfDay => "00 - 12",
            Preset::WorkShift => "Work 9 - 17",
            Preset::NightShift => "Night 22 - 6",
        }
    }
}

/// Outcome of one settings-panel frame
pub struct PanelResult {
    /// A display setting was edited and should be persisted
    pub settings_changed: bool,
    /// A preset button was clicked
    pub preset: Option<Preset>,
}

/// Draw the settings window (bottom-right corner).
pub fn draw_settings_panel(
    ctx: &egui::Context,
    hour_label_span: &mut u32,
    show_now_marker: &mut bool,
) -> PanelResult {
    let mut settings_changed = false;
    let mut preset = None;

    egui::Window::new("Settings")
        .collapsible(true)
        .resizable(false)
        .default_width(220.0)
        .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
        .show(ctx, |ui| {
            ui.label("Hour numerals");
            ui.horizontal(|ui| {
                for span in [3u32, 6, 12] {
                    let selected = *hour_label_span == span;
                    if ui
                        .selectable_label(selected, format!("every {}h", span))
                        .clicked()
                        && !selected
                    {
                        *hour_label_span = span;
                        settings_changed = true;
                    }
                }
            });

            if ui.checkbox(show_now_marker, "Show current time").changed() {
                settings_changed = true;
            }

            ui.separator();
            ui.label("Presets");
            ui.horizontal(|ui| {
                for candidate in [Preset::HalfDay, Preset::WorkShift, Preset::NightShift] {
                    if ui.button(candidate.label()).clicked() {
                        preset = Some(candidate);
                    }
                }
            });
            ui.label("Keys: R reset, W work, N night");
        });

    PanelResult {
        settings_changed,
        preset,
    }
}
