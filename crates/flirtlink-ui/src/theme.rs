//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(0, 0, 0);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(24, 24, 27);
pub const BG_SURFACE: Color32 = Color32::from_rgb(39, 39, 42);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(255, 255, 255);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(161, 161, 170);
pub const ACCENT: Color32 = Color32::from_rgb(236, 72, 153);
pub const ACCENT_STRONG: Color32 = Color32::from_rgb(219, 39, 119);
pub const ACCENT_SOFT: Color32 = Color32::from_rgb(244, 114, 182);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(4);
pub const PANEL_PADDING: Vec2 = Vec2::new(24.0, 24.0);

/// Content column width, roughly a phone held sideways
pub const MAX_CONTENT_WIDTH: f32 = 576.0;
pub const TRANSCRIPT_MAX_HEIGHT: f32 = 384.0;
pub const BUTTON_HEIGHT: f32 = 32.0;

/// Apply the black and pink theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.extreme_bg_color = BG_SURFACE;
    style.visuals.hyperlink_color = ACCENT_SOFT;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.hovered.bg_fill = ACCENT;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT_STRONG;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 8.0);

    ctx.set_style(style);
}
