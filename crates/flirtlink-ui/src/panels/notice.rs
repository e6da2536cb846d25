//! Blocking notice shown when a request fails.

use egui::{self, RichText, Vec2};
use flirtlink_core::page::Notice;
use crate::theme::*;

const NOTICE_WIDTH: f32 = 280.0;

/// Show the notice as a modal. Returns true once the user dismisses it.
pub fn notice_modal(ctx: &egui::Context, notice: &Notice) -> bool {
    let response = notice_window(ctx, notice);
    response.inner.clicked() || response.should_close()
}

/// The modal itself; `inner` is the OK button's response.
pub(crate) fn notice_window(
    ctx: &egui::Context,
    notice: &Notice,
) -> egui::ModalResponse<egui::Response> {
    egui::Modal::new(egui::Id::new("request_failed_notice")).show(ctx, |ui| notice_body(ui, notice))
}

fn notice_body(ui: &mut egui::Ui, notice: &Notice) -> egui::Response {
    ui.set_width(NOTICE_WIDTH);
    ui.label(RichText::new(&notice.message).color(TEXT_PRIMARY));
    ui.add_space(8.0);
    ui.add(
        egui::Button::new(RichText::new("OK").color(TEXT_PRIMARY).strong())
            .fill(ACCENT_STRONG)
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(64.0, 24.0)),
    )
}
