//! Form panel — persona name, personality, and links.

use egui::{self, RichText, TextEdit, Vec2};
use flirtlink_types::persona::PersonaDraft;
use crate::theme::*;

/// What the caller should do after rendering the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// The user clicked Launch
    Launch,
}

/// Render the persona form. Edits go straight into the draft.
pub fn form_panel(ui: &mut egui::Ui, draft: &mut PersonaDraft) -> FormAction {
    let mut launch = false;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(
                RichText::new("💋 Build Your AI FlirtLink")
                    .color(ACCENT)
                    .strong()
                    .size(26.0),
            );
            ui.add_space(8.0);

            ui.add(
                TextEdit::singleline(&mut draft.persona_name)
                    .hint_text("Agent name")
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                TextEdit::multiline(&mut draft.personality_prompt)
                    .hint_text("Agent personality (e.g. flirty bratty submissive...)")
                    .desired_rows(4)
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                TextEdit::singleline(&mut draft.links.onlyfans)
                    .hint_text("OnlyFans link")
                    .desired_width(f32::INFINITY),
            );
            ui.add(
                TextEdit::singleline(&mut draft.links.tip)
                    .hint_text("Tip Me link")
                    .desired_width(f32::INFINITY),
            );

            ui.add_space(8.0);

            let btn = ui.add(
                egui::Button::new(
                    RichText::new("🚀 Launch Agent")
                        .color(TEXT_PRIMARY)
                        .strong(),
                )
                .fill(ACCENT_STRONG)
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), BUTTON_HEIGHT)),
            );
            if btn.clicked() {
                launch = true;
            }
        });

    if launch {
        FormAction::Launch
    } else {
        FormAction::None
    }
}
