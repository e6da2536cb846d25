//! Chat panel — transcript, message input, and Send button.

use egui::{self, RichText, ScrollArea, TextEdit, Vec2};
use flirtlink_core::page::SendTicket;
use flirtlink_types::persona::PersonaLinks;
use flirtlink_types::transcript::{Speaker, TranscriptLine};
use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns a ticket when a Send was started; the
/// user's line is already in the transcript by then.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<SendTicket> {
    let title = state.page.chat_title();
    let busy = state.is_busy();
    let send_label = state.send_label();
    let focus = std::mem::take(&mut state.focus_input);
    let mut send_requested = false;

    let chat = state.page.chat_mut()?;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.heading(
                RichText::new(title)
                    .color(ACCENT_SOFT)
                    .strong()
                    .size(22.0),
            );
            if let Some(links) = &chat.links {
                render_links(ui, links);
            }

            ui.add_space(4.0);

            egui::Frame::default()
                .fill(BG_SECONDARY)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ScrollArea::vertical()
                        .max_height(TRANSCRIPT_MAX_HEIGHT)
                        .auto_shrink([false, true])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for line in chat.transcript.lines() {
                                render_line(ui, line);
                            }
                        });
                });

            ui.add_space(8.0);

            let response = ui.add(
                TextEdit::singleline(&mut chat.input)
                    .hint_text("Type a message...")
                    .desired_width(f32::INFINITY),
            );
            if focus {
                response.request_focus();
            }

            // Enter works even while a reply is pending
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                send_requested = true;
            }

            if send_button(ui, busy, send_label).clicked() {
                send_requested = true;
            }
        });

    if !send_requested {
        return None;
    }
    let ticket = state.page.begin_send();
    if ticket.is_some() {
        state.focus_input = true;
    }
    ticket
}

/// Full-width Send button, disabled while a reply is pending
pub(crate) fn send_button(ui: &mut egui::Ui, busy: bool, label: &str) -> egui::Response {
    ui.add_enabled(
        !busy,
        egui::Button::new(RichText::new(label).color(TEXT_PRIMARY).strong())
            .fill(if busy { BG_SURFACE } else { ACCENT_STRONG })
            .corner_radius(PANEL_ROUNDING)
            .min_size(Vec2::new(ui.available_width(), BUTTON_HEIGHT)),
    )
}

fn render_line(ui: &mut egui::Ui, line: &TranscriptLine) {
    let color = match line.speaker {
        Speaker::User => TEXT_PRIMARY,
        Speaker::Agent => ACCENT_SOFT,
    };
    ui.label(RichText::new(line.to_string()).color(color));
}

fn render_links(ui: &mut egui::Ui, links: &PersonaLinks) {
    if links.is_empty() {
        return;
    }
    ui.horizontal(|ui| {
        if !links.onlyfans.is_empty() {
            ui.hyperlink_to("OnlyFans", &links.onlyfans);
        }
        if !links.tip.is_empty() {
            ui.hyperlink_to("Tip Me", &links.tip);
        }
    });
}
