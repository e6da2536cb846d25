//! UI-level state that drives rendering.
//! Wraps the page state and folds in request outcomes drained from the
//! EventBus each frame.

use flirtlink_core::page::{PageEvent, PageState};

pub struct UiState {
    pub page: PageState,
    /// Give the message input focus on the next frame
    pub focus_input: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            page: PageState::new(),
            focus_input: false,
        }
    }

    /// Run each event through the page reducer, in order
    pub fn process_events(&mut self, events: Vec<PageEvent>) {
        for event in events {
            let page = std::mem::take(&mut self.page);
            self.page = page.reduce(event);
        }
    }

    pub fn is_busy(&self) -> bool {
        self.page.chat().is_some_and(|c| c.busy)
    }

    pub fn send_label(&self) -> &'static str {
        if self.is_busy() {
            "Talking..."
        } else {
            "Send 💬"
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
