//! Main egui application — shows the form or the chat and runs requests.

use std::rc::Rc;

use egui::{self, CentralPanel};

use flirtlink_core::actions;
use flirtlink_core::event_bus::EventBus;
use flirtlink_core::page::{PageEvent, SendTicket};
use flirtlink_core::ports::AgentServicePort;
use flirtlink_platform::HttpAgentService;
use flirtlink_types::config::ServiceConfig;
use flirtlink_ui::panels::form::FormAction;
use flirtlink_ui::panels::{chat, form, notice};
use flirtlink_ui::state::UiState;
use flirtlink_ui::theme;

pub struct FlirtLinkApp {
    ui_state: UiState,
    config: ServiceConfig,
    event_bus: EventBus,
    service: Rc<dyn AgentServicePort>,
    first_frame: bool,
}

impl FlirtLinkApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ServiceConfig) -> Self {
        let service: Rc<dyn AgentServicePort> = Rc::new(HttpAgentService::new(config.clone()));
        Self::with_service(config, service)
    }

    /// Build the app around any service implementation
    pub fn with_service(config: ServiceConfig, service: Rc<dyn AgentServicePort>) -> Self {
        Self {
            ui_state: UiState::new(),
            config,
            event_bus: EventBus::new(),
            service,
            first_frame: true,
        }
    }

    /// Fire the creation request; the outcome arrives via the event bus.
    /// A created agent's stored profile is fetched right after.
    fn dispatch_launch(&self, ctx: &egui::Context) {
        let req = self.ui_state.page.launch_request(&self.config);
        let service = self.service.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let event = actions::launch(service.as_ref(), req).await;
            let created = match &event {
                PageEvent::Launched(Ok(agent)) => Some(agent.clone()),
                _ => None,
            };
            event_bus.emit(event);
            ctx.request_repaint();

            if let Some(agent) = created {
                event_bus.emit(actions::load_profile(service.as_ref(), agent).await);
                ctx.request_repaint();
            }
        });
    }

    /// Fire a reply request for a line already shown in the transcript
    fn dispatch_send(&self, ticket: SendTicket, ctx: &egui::Context) {
        let service = self.service.clone();
        let event_bus = self.event_bus.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let event = actions::send(service.as_ref(), ticket).await;
            event_bus.emit(event);
            ctx.request_repaint();
        });
    }
}

impl eframe::App for FlirtLinkApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if self.event_bus.has_pending() {
            self.ui_state.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }

        CentralPanel::default().show(ctx, |ui| {
            ui.set_max_width(theme::MAX_CONTENT_WIDTH);

            if self.ui_state.page.is_chat() {
                if let Some(ticket) = chat::chat_panel(ui, &mut self.ui_state) {
                    self.dispatch_send(ticket, ctx);
                }
            } else if form::form_panel(ui, &mut self.ui_state.page.draft) == FormAction::Launch {
                self.dispatch_launch(ctx);
            }
        });

        if let Some(current) = self.ui_state.page.notice.clone() {
            if notice::notice_modal(ctx, &current) {
                self.ui_state.process_events(vec![PageEvent::NoticeDismissed]);
            }
        }
    }
}
