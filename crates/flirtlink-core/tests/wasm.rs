//! WASM-target tests for flirtlink-core.
//!
//! Runs the page reducer and event bus under wasm32-unknown-unknown
//! via `wasm-pack test --node`.

use wasm_bindgen_test::*;

use flirtlink_core::event_bus::EventBus;
use flirtlink_core::page::*;
use flirtlink_types::persona::AgentHandle;
use flirtlink_types::wire::ChatResponse;
use flirtlink_types::ServiceError;

#[wasm_bindgen_test]
fn event_bus_emit_and_drain() {
    let bus = EventBus::new();
    bus.emit(PageEvent::NoticeDismissed);
    assert!(bus.has_pending());
    assert_eq!(bus.drain().len(), 1);
    assert!(!bus.has_pending());
}

#[wasm_bindgen_test]
fn launch_then_send_roundtrip() {
    let mut state = PageState::new();
    state.draft.persona_name = "Luna".to_string();
    let mut state = state.reduce(PageEvent::Launched(Ok(AgentHandle::new("a1"))));
    assert_eq!(state.chat_title(), "Chat with Luna");

    state.chat_mut().unwrap().input = "hi".to_string();
    let ticket = state.begin_send().unwrap();
    assert_eq!(ticket.agent.as_str(), "a1");

    let state = state.reduce(PageEvent::Replied(Ok(ChatResponse::text("hey there"))));
    let chat = state.chat().unwrap();
    assert_eq!(chat.transcript.rendered(), vec!["You: hi", "Agent: hey there"]);
    assert!(chat.input.is_empty());
}

#[wasm_bindgen_test]
fn launch_failure_shows_notice() {
    let state = PageState::new().reduce(PageEvent::Launched(Err(ServiceError::Status(500))));
    assert_eq!(state.view, ViewMode::Form);
    assert_eq!(state.notice.unwrap().message, CREATE_FAILED_NOTICE);
}
