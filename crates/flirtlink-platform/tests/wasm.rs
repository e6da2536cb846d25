//! WASM-target tests for flirtlink-platform (Node.js runtime).
//!
//! Covers the parts of the HTTP adapter that do not need a live service.

use wasm_bindgen_test::*;

use flirtlink_platform::HttpAgentService;
use flirtlink_types::config::ServiceConfig;

#[wasm_bindgen_test]
fn service_uses_injected_config() {
    let config = ServiceConfig::new("http://127.0.0.1:8000/", "creator-1");
    let service = HttpAgentService::new(config);
    assert_eq!(service.config().creator_id, "creator-1");
    assert_eq!(service.config().endpoint("/chat"), "http://127.0.0.1:8000/chat");
}

#[wasm_bindgen_test]
fn default_config_points_at_hosted_service() {
    let service = HttpAgentService::new(ServiceConfig::default());
    assert!(service.config().api_base.starts_with("https://"));
}
