//! FlirtLink App — WASM entry point.
//!
//! This crate is the composition root. It builds the service
//! configuration once, hands it to the HTTP adapter, and starts the
//! egui application.

mod app;

pub use app::FlirtLinkApp;

use flirtlink_types::config::ServiceConfig;

/// Service settings baked in at build time via `FLIRTLINK_API_BASE` and
/// `FLIRTLINK_CREATOR_ID`. Unset or empty values fall back to defaults.
pub fn build_config() -> ServiceConfig {
    ServiceConfig::from_overrides(
        option_env!("FLIRTLINK_API_BASE"),
        option_env!("FLIRTLINK_CREATOR_ID"),
    )
}

/// WASM entry point — called from index.html
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn main() {
    use wasm_bindgen::JsCast;

    wasm_logger::init(wasm_logger::Config::default());

    let config = build_config();
    log::info!("FlirtLink starting, agent service at {}", config.api_base);

    let web_options = eframe::WebOptions::default();

    let document = web_sys::window()
        .expect("No window")
        .document()
        .expect("No document");
    let canvas = document
        .get_element_by_id("flirtlink_canvas")
        .expect("No canvas element with id 'flirtlink_canvas'")
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .expect("Element is not a canvas");

    wasm_bindgen_futures::spawn_local(async move {
        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(FlirtLinkApp::new(cc, config)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_config_is_usable() {
        let config = build_config();
        assert!(!config.api_base.is_empty());
        assert!(!config.creator_id.is_empty());
        assert!(config.endpoint("/chat").ends_with("/chat"));
    }
}
