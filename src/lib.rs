use wasm_bindgen::prelude::*;

#[macro_use]
mod macros;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod csv_export;
pub mod dom_utils;
pub mod draft;
pub mod listing;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod reducers;
pub mod routing;
pub mod schema;
pub mod state;
pub mod toast;
pub mod ui;
pub mod update;
pub mod views;

pub use network::init_api_config_js;

use messages::Message;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Build-time URL if present; the host page may still override it through
    // `init_api_config_js`, otherwise requests go to the local default.
    if let Err(e) = network::init_api_config() {
        debug_log!("{}; using {}", e, constants::DEFAULT_API_BASE_URL);
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    ui::setup::create_base_ui(&document)?;
    ui::events::setup_ui_event_handlers(&document)?;

    // The host page usually calls `init_api_config_js` right after `init()`
    // resolves, i.e. after this function returned. Give it a moment before
    // the first fetches go out.
    wasm_bindgen_futures::spawn_local(async {
        wait_for_runtime_config(constants::RUNTIME_CONFIG_WAIT_MS).await;
        debug_log!("Using API base URL {}", network::api_config().base_url());
        let mounted = state::APP_STATE.with(|state| state.borrow().mounted);
        if !mounted {
            // Mount the page named by the current hash
            state::dispatch_global_message(Message::Navigate(routing::current_route()));
        }
    });

    Ok(())
}

/// Resolves as soon as the host page configured a URL, or after `timeout_ms`.
/// A later override still applies: `init_api_config_js` remounts the page.
async fn wait_for_runtime_config(timeout_ms: u32) {
    use gloo_timers::future::TimeoutFuture;
    let start = js_sys::Date::now();
    while !network::has_runtime_config() {
        if js_sys::Date::now() - start >= timeout_ms as f64 {
            return;
        }
        TimeoutFuture::new(constants::RUNTIME_CONFIG_POLL_MS).await;
    }
}
