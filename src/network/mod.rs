pub mod api_client;
pub mod config;

pub use api_client::{ApiClient, ApiError};

use config::{ApiConfig, ConfigSources};
use lazy_static::lazy_static;
use std::sync::{PoisonError, RwLock};
use wasm_bindgen::prelude::*;

use crate::messages::Message;
use crate::routing;
use crate::state::{dispatch_global_message, APP_STATE};

lazy_static! {
    static ref API_CONFIG: RwLock<ConfigSources> = RwLock::new(ConfigSources::default());
}

/// Initialize the API configuration from the build-time `API_BASE_URL`.
pub fn init_api_config() -> Result<(), &'static str> {
    let config = ApiConfig::new()?;
    API_CONFIG.write().unwrap_or_else(PoisonError::into_inner).build = Some(config);
    Ok(())
}

/// Initialize the API configuration from a JS-provided URL.
/// Overrides whatever the build supplied. When a page was already mounted
/// against the previous URL it is mounted again so its data comes from the
/// new backend.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    API_CONFIG.write().unwrap_or_else(PoisonError::into_inner).runtime = Some(ApiConfig::from_url(api_base_url));

    let mounted = APP_STATE.with(|state| state.borrow().mounted);
    if mounted {
        dispatch_global_message(Message::Navigate(routing::current_route()));
    }
    Ok(())
}

/// Whether the host page has supplied a base URL.
pub(crate) fn has_runtime_config() -> bool {
    API_CONFIG.read().unwrap_or_else(PoisonError::into_inner).has_runtime()
}

/// Current configuration: runtime, then build time, then the local default.
pub(crate) fn api_config() -> ApiConfig {
    API_CONFIG.read().unwrap_or_else(PoisonError::into_inner).resolve()
}
