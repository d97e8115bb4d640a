//! Reads the `window.CONFIG` object injected by the host page.

use contracts::config::SiteConfig;
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "CONFIG";

/// Current page configuration. Missing or malformed config yields defaults.
///
/// `API_URL` and `projects` are converted one at a time, so a value that
/// cannot cross into Rust (a function, a cyclic object) only loses its own
/// key.
pub fn read_site_config() -> SiteConfig {
    let Some(window) = web_sys::window() else {
        return SiteConfig::default();
    };

    let config = match js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) {
        Ok(value) if value.is_object() => value,
        _ => {
            log::info!("window.{} not set, using defaults", CONFIG_GLOBAL);
            return SiteConfig::default();
        }
    };

    let api_url = read_field(&config, "API_URL");
    let projects = read_field(&config, "projects");
    SiteConfig::from_fields(api_url.as_ref(), projects.as_ref())
}

fn read_field(config: &JsValue, key: &str) -> Option<serde_json::Value> {
    let raw = js_sys::Reflect::get(config, &JsValue::from_str(key)).ok()?;
    if raw.is_undefined() || raw.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<serde_json::Value>(raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("window.{}.{} ignored: {}", CONFIG_GLOBAL, key, e);
            None
        }
    }
}
