//! Build-time configuration with an optional runtime override, plus the
//! session hint injected by the gate. The runtime config is read from
//! `window.KONTO_CONFIG` (if present) so static deployments can change
//! the API endpoint without rebuilding. The gate injects
//! `window.KONTO_SESSION` on protected pages; it carries derived facts
//! about the refresh cookie only, never the value.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies
    /// runtime overrides. An empty base URL means same-origin requests.
    pub fn load() -> Self {
        let api_base_url = option_env!("KONTO_API_BASE_URL").unwrap_or("");

        let mut config = Self {
            api_base_url: api_base_url.to_string(),
        };

        if let Some(value) = runtime_api_base_url() {
            config.api_base_url = value;
        }

        config
    }
}

/// Facts about the httpOnly refresh cookie, derived by the gate while it
/// allowed this page to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GateSessionHint {
    pub refresh_token_present: bool,
    pub refresh_token_length: usize,
}

#[cfg(target_arch = "wasm32")]
fn runtime_api_base_url() -> Option<String> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("KONTO_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);
    let value = Reflect::get(&object, &JsValue::from_str("api_base_url"))
        .ok()?
        .as_string()?;
    normalize_runtime_value(&value)
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_api_base_url() -> Option<String> {
    None
}

/// Reads the gate-injected session hint, if this page was served through
/// the protected shell.
#[cfg(target_arch = "wasm32")]
pub fn gate_session_hint() -> Option<GateSessionHint> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let hint = Reflect::get(&window, &JsValue::from_str("KONTO_SESSION")).ok()?;
    if hint.is_null() || hint.is_undefined() {
        return None;
    }
    let object = Object::from(hint);

    let present = Reflect::get(&object, &JsValue::from_str("refreshTokenPresent"))
        .ok()?
        .as_bool()?;
    let length = Reflect::get(&object, &JsValue::from_str("refreshTokenLength"))
        .ok()
        .and_then(|value| value.as_f64())
        .map_or(0, |value| value as usize);

    Some(GateSessionHint {
        refresh_token_present: present,
        refresh_token_length: length,
    })
}

#[cfg(not(target_arch = "wasm32"))]
pub fn gate_session_hint() -> Option<GateSessionHint> {
    None
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
