use wasm_bindgen::JsValue;

/// Backend used when the page does not inject `window.API_URL`
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

pub const DEVICE_ID: &str = "DEVICE_001";

/// Runtime configuration, resolved once at startup
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub base_url: String,
    pub device_id: String,
}

impl AppConfig {
    /// Read the base URL override from the page, falling back to the local default
    pub fn resolve() -> Self {
        let injected = web_sys::window()
            .and_then(|window| js_sys::Reflect::get(&window, &JsValue::from_str("API_URL")).ok())
            .and_then(|value| value.as_string());

        let config = Self::with_base_url(injected.as_deref());
        log::info!("Using backend {} for device {}", config.base_url, config.device_id);
        config
    }

    pub fn with_base_url(base_url: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            base_url,
            device_id: DEVICE_ID.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_base_url(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.device_id, "DEVICE_001");
    }

    #[wasm_bindgen_test]
    fn test_override_trims_trailing_slash() {
        let config = AppConfig::with_base_url(Some("https://doses.example.com/"));
        assert_eq!(config.base_url, "https://doses.example.com");
    }

    #[wasm_bindgen_test]
    fn test_blank_override_uses_default() {
        assert_eq!(AppConfig::with_base_url(Some("  ")).base_url, DEFAULT_BASE_URL);
    }

    #[wasm_bindgen_test]
    fn test_resolve_without_injected_url() {
        assert_eq!(AppConfig::resolve().base_url, DEFAULT_BASE_URL);
    }
}
