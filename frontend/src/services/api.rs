use gloo::net::http::Request;
use shared::{normalize_dose_log_payload, DoseLogEntry, DoseSchedule};
use thiserror::Error;

use super::config::AppConfig;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to serialize request: {0}")]
    Serialize(String),
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// API client for the dose reminder backend
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    device_id: String,
}

impl ApiClient {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            device_id: config.device_id.clone(),
        }
    }

    pub fn dose_time_url(&self) -> String {
        format!("{}/api/dose-time", self.base_url)
    }

    pub fn dose_log_url(&self) -> String {
        let device_id = String::from(js_sys::encode_uri_component(&self.device_id));
        format!("{}/api/dose-log?deviceId={}", self.base_url, device_id)
    }

    /// Send the current schedule (including `repeatDays`) to the backend
    pub async fn push_schedule(&self, schedule: &DoseSchedule) -> Result<(), ApiError> {
        let response = Request::post(&self.dose_time_url())
            .json(schedule)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::Status {
                status: response.status(),
                body,
            })
        }
    }

    /// Fetch the dose history for the configured device.
    ///
    /// A body that is not a JSON array yields an empty list.
    pub async fn fetch_dose_logs(&self) -> Result<Vec<DoseLogEntry>, ApiError> {
        let response = Request::get(&self.dose_log_url())
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let payload = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(normalize_dose_log_payload(payload))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_endpoint_urls() {
        let client = ApiClient::from_config(&AppConfig::with_base_url(Some("https://api.example.com")));
        assert_eq!(client.dose_time_url(), "https://api.example.com/api/dose-time");
        assert_eq!(
            client.dose_log_url(),
            "https://api.example.com/api/dose-log?deviceId=DEVICE_001"
        );
    }

    #[wasm_bindgen_test]
    fn test_device_id_is_encoded() {
        let config = AppConfig {
            base_url: "http://localhost:5000".to_string(),
            device_id: "kitchen tablet".to_string(),
        };
        let client = ApiClient::from_config(&config);
        assert_eq!(
            client.dose_log_url(),
            "http://localhost:5000/api/dose-log?deviceId=kitchen%20tablet"
        );
    }

    #[wasm_bindgen_test]
    fn test_error_messages() {
        let err = ApiError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Server error 500: boom");
    }
}
