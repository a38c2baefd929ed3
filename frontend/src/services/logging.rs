use gloo::net::http::Request;
use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::ApiClient;

/// Logs to the browser console and forwards the line to `POST /api/logs`
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        gloo::console::debug!(format!("[{}] {}", component, message));
        Self::log("debug", message, Some(component.to_string()));
    }

    pub fn info_with_component(component: &str, message: &str) {
        gloo::console::info!(format!("[{}] {}", component, message));
        Self::log("info", message, Some(component.to_string()));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        gloo::console::warn!(format!("[{}] {}", component, message));
        Self::log("warn", message, Some(component.to_string()));
    }

    pub fn error_with_component(component: &str, message: &str) {
        gloo::console::error!(format!("[{}] {}", component, message));
        Self::log("error", message, Some(component.to_string()));
    }

    fn log(level: &str, message: &str, component: Option<String>) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component,
        };

        // Send log asynchronously without blocking; a lost line is not worth reporting
        spawn_local(async move {
            let url = ApiClient::from_build_env().url("logs");
            if let Ok(request) = Request::post(&url).json(&request) {
                let _ = request.send().await;
            }
        });
    }
}
