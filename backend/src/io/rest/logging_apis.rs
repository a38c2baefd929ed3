use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use tracing::{debug, error, info, warn};

use crate::AppState;
use shared::{LogRequest, LogResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/logs", post(log_message))
}

/// POST /api/logs: re-emit a client log line through the server's subscriber
pub async fn log_message(
    State(_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(target: "frontend", "{}", message),
        "warn" | "warning" => warn!(target: "frontend", "{}", message),
        "error" => error!(target: "frontend", "{}", message),
        _ => info!(target: "frontend", "{}", message),
    }

    Ok(Json(LogResponse { success: true }))
}
