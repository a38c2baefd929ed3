use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use tracing::info;

use super::responses::ledger_error_response;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Response {
    info!("GET /api/stats");

    match state.stats_service.dashboard().await {
        Ok(stats) => (StatusCode::OK, Json(stats)).into_response(),
        Err(e) => ledger_error_response("Failed to load stats", e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{get_json, test_app};
    use super::*;
    use shared::{DashboardStats, PartyDraft, PartyKind};

    #[tokio::test]
    async fn test_stats_count_parties() -> Result<(), Box<dyn std::error::Error>> {
        let (app, state) = test_app();
        state
            .party_service
            .add(PartyKind::Supplier, PartyDraft { name: "Mill".to_string(), ..Default::default() })
            .await?;

        let (status, body) = get_json(&app, "/api/stats").await?;
        assert_eq!(status, StatusCode::OK);

        let stats: DashboardStats = serde_json::from_value(body)?;
        assert_eq!(stats.customers_count, 0);
        assert_eq!(stats.suppliers_count, 1);
        assert_eq!(stats.cash_balance, 0.0);
        Ok(())
    }
}
