//! # REST API for Debt Transactions

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use tracing::info;

use super::responses::ledger_error_response;
use crate::AppState;
use shared::{DebtDraft, TransactionResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/add_transaction", post(add_transaction))
}

/// POST /api/add_transaction
pub async fn add_transaction(State(state): State<AppState>, Json(draft): Json<DebtDraft>) -> Response {
    info!("POST /api/add_transaction - request: {:?}", draft);

    match state.transaction_service.add(draft).await {
        Ok(transaction) => (
            StatusCode::OK,
            Json(TransactionResponse { success: true, transaction: Some(transaction), message: None }),
        )
            .into_response(),
        Err(e) => ledger_error_response("Failed to add transaction", e),
    }
}
