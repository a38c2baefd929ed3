use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::domain::LedgerError;
use shared::{ApiResponse, Party, PartyKind};

/// Map a domain failure onto the wire.
///
/// Rejected requests keep status 200 with `success: false`, the shape the
/// client branches on. Storage failures are a 500.
pub fn ledger_error_response(context: &str, error: LedgerError) -> Response {
    if error.is_rejection() {
        warn!("{}: {}", context, error);
        (StatusCode::OK, Json(ApiResponse::rejected(error.to_string()))).into_response()
    } else {
        error!("{}: {:?}", context, error);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::rejected(format!("{}: storage error", context))),
        )
            .into_response()
    }
}

/// `{success: true, <kind>: party}`; the key is `customer` or `supplier`
pub fn party_saved(kind: PartyKind, party: Party) -> Response {
    (StatusCode::OK, Json(json!({ "success": true, kind.as_str(): party }))).into_response()
}
