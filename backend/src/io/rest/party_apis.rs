//! # REST API for Customers and Suppliers
//!
//! Both kinds share one set of handlers; the routes bake the kind in, so
//! `/add_customer` and `/add_supplier` differ only in the [`PartyKind`] they pass.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::info;

use super::responses::{ledger_error_response, party_saved};
use crate::AppState;
use shared::{ApiResponse, PartyDraft, PartyKind, PartyListResponse};

/// Routes for both party kinds
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(routes_for(PartyKind::Customer))
        .merge(routes_for(PartyKind::Supplier))
}

fn routes_for(kind: PartyKind) -> Router<AppState> {
    Router::new()
        .route(
            &format!("/add_{}", kind),
            post(move |state: State<AppState>, body: Json<PartyDraft>| add_party(kind, state, body)),
        )
        .route(
            &format!("/update_{}/:id", kind),
            post(move |state: State<AppState>, id: Path<u64>, body: Json<PartyDraft>| {
                update_party(kind, state, id, body)
            }),
        )
        .route(
            &format!("/delete_{}/:id", kind),
            post(move |state: State<AppState>, id: Path<u64>| delete_party(kind, state, id)),
        )
        .route(
            &format!("/get_{}/:id", kind),
            get(move |state: State<AppState>, id: Path<u64>| get_party(kind, state, id)),
        )
        .route(
            &format!("/{}", kind.plural()),
            get(move |state: State<AppState>| list_parties(kind, state)),
        )
}

/// POST /api/add_<kind>
pub async fn add_party(
    kind: PartyKind,
    State(state): State<AppState>,
    Json(draft): Json<PartyDraft>,
) -> Response {
    info!("POST /api/add_{} - name: {}", kind, draft.name);

    match state.party_service.add(kind, draft).await {
        Ok(party) => party_saved(kind, party),
        Err(e) => ledger_error_response(&format!("Failed to add {}", kind), e),
    }
}

/// POST /api/update_<kind>/:id
pub async fn update_party(
    kind: PartyKind,
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(draft): Json<PartyDraft>,
) -> Response {
    info!("POST /api/update_{}/{} - request: {:?}", kind, id, draft);

    match state.party_service.update(kind, id, draft).await {
        Ok(party) => party_saved(kind, party),
        Err(e) => ledger_error_response(&format!("Failed to update {}", kind), e),
    }
}

/// POST /api/delete_<kind>/:id
pub async fn delete_party(kind: PartyKind, State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    info!("POST /api/delete_{}/{}", kind, id);

    match state.party_service.delete(kind, id).await {
        Ok(_) => (StatusCode::OK, Json(ApiResponse::ok())).into_response(),
        Err(e) => ledger_error_response(&format!("Failed to delete {}", kind), e),
    }
}

/// GET /api/get_<kind>/:id
pub async fn get_party(kind: PartyKind, State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    info!("GET /api/get_{}/{}", kind, id);

    match state.party_service.get(kind, id).await {
        Ok((party, transactions)) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                kind.as_str(): party,
                "transactions": transactions,
            })),
        )
            .into_response(),
        Err(e) => ledger_error_response(&format!("Failed to get {}", kind), e),
    }
}

/// GET /api/customers, GET /api/suppliers
pub async fn list_parties(kind: PartyKind, State(state): State<AppState>) -> Response {
    info!("GET /api/{}", kind.plural());

    match state.party_service.list(kind).await {
        Ok((parties, categories)) => (
            StatusCode::OK,
            Json(PartyListResponse { success: true, parties, categories }),
        )
            .into_response(),
        Err(e) => ledger_error_response(&format!("Failed to list {}", kind.plural()), e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{get_json, post_json, test_app};
    use super::*;
    use shared::{PartyDetailsResponse, PartyResponse};

    #[tokio::test]
    async fn test_add_customer_returns_it_under_customer_key() -> Result<(), Box<dyn std::error::Error>> {
        let (app, _) = test_app();

        let draft = PartyDraft { name: "Ali".to_string(), phone: "0555".to_string(), ..Default::default() };
        let (status, body) = post_json(&app, "/api/add_customer", &draft).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["customer"]["name"], "Ali");
        assert_eq!(body["customer"]["balance"], 0.0);

        let response: PartyResponse = serde_json::from_value(body)?;
        assert_eq!(response.party.map(|p| p.id), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn test_blank_name_is_rejected_with_200() -> Result<(), Box<dyn std::error::Error>> {
        let (app, _) = test_app();

        let (status, body) = post_json(&app, "/api/add_supplier", &PartyDraft::default()).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Name cannot be empty");
        Ok(())
    }

    #[tokio::test]
    async fn test_update_and_get_supplier() -> Result<(), Box<dyn std::error::Error>> {
        let (app, state) = test_app();
        let mill = state
            .party_service
            .add(PartyKind::Supplier, PartyDraft { name: "Mill".to_string(), ..Default::default() })
            .await?;

        let changes = PartyDraft { name: "Grand Mill".to_string(), category: "Premium".to_string(), ..Default::default() };
        let (status, body) = post_json(&app, &format!("/api/update_supplier/{}", mill.id), &changes).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["supplier"]["name"], "Grand Mill");

        let (status, body) = get_json(&app, &format!("/api/get_supplier/{}", mill.id)).await?;
        assert_eq!(status, StatusCode::OK);
        let details: PartyDetailsResponse = serde_json::from_value(body)?;
        assert!(details.success);
        assert_eq!(details.party.map(|p| p.category), Some("Premium".to_string()));
        assert!(details.transactions.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_party() -> Result<(), Box<dyn std::error::Error>> {
        let (app, _) = test_app();

        let (status, body) = get_json(&app, "/api/get_customer/77").await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "customer 77 not found");

        let (_, body) = post_json(&app, "/api/update_customer/77", &PartyDraft {
            name: "Ghost".to_string(),
            ..Default::default()
        })
        .await?;
        assert_eq!(body["success"], false);
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_then_list() -> Result<(), Box<dyn std::error::Error>> {
        let (app, state) = test_app();
        for name in ["Ali", "Sara"] {
            state
                .party_service
                .add(PartyKind::Customer, PartyDraft { name: name.to_string(), ..Default::default() })
                .await?;
        }

        let (status, body) = post_json(&app, "/api/delete_customer/1", &serde_json::json!({})).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        // Deleting again is still a success
        let (_, body) = post_json(&app, "/api/delete_customer/1", &serde_json::json!({})).await?;
        assert_eq!(body["success"], true);

        let (status, body) = get_json(&app, "/api/customers").await?;
        assert_eq!(status, StatusCode::OK);
        let list: PartyListResponse = serde_json::from_value(body)?;
        assert_eq!(list.parties.len(), 1);
        assert_eq!(list.parties[0].name, "Sara");
        assert_eq!(list.categories, vec!["Regular", "VIP"]);
        Ok(())
    }
}
