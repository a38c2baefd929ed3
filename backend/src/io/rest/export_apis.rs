//! # REST API for PDF Reports

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::{info, warn};

use super::responses::ledger_error_response;
use crate::domain::LedgerError;
use crate::AppState;
use shared::{ApiResponse, PartyKind};

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// `customers` or `suppliers`
    #[serde(rename = "type", default)]
    pub report_type: String,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/export_pdf", get(export_pdf))
}

/// GET /api/export_pdf?type=<customers|suppliers>
pub async fn export_pdf(State(state): State<AppState>, Query(query): Query<ExportQuery>) -> Response {
    info!("GET /api/export_pdf - type: {}", query.report_type);

    match state.report_service.render_named(&query.report_type).await {
        Ok(bytes) => {
            // render_named only succeeds for a known plural
            let file_name = PartyKind::from_plural(&query.report_type)
                .map(|kind| kind.report_file_name())
                .unwrap_or_else(|| "report.pdf".to_string());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", file_name)),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e @ LedgerError::UnknownReportType(_)) => {
            warn!("Rejected export: {}", e);
            (StatusCode::BAD_REQUEST, Json(ApiResponse::rejected(e.to_string()))).into_response()
        }
        Err(e) => ledger_error_response("Failed to export report", e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_app;
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    async fn export(app: &Router, uri: &str) -> Result<Response, Box<dyn std::error::Error>> {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).method(Method::GET).body(Body::empty())?)
            .await?;
        Ok(response)
    }

    #[tokio::test]
    async fn test_export_customers_pdf() -> Result<(), Box<dyn std::error::Error>> {
        let (app, _) = test_app();

        let response = export(&app, "/api/export_pdf?type=customers").await?;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"customers_report.pdf\""
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        assert!(body.starts_with(b"%PDF"));
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_or_missing_type_is_bad_request() -> Result<(), Box<dyn std::error::Error>> {
        let (app, _) = test_app();

        let response = export(&app, "/api/export_pdf?type=cashbox").await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = export(&app, "/api/export_pdf").await?;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        Ok(())
    }
}
