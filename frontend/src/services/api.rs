use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{
    ApiResponse, DashboardStats, DebtDraft, PartyDetailsResponse, PartyDraft, PartyKind,
    PartyListResponse, PartyResponse, TransactionResponse,
};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    /// Client for the backend that served this page (same-origin relative URLs)
    pub fn new() -> Self {
        Self { base_url: String::new() }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Backend chosen at build time through `KINASH_API_URL`, else same-origin
    pub fn from_build_env() -> Self {
        match option_env!("KINASH_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::with_base_url(url.trim().to_string()),
            _ => Self::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    /// Customers or suppliers with the categories offered for them
    pub async fn list_parties(&self, kind: PartyKind) -> Result<PartyListResponse, String> {
        let url = self.url(kind.plural());
        match Request::get(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Failed to fetch {}: {}", kind.plural(), e)),
        }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, String> {
        match Request::get(&self.url("stats")).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Failed to fetch stats: {}", e)),
        }
    }

    /// A single party with its transaction history
    pub async fn get_party(&self, kind: PartyKind, id: u64) -> Result<PartyDetailsResponse, String> {
        let url = self.url(&format!("get_{}/{}", kind, id));
        match Request::get(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Failed to fetch {}: {}", kind, e)),
        }
    }

    pub async fn add_party(&self, kind: PartyKind, draft: &PartyDraft) -> Result<PartyResponse, String> {
        self.post_json(&format!("add_{}", kind), draft).await
    }

    pub async fn update_party(&self, kind: PartyKind, id: u64, draft: &PartyDraft) -> Result<PartyResponse, String> {
        self.post_json(&format!("update_{}/{}", kind, id), draft).await
    }

    pub async fn delete_party(&self, kind: PartyKind, id: u64) -> Result<ApiResponse, String> {
        let url = self.url(&format!("delete_{}/{}", kind, id));
        match Request::post(&url).send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    pub async fn add_transaction(&self, draft: &DebtDraft) -> Result<TransactionResponse, String> {
        self.post_json("add_transaction", draft).await
    }

    /// Raw PDF bytes of the customers or suppliers report
    pub async fn export_pdf(&self, kind: PartyKind) -> Result<Vec<u8>, String> {
        let url = self.url(&format!("export_pdf?type={}", kind.plural()));
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("Export failed with status {}", response.status()));
        }

        response
            .binary()
            .await
            .map_err(|e| format!("Failed to read report: {}", e))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, String>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let request = Request::post(&self.url(path))
            .json(body)
            .map_err(|e| format!("Failed to serialize request: {}", e))?;

        match request.send().await {
            Ok(response) => read_json(response).await,
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

/// Decode a JSON body whatever the status: the backend reports rejections
/// and storage failures alike as `{success: false, message}`
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))?;

    serde_json::from_str(&text).map_err(|e| {
        if (200..300).contains(&status) {
            format!("Failed to parse response: {}", e)
        } else {
            format!("Request failed with status {}", status)
        }
    })
}
