//! HTTP API Client
//!
//! Functions for communicating with the dashboard service.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::error::{ApiError, ApiResult};
use crate::geo::FeatureCollection;
use crate::state::chat::{ChatEntry, ChatRole};

// ============ Response Types ============

/// A stored chat turn as listed by `/supabase-info`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HistoryEntry {
    pub role: ChatRole,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl HistoryEntry {
    /// Short label for `created_at`, when it is RFC 3339
    pub fn timestamp_label(&self) -> Option<String> {
        let raw = self.created_at.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.format("%b %d, %H:%M").to_string())
    }
}

impl From<HistoryEntry> for ChatEntry {
    fn from(entry: HistoryEntry) -> Self {
        ChatEntry { role: entry.role, text: entry.text }
    }
}

/// `/supabase-info` wraps the list in `history`; a bare list is accepted too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum HistoryPayload {
    Wrapped { history: Vec<HistoryEntry> },
    Bare(Vec<HistoryEntry>),
}

impl HistoryPayload {
    pub fn into_entries(self) -> Vec<HistoryEntry> {
        match self {
            HistoryPayload::Wrapped { history } => history,
            HistoryPayload::Bare(history) => history,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PromptRequest<'a> {
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct PromptResponse {
    pub result: String,
}

/// One series of `/chartdata`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartRow {
    pub name: String,
    #[serde(rename = "Median")]
    pub median: f64,
    #[serde(rename = "Minimum")]
    pub minimum: f64,
}

#[derive(Debug, Deserialize)]
pub struct ChartDataResponse {
    pub chart_data: Vec<ChartRow>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

// ============ API Functions ============

/// Turn a response into `T`, mapping non-2xx replies to `ApiError::Status`
async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        return Err(ApiError::Status { status, message });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(api_base: &str, path: &str) -> ApiResult<T> {
    let response = Request::get(&config::endpoint(api_base, path))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response).await
}

/// Fetch the stored chat history, oldest first
pub async fn fetch_history(api_base: &str) -> ApiResult<Vec<HistoryEntry>> {
    let payload: HistoryPayload = get_json(api_base, "supabase-info").await?;
    Ok(payload.into_entries())
}

/// Send a prompt to the assistant and return its reply
pub async fn send_prompt(api_base: &str, text: &str) -> ApiResult<String> {
    let response = Request::post(&config::endpoint(api_base, "gemini-response"))
        .json(&PromptRequest { text })
        .map_err(|e| ApiError::RequestBuild(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let reply: PromptResponse = read_json(response).await?;
    Ok(reply.result)
}

/// Fetch dengue cluster polygons
pub async fn fetch_dengue_clusters(api_base: &str) -> ApiResult<FeatureCollection> {
    get_json(api_base, "denguecluster").await
}

/// Fetch rainfall stations with their latest readings
pub async fn fetch_rainfall_stations(api_base: &str) -> ApiResult<FeatureCollection> {
    get_json(api_base, "rainfallstations").await
}

/// Fetch the overview chart series
pub async fn fetch_chart_data(api_base: &str) -> ApiResult<Vec<ChartRow>> {
    let response: ChartDataResponse = get_json(api_base, "chartdata").await?;
    Ok(response.chart_data)
}
