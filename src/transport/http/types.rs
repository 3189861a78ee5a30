use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::app::data_service::DataService;
use crate::domain::filter::FaturaFilter;

#[derive(Clone)]
pub struct AppState {
    pub data_service: Arc<DataService>,
}

/// Provenance of the data in a response.
///
/// `Database` and `Test` mean what they say; `Fallback` means a live attempt
/// was made and failed (still a successful, degraded response); `Error` is
/// reserved for reference queries with no static fallback wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataMode {
    Database,
    Test,
    Fallback,
    Error,
}

/// Uniform response wrapper for the list endpoints.
///
/// List endpoints always answer HTTP 200; success, degradation and failure
/// all travel in these fields. Collaborators must not read the HTTP status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<Object>>)]
    pub data: Option<Vec<JsonValue>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    pub mode: DataMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<FaturaFilter>,
}

impl Envelope {
    pub fn database(data: Vec<JsonValue>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data: Some(data),
            count: Some(count),
            mode: DataMode::Database,
            warning: None,
            error: None,
            message: None,
            filters: None,
        }
    }

    pub fn test(data: Vec<JsonValue>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data: Some(data),
            count: Some(count),
            mode: DataMode::Test,
            warning: None,
            error: None,
            message: None,
            filters: None,
        }
    }

    pub fn fallback(data: Vec<JsonValue>, warning: impl Into<String>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data: Some(data),
            count: Some(count),
            mode: DataMode::Fallback,
            warning: Some(warning.into()),
            error: None,
            message: None,
            filters: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            mode: DataMode::Error,
            warning: None,
            error,
            message: Some(message.into()),
            filters: None,
        }
    }

    pub fn with_filters(mut self, filters: FaturaFilter) -> Self {
        self.filters = Some(filters);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
    pub status: String,
}

/// Result of the `SELECT 1` connectivity probe.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DbTestResponse {
    pub success: bool,
    pub message: String,
    pub mode: DataMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub test_result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Latest/next fiş number pair (shape predates the envelope, kept as-is).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FisNoResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_fis_no: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_fis_no: Option<i64>,
    pub mode: DataMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FisNoResponse {
    pub fn ok(latest: i64, next: i64, mode: DataMode) -> Self {
        Self {
            success: true,
            latest_fis_no: Some(latest),
            next_fis_no: Some(next),
            mode,
            message: None,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            latest_fis_no: None,
            next_fis_no: None,
            mode: DataMode::Error,
            message: Some(message.into()),
            error,
        }
    }
}
