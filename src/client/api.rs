//! Thin typed client over the REST surface.
//!
//! Every call logs the request and the response status; failures are split
//! into transport-level (server unreachable) and shape-level (body did not
//! deserialize) so callers can show the right message.

use std::fmt;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::domain::filter::FaturaFilter;
use crate::transport::http::types::{DbTestResponse, Envelope, FisNoResponse, HealthResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug)]
pub enum ClientError {
    /// The server could not be reached (connect, DNS, timeout).
    Network(reqwest::Error),
    /// The server answered, but the body was not the expected shape.
    Shape(reqwest::Error),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Network(e) => write!(f, "API connection failed: {}", e),
            ClientError::Shape(e) => write!(f, "unexpected API response shape: {}", e),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Network(e) | ClientError::Shape(e) => Some(e),
        }
    }
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` without a trailing slash, e.g. `http://localhost:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get_json("/api/health", None).await
    }

    pub async fn db_test(&self) -> Result<DbTestResponse, ClientError> {
        self.get_json("/api/db-test", None).await
    }

    pub async fn faturalar(&self) -> Result<Envelope, ClientError> {
        self.get_json("/api/faturalar", None).await
    }

    pub async fn faturalar_filtreli(
        &self,
        filter: &FaturaFilter,
    ) -> Result<Envelope, ClientError> {
        self.get_json("/api/faturalar/filtreli", Some(filter)).await
    }

    pub async fn latest_fis_no(&self) -> Result<FisNoResponse, ClientError> {
        self.get_json("/api/latest-fis-no", None).await
    }

    pub async fn malzeme_fis_tipleri(&self) -> Result<Envelope, ClientError> {
        self.get_json("/api/malzeme-fis-tipleri", None).await
    }

    pub async fn depolar(&self) -> Result<Envelope, ClientError> {
        self.get_json("/api/depolar", None).await
    }

    pub async fn siparisler(&self) -> Result<Envelope, ClientError> {
        self.get_json("/api/siparisler", None).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&FaturaFilter>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        println!("> API request: GET {}", url);

        let mut request = self.http.get(&url).timeout(REQUEST_TIMEOUT);
        if let Some(filter) = query {
            request = request.query(filter);
        }

        let response = request.send().await.map_err(ClientError::Network)?;
        println!("> API response: {} {}", response.status(), url);

        response.json::<T>().await.map_err(ClientError::Shape)
    }
}

/// Deserializes an envelope's data array into typed records.
pub(crate) fn parse_list<T: DeserializeOwned>(
    data: Option<Vec<serde_json::Value>>,
) -> Result<Vec<T>, serde_json::Error> {
    data.unwrap_or_default().into_iter().map(serde_json::from_value).collect()
}
