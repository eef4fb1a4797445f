//! Dashboard backend REST client
//!
//! Thin accessors over `GET` requests. Bodies come back as raw
//! [`serde_json::Value`]; typed views live in [`super::dto`].

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

use super::dto::{self, HealthStatus};
use super::endpoint::{Endpoint, DEFAULT_INDICATOR};
use super::error::{ApiError, ApiResult};

/// Configuration for the backend client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin serving the backend (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Prefix shared by every data endpoint
    pub base_path: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            base_path: "/api".to_string(),
            request_timeout_ms: 60_000,
        }
    }
}

impl From<&crate::config::ApiConfig> for ClientConfig {
    fn from(config: &crate::config::ApiConfig) -> Self {
        Self {
            base_url: config.url.clone(),
            base_path: config.base_path.clone(),
            request_timeout_ms: config.request_timeout_secs.saturating_mul(1000),
        }
    }
}

/// Backend client, one method per endpoint
#[derive(Debug, Clone)]
pub struct IbgeApi {
    client: Client,
    config: ClientConfig,
}

impl IbgeApi {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL of an API path
    pub fn url_for(&self, path: &str) -> String {
        let origin = self.config.base_url.trim_end_matches('/');
        let base = self.config.base_path.trim_matches('/');
        if base.is_empty() {
            format!("{}{}", origin, path)
        } else {
            format!("{}/{}{}", origin, base, path)
        }
    }

    pub async fn unemployment(&self) -> ApiResult<Value> {
        self.get(Endpoint::Unemployment, None).await
    }

    pub async fn unemployment_summary(&self) -> ApiResult<Value> {
        self.get(Endpoint::UnemploymentSummary, None).await
    }

    pub async fn occupied(&self) -> ApiResult<Value> {
        self.get(Endpoint::Occupied, None).await
    }

    pub async fn income(&self) -> ApiResult<Value> {
        self.get(Endpoint::Income, None).await
    }

    pub async fn informality(&self) -> ApiResult<Value> {
        self.get(Endpoint::Informality, None).await
    }

    /// Breakdown by sex; `indicator` defaults to unemployment
    pub async fn analysis_by_sex(&self, indicator: Option<&str>) -> ApiResult<Value> {
        self.get(Endpoint::AnalysisBySex, Some(indicator.unwrap_or(DEFAULT_INDICATOR)))
            .await
    }

    /// Breakdown by race; `indicator` defaults to unemployment
    pub async fn analysis_by_race(&self, indicator: Option<&str>) -> ApiResult<Value> {
        self.get(Endpoint::AnalysisByRace, Some(indicator.unwrap_or(DEFAULT_INDICATOR)))
            .await
    }

    /// Breakdown by age group. The backend only publishes unemployment here.
    pub async fn analysis_by_age(&self) -> ApiResult<Value> {
        self.get(Endpoint::AnalysisByAge, None).await
    }

    /// Breakdown by education; `indicator` defaults to unemployment
    pub async fn analysis_by_education(&self, indicator: Option<&str>) -> ApiResult<Value> {
        self.get(
            Endpoint::AnalysisByEducation,
            Some(indicator.unwrap_or(DEFAULT_INDICATOR)),
        )
        .await
    }

    /// Breakdown by region; `indicator` defaults to unemployment
    pub async fn analysis_by_region(&self, indicator: Option<&str>) -> ApiResult<Value> {
        self.get(Endpoint::AnalysisByRegion, Some(indicator.unwrap_or(DEFAULT_INDICATOR)))
            .await
    }

    /// Call the accessor behind `endpoint`.
    ///
    /// `indicator` is ignored for endpoints that take none.
    pub async fn fetch(&self, endpoint: Endpoint, indicator: Option<&str>) -> ApiResult<Value> {
        if let Some(indicator) = indicator.filter(|_| !endpoint.accepts_indicator()) {
            tracing::warn!(%endpoint, indicator, "Endpoint takes no indicator, ignoring it");
        }

        match endpoint {
            Endpoint::Unemployment => self.unemployment().await,
            Endpoint::UnemploymentSummary => self.unemployment_summary().await,
            Endpoint::Occupied => self.occupied().await,
            Endpoint::Income => self.income().await,
            Endpoint::Informality => self.informality().await,
            Endpoint::AnalysisBySex => self.analysis_by_sex(indicator).await,
            Endpoint::AnalysisByRace => self.analysis_by_race(indicator).await,
            Endpoint::AnalysisByAge => self.analysis_by_age().await,
            Endpoint::AnalysisByEducation => self.analysis_by_education(indicator).await,
            Endpoint::AnalysisByRegion => self.analysis_by_region(indicator).await,
        }
    }

    /// Check if the backend is up
    pub async fn health(&self) -> ApiResult<HealthStatus> {
        let url = format!("{}/health", self.config.base_url.trim_end_matches('/'));
        let body = self.send(&url, None).await?;
        dto::decode(&body)
    }

    async fn get(&self, endpoint: Endpoint, indicator: Option<&str>) -> ApiResult<Value> {
        let url = self.url_for(endpoint.path());
        self.send(&url, indicator).await
    }

    /// Issue one GET and decode the body. No retries.
    async fn send(&self, url: &str, indicator: Option<&str>) -> ApiResult<Value> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("api_request", request_id = %request_id, url, indicator);

        async move {
            let mut request = self.client.get(url);
            if let Some(indicator) = indicator {
                request = request.query(&[("indicator", indicator)]);
            }

            let response = request.send().await.map_err(|e| {
                let err = ApiError::from_transport(e);
                tracing::warn!(error = %err, "API request failed");
                err
            })?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                tracing::warn!(status = status.as_u16(), "API returned error status");
                return Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response
                .json::<Value>()
                .await
                .map_err(ApiError::from_transport)?;

            tracing::debug!(status = status.as_u16(), "API request completed");
            Ok(body)
        }
        .instrument(span)
        .await
    }
}
