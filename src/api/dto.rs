//! Data Transfer Objects
//!
//! Typed views of the backend payloads. The accessors never decode into
//! these on their own; callers opt in with `from_value`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::error::ApiResult;

/// Decode a raw payload into a typed view
pub fn decode<T: DeserializeOwned>(value: &Value) -> ApiResult<T> {
    Ok(T::deserialize(value)?)
}

// ============================================
// SERIES DTOs
// ============================================

/// One observation of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Period label, "YYYY-MM" for monthly or quarterly data
    pub period: String,
    /// Missing observations are null
    pub value: Option<f64>,
}

/// Summary statistics the backend computes over a series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(default)]
    pub latest: Option<f64>,
    #[serde(default)]
    pub latest_period: Option<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub average: Option<f64>,
    /// Difference between the latest value and the one before it
    #[serde(default)]
    pub trend: Option<f64>,
}

impl Summary {
    /// True when the series had no usable observation
    pub fn is_empty(&self) -> bool {
        self.latest.is_none()
    }
}

// ============================================
// INDICATOR DTOs
// ============================================

/// Payload of the `/ibge/*` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPayload {
    #[serde(default)]
    pub success: bool,
    /// Human-readable indicator name
    pub indicator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub summary: Summary,
    /// Absent on the summary-only endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<Vec<SeriesPoint>>,
}

impl IndicatorPayload {
    pub fn from_value(value: &Value) -> ApiResult<Self> {
        decode(value)
    }
}

// ============================================
// ANALYSIS DTOs
// ============================================

/// Series of one category within a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySeries {
    pub name: String,
    pub series: Vec<SeriesPoint>,
}

/// Payload of the `/analysis/*` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default)]
    pub success: bool,
    /// Dimension label (e.g., "Sexo", "Região")
    pub classification: String,
    #[serde(default)]
    pub categories: Vec<CategorySeries>,
    #[serde(default)]
    pub summaries: BTreeMap<String, Summary>,
}

impl AnalysisPayload {
    pub fn from_value(value: &Value) -> ApiResult<Self> {
        decode(value)
    }

    /// Summary of a single category
    pub fn summary(&self, category: &str) -> Option<&Summary> {
        self.summaries.get(category)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

// ============================================
// HEALTH DTOs
// ============================================

/// Backend liveness response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
