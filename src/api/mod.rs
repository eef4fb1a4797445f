//! Backend API Client
//!
//! HTTP data-access layer for the dashboard backend. Every accessor issues
//! exactly one GET and hands back the decoded response body untouched.
//!
//! # Endpoints
//!
//! ## Basic indicators
//! - `GET /api/ibge/unemployment` - Unemployment rate series and summary
//! - `GET /api/ibge/unemployment/summary` - Unemployment summary only
//! - `GET /api/ibge/occupied` - Occupied population
//! - `GET /api/ibge/income` - Average income
//! - `GET /api/ibge/informality` - Income mass
//!
//! ## Analysis by dimension
//! - `GET /api/analysis/sex?indicator=<name>`
//! - `GET /api/analysis/race?indicator=<name>`
//! - `GET /api/analysis/age`
//! - `GET /api/analysis/education?indicator=<name>`
//! - `GET /api/analysis/region?indicator=<name>`
//!
//! ## Health
//! - `GET /health` - Backend liveness (outside the `/api` prefix)
//!
//! # Example
//!
//! ```rust,no_run
//! use ibge_dashboard::api::{ClientConfig, IbgeApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = IbgeApi::new(ClientConfig::default())?;
//!
//!     let unemployment = api.unemployment().await?;
//!     let by_sex = api.analysis_by_sex(Some("income")).await?;
//!
//!     println!("{unemployment}\n{by_sex}");
//!     Ok(())
//! }
//! ```

mod client;
pub mod dto;
mod endpoint;
pub mod error;

pub use client::{ClientConfig, IbgeApi};
pub use dto::{AnalysisPayload, CategorySeries, HealthStatus, IndicatorPayload, SeriesPoint, Summary};
pub use endpoint::{Endpoint, DEFAULT_INDICATOR};
pub use error::{ApiError, ApiResult};
