//! # IBGE Dashboard
//!
//! Client entry point, routing table and HTTP data-access layer of a
//! dashboard presenting Brazilian labor-market indicators (unemployment,
//! occupation, income, informality) broken down by sex, race, age,
//! education and region.
//!
//! ## Modules
//!
//! - [`api`]: One accessor per backend endpoint
//! - [`charts`]: Chart renderer components and their registry
//! - [`pages`]: Home, Dashboard and Analise page modules
//! - [`router`]: Route table with lazy page loading and history navigation
//! - [`app`]: Bootstrap sequence and dependency container
//! - [`config`]: TOML configuration with environment overrides

pub mod api;
pub mod app;
pub mod charts;
pub mod config;
pub mod pages;
pub mod router;

// Re-export top-level types for convenience
pub use api::{
    AnalysisPayload, ApiError, ApiResult, ClientConfig, Endpoint, HealthStatus, IbgeApi,
    IndicatorPayload, SeriesPoint, Summary, DEFAULT_INDICATOR,
};

pub use app::{
    App, AppError, AppResult, AppState, BootstrapError, BootstrapResult, MountHost, MountPoint,
    MountedApp, RenderedPage, StaticHost,
};

pub use charts::{registerables, ChartError, ChartRegistry, Registerable};

pub use pages::{AnalisePage, DashboardPage, HomePage, Page, PageData};

pub use router::{
    routes, ActiveRoute, Navigation, RouteName, RouteRecord, Router, RouterError, RouterResult,
    ScrollPosition, Viewport,
};

pub use config::{generate_default_config, Config, ConfigError, LoggingConfig};
