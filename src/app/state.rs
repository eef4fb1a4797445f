//! Application State
//!
//! Dependency container shared by every page.
//! Wrapped in Arc for sharing across async tasks.

use std::sync::Arc;

use crate::api::{ClientConfig, IbgeApi};
use crate::charts::ChartRegistry;
use crate::config::Config;

use super::error::BootstrapResult;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Backend API client
    pub api: Arc<IbgeApi>,
    /// Chart renderer registry, filled once at startup
    pub charts: Arc<ChartRegistry>,
}

impl AppState {
    /// Build the container from configuration
    pub fn new(config: Config) -> BootstrapResult<Self> {
        let api = IbgeApi::new(ClientConfig::from(&config.api))?;
        Ok(Self::with_api(config, api))
    }

    /// Build the container around an existing client
    pub fn with_api(config: Config, api: IbgeApi) -> Self {
        Self {
            config: Arc::new(config),
            api: Arc::new(api),
            charts: Arc::new(ChartRegistry::new()),
        }
    }
}
