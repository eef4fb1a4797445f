//! Application error types

use thiserror::Error;

use crate::api::ApiError;
use crate::charts::ChartError;
use crate::router::RouterError;

/// Startup failures. None of these are recoverable.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// The host has no element matching the mount selector
    #[error("Mount target not found: {0}")]
    MountTargetMissing(String),

    /// `mount` was called before a router was attached
    #[error("No router attached to the application")]
    RouterNotAttached,

    /// The HTTP client could not be built
    #[error("API client error: {0}")]
    Client(#[from] ApiError),
}

/// Result type for bootstrap operations
pub type BootstrapResult<T> = Result<T, BootstrapError>;

/// Failures while operating a mounted application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Routing error: {0}")]
    Router(#[from] RouterError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Rendering was requested before any navigation completed
    #[error("No active route")]
    NoActiveRoute,
}

/// Result type for mounted application operations
pub type AppResult<T> = Result<T, AppError>;
