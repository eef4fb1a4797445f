//! Router error types

use thiserror::Error;

use super::RouteName;

/// Error produced by a page loader
pub type LoadError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a navigation. State is left untouched on every one.
#[derive(Error, Debug)]
pub enum RouterError {
    /// No route record matches the location
    #[error("No route matches location: {0}")]
    NoMatch(String),

    /// The lazily loaded page module failed to resolve
    #[error("Failed to load page for route {route}: {source}")]
    ComponentLoad {
        route: RouteName,
        #[source]
        source: LoadError,
    },
}

/// Result type for router operations
pub type RouterResult<T> = Result<T, RouterError>;
