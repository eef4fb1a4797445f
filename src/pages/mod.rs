//! Pages
//!
//! Top-level page modules for each route. A page declares the chart
//! components it draws with and loads its data through the API client.

mod analise;
mod dashboard;
mod home;

pub use analise::AnalisePage;
pub use dashboard::DashboardPage;
pub use home::HomePage;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::api::{ApiResult, IbgeApi};
use crate::charts::Registerable;

/// Data a page loaded, keyed by section name
pub type PageData = BTreeMap<String, Value>;

/// Common trait for all pages
#[async_trait]
pub trait Page: Send + Sync {
    /// Route name the page is registered under
    fn name(&self) -> &'static str;

    /// Heading shown above the page
    fn title(&self) -> &'static str;

    /// Chart components that must be registered before rendering
    fn required_charts(&self) -> &'static [Registerable];

    /// Fetch everything the page displays
    async fn load(&self, api: &IbgeApi) -> ApiResult<PageData>;
}
