//! Route records and the dashboard's static route table.

use futures_util::future::{BoxFuture, FutureExt};
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::OnceCell;

use super::error::LoadError;
use super::RouteName;
use crate::pages::{AnalisePage, DashboardPage, HomePage, Page};

/// On-demand page module loader
pub type PageLoader =
    Arc<dyn Fn() -> BoxFuture<'static, Result<Arc<dyn Page>, LoadError>> + Send + Sync>;

/// One entry of the route table
pub struct RouteRecord {
    pub(crate) path: &'static str,
    pub(crate) name: RouteName,
    pub(crate) loader: PageLoader,
    pub(crate) component: OnceCell<Arc<dyn Page>>,
}

impl RouteRecord {
    /// Record whose page is resolved by `loader` on first visit
    pub fn lazy<F, Fut>(path: &'static str, name: RouteName, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Arc<dyn Page>, LoadError>> + Send + 'static,
    {
        Self {
            path,
            name,
            loader: Arc::new(move || loader().boxed()),
            component: OnceCell::new(),
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn name(&self) -> RouteName {
        self.name
    }

    /// Whether the page module has been resolved
    pub fn is_loaded(&self) -> bool {
        self.component.initialized()
    }

    /// Case-insensitive match against a normalized path
    pub(crate) fn matches(&self, path: &str) -> bool {
        self.path.eq_ignore_ascii_case(path)
    }
}

impl fmt::Debug for RouteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteRecord")
            .field("path", &self.path)
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

/// The dashboard's three routes.
///
/// `indicator` is the breakdown the analysis page opens with.
pub fn routes(indicator: &str) -> Vec<RouteRecord> {
    let indicator = indicator.to_string();

    vec![
        RouteRecord::lazy("/", RouteName::Home, || async {
            tracing::debug!("Loading home page module");
            Ok::<_, LoadError>(Arc::new(HomePage) as Arc<dyn Page>)
        }),
        RouteRecord::lazy("/dashboard", RouteName::Dashboard, || async {
            tracing::debug!("Loading dashboard page module");
            Ok::<_, LoadError>(Arc::new(DashboardPage) as Arc<dyn Page>)
        }),
        RouteRecord::lazy("/analise", RouteName::Analise, move || {
            let indicator = indicator.clone();
            async move {
                tracing::debug!(%indicator, "Loading analysis page module");
                Ok::<_, LoadError>(Arc::new(AnalisePage::new(indicator)) as Arc<dyn Page>)
            }
        }),
    ]
}
