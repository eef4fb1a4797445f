//! Application Bootstrap
//!
//! Startup sequence of the dashboard:
//!
//! 1. Build the application root and its container ([`AppState`])
//! 2. Register the chart renderer components
//! 3. Attach the router
//! 4. Mount onto the host anchor, which runs the initial navigation
//!
//! ```rust,no_run
//! use ibge_dashboard::app::{App, StaticHost};
//! use ibge_dashboard::charts::registerables;
//! use ibge_dashboard::config::Config;
//! use ibge_dashboard::router::{routes, Router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     let router = Router::new(routes(&config.app.default_indicator));
//!     let host = StaticHost::new("/dashboard").with_anchor("#app");
//!
//!     let mut app = App::new(config)?
//!         .register_charts(registerables())
//!         .use_router(router)
//!         .mount(&host)
//!         .await?;
//!
//!     let page = app.render().await?;
//!     println!("{}", page.title);
//!
//!     app.navigate("/analise").await?;
//!     Ok(())
//! }
//! ```

mod error;
mod host;
mod state;

pub use error::{AppError, AppResult, BootstrapError, BootstrapResult};
pub use host::{MountHost, MountPoint, StaticHost};
pub use state::AppState;

use serde::Serialize;

use crate::charts::Registerable;
use crate::config::Config;
use crate::pages::PageData;
use crate::router::{Navigation, RouteName, Router};

/// Application root, before mounting
#[derive(Debug)]
pub struct App {
    state: AppState,
    router: Option<Router>,
    charts_registered: bool,
}

impl App {
    /// Construct the root and its container from configuration
    pub fn new(config: Config) -> BootstrapResult<Self> {
        Ok(Self::with_state(AppState::new(config)?))
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            state,
            router: None,
            charts_registered: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Register chart components with the container's registry.
    ///
    /// Runs once; later calls are ignored.
    pub fn register_charts<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = Registerable>,
    {
        if self.charts_registered {
            tracing::warn!("Chart components already registered, ignoring");
            return self;
        }

        let added = self.state.charts.register(items);
        self.charts_registered = true;
        tracing::info!(components = added, "Registered chart components");
        self
    }

    pub fn use_router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    /// Mount onto `host` and perform the initial navigation
    pub async fn mount(self, host: &dyn MountHost) -> BootstrapResult<MountedApp> {
        let selector = self.state.config.app.mount_selector.clone();

        let Some(mount_point) = host.query_selector(&selector) else {
            tracing::error!(%selector, "Mount target not found");
            return Err(BootstrapError::MountTargetMissing(selector));
        };

        let Some(mut router) = self.router else {
            tracing::error!("Mount attempted without a router");
            return Err(BootstrapError::RouterNotAttached);
        };

        router.set_viewport(host.viewport());

        let location = host.location();
        if let Err(e) = router.replace(&location).await {
            tracing::warn!(%location, error = %e, "Initial navigation failed");
        }

        tracing::info!(%selector, "Application mounted");

        Ok(MountedApp {
            state: self.state,
            router,
            mount_point,
        })
    }
}

/// A page's loaded content
#[derive(Debug, Clone, Serialize)]
pub struct RenderedPage {
    pub route: RouteName,
    pub title: &'static str,
    pub data: PageData,
}

/// Application mounted on a host
#[derive(Debug)]
pub struct MountedApp {
    state: AppState,
    router: Router,
    mount_point: MountPoint,
}

impl MountedApp {
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn mount_point(&self) -> &MountPoint {
        &self.mount_point
    }

    pub async fn navigate(&mut self, location: &str) -> AppResult<Navigation> {
        Ok(self.router.push(location).await?)
    }

    pub async fn back(&mut self) -> AppResult<Option<Navigation>> {
        Ok(self.router.back().await?)
    }

    pub async fn forward(&mut self) -> AppResult<Option<Navigation>> {
        Ok(self.router.forward().await?)
    }

    /// Load the current page after checking its chart requirements
    pub async fn render(&self) -> AppResult<RenderedPage> {
        let route = self.router.current().ok_or(AppError::NoActiveRoute)?;
        let page = &route.page;

        self.state.charts.ensure(page.required_charts())?;

        let data = page.load(&self.state.api).await?;
        tracing::debug!(route = %route.name, sections = data.len(), "Page rendered");

        Ok(RenderedPage {
            route: route.name,
            title: page.title(),
            data,
        })
    }
}
