//! Client-side Router
//!
//! Maps URL paths to page modules with history navigation.
//!
//! ## Routes
//!
//! - `/` → Home
//! - `/dashboard` → Dashboard
//! - `/analise` → Analise
//!
//! Page modules are resolved lazily: a record's loader runs on the first
//! navigation to its path and the result is cached for later visits. A
//! failed load aborts that navigation only, so the next visit tries again.
//!
//! Every completed navigation scrolls the viewport back to the top.

mod error;
mod history;
mod scroll;
mod table;

pub use error::{LoadError, RouterError, RouterResult};
pub use history::History;
pub use scroll::{
    scroll_behavior, DetachedViewport, RecordingViewport, ScrollPosition, Viewport,
};
pub use table::{routes, PageLoader, RouteRecord};

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::pages::Page;

/// Logical pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RouteName {
    Home,
    Dashboard,
    Analise,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "Home",
            RouteName::Dashboard => "Dashboard",
            RouteName::Analise => "Analise",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The route currently displayed
#[derive(Clone)]
pub struct ActiveRoute {
    pub name: RouteName,
    /// Path of the matched record
    pub path: &'static str,
    /// Location as navigated to, query and hash included
    pub full_path: String,
    pub page: Arc<dyn Page>,
}

impl fmt::Debug for ActiveRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveRoute")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("full_path", &self.full_path)
            .field("page", &self.page.name())
            .finish()
    }
}

/// Outcome of a navigation that did not fail
#[derive(Debug, Clone)]
pub enum Navigation {
    /// The route changed and the viewport was scrolled
    Completed(ActiveRoute),
    /// Already at that location; nothing happened
    Duplicated,
}

impl Navigation {
    pub fn route(&self) -> Option<&ActiveRoute> {
        match self {
            Navigation::Completed(route) => Some(route),
            Navigation::Duplicated => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum HistoryMode {
    Push,
    Replace,
    Traverse(isize),
}

/// History-based router over a static route table
pub struct Router {
    records: Vec<RouteRecord>,
    history: History,
    current: Option<ActiveRoute>,
    viewport: Arc<dyn Viewport>,
}

impl Router {
    pub fn new(records: Vec<RouteRecord>) -> Self {
        Self {
            records,
            history: History::new(),
            current: None,
            viewport: Arc::new(DetachedViewport),
        }
    }

    pub fn with_viewport(mut self, viewport: Arc<dyn Viewport>) -> Self {
        self.viewport = viewport;
        self
    }

    /// Attach the viewport scroll resets are applied to
    pub fn set_viewport(&mut self, viewport: Arc<dyn Viewport>) {
        self.viewport = viewport;
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub fn current(&self) -> Option<&ActiveRoute> {
        self.current.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Route a location would resolve to, without navigating
    pub fn resolve(&self, location: &str) -> Option<RouteName> {
        self.match_index(location).map(|idx| self.records[idx].name)
    }

    pub fn is_loaded(&self, name: RouteName) -> bool {
        self.records
            .iter()
            .any(|r| r.name == name && r.is_loaded())
    }

    /// Navigate to `location`, adding a history entry
    pub async fn push(&mut self, location: &str) -> RouterResult<Navigation> {
        self.navigate(location, HistoryMode::Push).await
    }

    /// Navigate to `location`, replacing the current history entry
    pub async fn replace(&mut self, location: &str) -> RouterResult<Navigation> {
        self.navigate(location, HistoryMode::Replace).await
    }

    /// Go one entry back; `None` at the start of history
    pub async fn back(&mut self) -> RouterResult<Option<Navigation>> {
        self.traverse(-1).await
    }

    /// Go one entry forward; `None` at the end of history
    pub async fn forward(&mut self) -> RouterResult<Option<Navigation>> {
        self.traverse(1).await
    }

    async fn traverse(&mut self, delta: isize) -> RouterResult<Option<Navigation>> {
        let Some(target) = self.history.peek(delta).map(str::to_string) else {
            return Ok(None);
        };
        self.navigate(&target, HistoryMode::Traverse(delta))
            .await
            .map(Some)
    }

    async fn navigate(&mut self, location: &str, mode: HistoryMode) -> RouterResult<Navigation> {
        let location = if location.is_empty() { "/" } else { location };

        if !matches!(mode, HistoryMode::Traverse(_)) {
            if let Some(current) = &self.current {
                if same_location(&current.full_path, location) {
                    tracing::debug!(location, "Navigation to current location ignored");
                    return Ok(Navigation::Duplicated);
                }
            }
        }

        let idx = self.match_index(location).ok_or_else(|| {
            tracing::warn!(location, "No route matches location");
            RouterError::NoMatch(location.to_string())
        })?;

        let record = &self.records[idx];
        let page = record
            .component
            .get_or_try_init(|| (record.loader)())
            .await
            .map_err(|source| {
                tracing::error!(route = %record.name, error = %source, "Page module failed to load");
                RouterError::ComponentLoad {
                    route: record.name,
                    source,
                }
            })?
            .clone();

        let route = ActiveRoute {
            name: record.name,
            path: record.path,
            full_path: location.to_string(),
            page,
        };

        match mode {
            HistoryMode::Push => self.history.push(location),
            HistoryMode::Replace => self.history.replace(location),
            HistoryMode::Traverse(delta) => {
                self.history.go(delta);
            }
        }

        self.current = Some(route.clone());
        self.viewport.scroll_to(scroll_behavior());

        tracing::info!(route = %route.name, location, "Navigated");
        Ok(Navigation::Completed(route))
    }

    fn match_index(&self, location: &str) -> Option<usize> {
        let path = normalize_path(location);
        self.records.iter().position(|r| r.matches(&path))
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("records", &self.records)
            .field("history", &self.history)
            .field("current", &self.current)
            .finish()
    }
}

/// Strip query and hash, ensure a leading slash and drop a trailing one
fn normalize_path(location: &str) -> String {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Equal up to path case and a trailing slash. Query and hash must match exactly.
fn same_location(a: &str, b: &str) -> bool {
    fn suffix(location: &str) -> &str {
        location.find(['?', '#']).map_or("", |i| &location[i..])
    }

    normalize_path(a).eq_ignore_ascii_case(&normalize_path(b)) && suffix(a) == suffix(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiResult, IbgeApi};
    use crate::charts::Registerable;
    use crate::pages::PageData;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubPage(&'static str);

    #[async_trait]
    impl Page for StubPage {
        fn name(&self) -> &'static str {
            self.0
        }

        fn title(&self) -> &'static str {
            self.0
        }

        fn required_charts(&self) -> &'static [Registerable] {
            &[]
        }

        async fn load(&self, _api: &IbgeApi) -> ApiResult<PageData> {
            Ok(PageData::new())
        }
    }

    fn counted(
        path: &'static str,
        name: RouteName,
        loads: Arc<AtomicUsize>,
    ) -> RouteRecord {
        RouteRecord::lazy(path, name, move || {
            let loads = Arc::clone(&loads);
            async move {
                loads.fetch_add(1, Ordering::SeqCst);
                Ok::<_, LoadError>(Arc::new(StubPage(name.as_str())) as Arc<dyn Page>)
            }
        })
    }

    fn test_router() -> (Router, Arc<RecordingViewport>, Vec<Arc<AtomicUsize>>) {
        let loads: Vec<Arc<AtomicUsize>> = (0..3).map(|_| Arc::new(AtomicUsize::new(0))).collect();
        let records = vec![
            counted("/", RouteName::Home, Arc::clone(&loads[0])),
            counted("/dashboard", RouteName::Dashboard, Arc::clone(&loads[1])),
            counted("/analise", RouteName::Analise, Arc::clone(&loads[2])),
        ];
        let viewport = Arc::new(RecordingViewport::new());
        let router = Router::new(records).with_viewport(viewport.clone());
        (router, viewport, loads)
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("/dashboard/"), "/dashboard");
        assert_eq!(normalize_path("/analise?indicator=income#sexo"), "/analise");
        assert_eq!(normalize_path("dashboard"), "/dashboard");
    }

    #[test]
    fn test_resolve() {
        let (router, _, _) = test_router();
        assert_eq!(router.resolve("/"), Some(RouteName::Home));
        assert_eq!(router.resolve("/Dashboard/"), Some(RouteName::Dashboard));
        assert_eq!(router.resolve("/analise?x=1"), Some(RouteName::Analise));
        assert_eq!(router.resolve("/settings"), None);
    }

    #[tokio::test]
    async fn test_each_path_resolves_to_its_page_and_scrolls_top() {
        let (mut router, viewport, _) = test_router();

        for (path, name) in [
            ("/", RouteName::Home),
            ("/dashboard", RouteName::Dashboard),
            ("/analise", RouteName::Analise),
        ] {
            let nav = router.push(path).await.unwrap();
            let route = nav.route().unwrap();
            assert_eq!(route.name, name);
            assert_eq!(route.page.name(), name.as_str());
            assert_eq!(viewport.last(), Some(ScrollPosition::top()));
        }

        assert_eq!(viewport.scrolls().len(), 3);
        assert_eq!(router.current().unwrap().name, RouteName::Analise);
    }

    #[tokio::test]
    async fn test_pages_load_lazily_and_once() {
        let (mut router, _, loads) = test_router();
        assert!(loads.iter().all(|l| l.load(Ordering::SeqCst) == 0));

        router.push("/dashboard").await.unwrap();
        assert_eq!(loads[0].load(Ordering::SeqCst), 0);
        assert_eq!(loads[1].load(Ordering::SeqCst), 1);
        assert!(router.is_loaded(RouteName::Dashboard));
        assert!(!router.is_loaded(RouteName::Home));

        router.push("/").await.unwrap();
        router.push("/dashboard").await.unwrap();
        router.back().await.unwrap();
        assert_eq!(loads[0].load(Ordering::SeqCst), 1);
        assert_eq!(loads[1].load(Ordering::SeqCst), 1);
        assert_eq!(loads[2].load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unmatched_location_leaves_state_unchanged() {
        let (mut router, viewport, _) = test_router();
        router.push("/").await.unwrap();

        let err = router.push("/settings").await.unwrap_err();
        assert!(matches!(err, RouterError::NoMatch(ref loc) if loc == "/settings"));
        assert_eq!(router.current().unwrap().name, RouteName::Home);
        assert_eq!(router.history().len(), 1);
        assert_eq!(viewport.scrolls().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_navigation_is_ignored() {
        let (mut router, viewport, _) = test_router();
        router.push("/dashboard").await.unwrap();

        let nav = router.push("/dashboard").await.unwrap();
        assert!(matches!(nav, Navigation::Duplicated));
        assert_eq!(router.history().len(), 1);
        assert_eq!(viewport.scrolls().len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_ignores_trailing_slash_and_case() {
        let (mut router, viewport, _) = test_router();
        router.push("/dashboard").await.unwrap();

        let nav = router.push("/dashboard/").await.unwrap();
        assert!(matches!(nav, Navigation::Duplicated));
        let nav = router.push("/Dashboard").await.unwrap();
        assert!(matches!(nav, Navigation::Duplicated));
        let nav = router.replace("/DASHBOARD/").await.unwrap();
        assert!(matches!(nav, Navigation::Duplicated));

        assert_eq!(router.history().len(), 1);
        assert_eq!(viewport.scrolls().len(), 1);
        assert_eq!(router.current().unwrap().full_path, "/dashboard");
    }

    #[tokio::test]
    async fn test_new_query_is_not_duplicate() {
        let (mut router, viewport, _) = test_router();
        router.push("/analise").await.unwrap();

        let nav = router.push("/analise?indicator=income").await.unwrap();
        assert!(!matches!(nav, Navigation::Duplicated));
        let nav = router.push("/Analise/?indicator=income").await.unwrap();
        assert!(matches!(nav, Navigation::Duplicated));

        assert_eq!(router.history().len(), 2);
        assert_eq!(viewport.scrolls().len(), 2);
    }

    #[test]
    fn test_same_location() {
        assert!(same_location("/", ""));
        assert!(same_location("/analise?indicator=income", "/ANALISE/?indicator=income"));
        assert!(!same_location("/analise?indicator=income", "/analise?indicator=Income"));
        assert!(!same_location("/analise#sexo", "/analise"));
    }

    #[tokio::test]
    async fn test_back_and_forward() {
        let (mut router, viewport, _) = test_router();
        assert!(router.back().await.unwrap().is_none());

        router.push("/").await.unwrap();
        router.push("/analise").await.unwrap();

        let nav = router.back().await.unwrap().unwrap();
        assert_eq!(nav.route().unwrap().name, RouteName::Home);

        let nav = router.forward().await.unwrap().unwrap();
        assert_eq!(nav.route().unwrap().name, RouteName::Analise);
        assert!(router.forward().await.unwrap().is_none());

        assert_eq!(viewport.scrolls().len(), 4);
    }

    #[tokio::test]
    async fn test_replace_keeps_history_length() {
        let (mut router, _, _) = test_router();
        router.push("/").await.unwrap();
        router.replace("/dashboard").await.unwrap();

        assert_eq!(router.history().len(), 1);
        assert_eq!(router.history().current(), Some("/dashboard"));
        assert!(router.back().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_load_aborts_and_retries() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let flaky = RouteRecord::lazy("/dashboard", RouteName::Dashboard, move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err::<Arc<dyn Page>, LoadError>("chunk fetch failed".into())
                } else {
                    Ok(Arc::new(StubPage("Dashboard")) as Arc<dyn Page>)
                }
            }
        });
        let viewport = Arc::new(RecordingViewport::new());
        let mut router = Router::new(vec![flaky]).with_viewport(viewport.clone());

        let err = router.push("/dashboard").await.unwrap_err();
        assert!(matches!(
            err,
            RouterError::ComponentLoad { route: RouteName::Dashboard, .. }
        ));
        assert!(router.current().is_none());
        assert!(router.history().is_empty());
        assert!(viewport.scrolls().is_empty());

        router.push("/dashboard").await.unwrap();
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
        assert_eq!(viewport.scrolls().len(), 1);
    }
}
