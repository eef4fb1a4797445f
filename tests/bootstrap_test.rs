use httpmock::prelude::*;
use ibge_dashboard::router::RecordingViewport;
use ibge_dashboard::{
    registerables, routes, ApiError, App, AppError, BootstrapError, ChartError, Config, MountedApp,
    Registerable, RouteName, Router, RouterError, ScrollPosition, StaticHost,
};
use serde_json::json;
use std::sync::Arc;

fn config_for(server: &MockServer) -> Config {
    let mut config = Config::default();
    config.api.url = server.base_url();
    config
}

async fn mount_at(
    config: Config,
    location: &str,
) -> (Result<MountedApp, BootstrapError>, Arc<RecordingViewport>) {
    let viewport = Arc::new(RecordingViewport::new());
    let host = StaticHost::new(location)
        .with_anchor("#app")
        .with_viewport(viewport.clone());
    let router = Router::new(routes(&config.app.default_indicator));

    let app = App::new(config)
        .unwrap()
        .register_charts(registerables())
        .use_router(router)
        .mount(&host)
        .await;

    (app, viewport)
}

#[tokio::test]
async fn test_mount_fails_without_anchor() {
    let host = StaticHost::new("/");
    let router = Router::new(routes("unemployment"));

    let result = App::new(Config::default())
        .unwrap()
        .register_charts(registerables())
        .use_router(router)
        .mount(&host)
        .await;

    match result {
        Err(BootstrapError::MountTargetMissing(selector)) => assert_eq!(selector, "#app"),
        other => panic!("expected missing mount target, got {other:?}"),
    }
}

#[tokio::test]
async fn test_mount_uses_configured_selector() {
    let mut config = Config::default();
    config.app.mount_selector = "#dashboard-root".to_string();

    let host = StaticHost::new("/").with_anchor("#app");
    let result = App::new(config.clone())
        .unwrap()
        .use_router(Router::new(routes("unemployment")))
        .mount(&host)
        .await;
    assert!(matches!(result, Err(BootstrapError::MountTargetMissing(ref s)) if s == "#dashboard-root"));

    let host = StaticHost::new("/").with_anchor("#dashboard-root");
    let app = App::new(config)
        .unwrap()
        .use_router(Router::new(routes("unemployment")))
        .mount(&host)
        .await
        .unwrap();
    assert_eq!(app.mount_point().selector, "#dashboard-root");
}

#[tokio::test]
async fn test_mount_requires_router() {
    let host = StaticHost::new("/").with_anchor("#app");
    let result = App::new(Config::default()).unwrap().mount(&host).await;
    assert!(matches!(result, Err(BootstrapError::RouterNotAttached)));
}

#[tokio::test]
async fn test_charts_registered_once() {
    let app = App::new(Config::default())
        .unwrap()
        .register_charts([Registerable::LineController])
        .register_charts(registerables());

    let charts = &app.state().charts;
    assert_eq!(charts.len(), 1);
    assert!(charts.is_registered(Registerable::LineController));
    assert!(!charts.is_registered(Registerable::BarController));
}

#[tokio::test]
async fn test_mount_navigates_to_host_location() {
    let (app, viewport) = mount_at(Config::default(), "/analise?indicator=income").await;
    let app = app.unwrap();

    let current = app.router().current().unwrap();
    assert_eq!(current.name, RouteName::Analise);
    assert_eq!(current.full_path, "/analise?indicator=income");
    assert_eq!(viewport.scrolls(), vec![ScrollPosition::top()]);

    assert!(app.router().is_loaded(RouteName::Analise));
    assert!(!app.router().is_loaded(RouteName::Home));
    assert!(!app.router().is_loaded(RouteName::Dashboard));
}

#[tokio::test]
async fn test_unmatched_initial_location_stays_mounted() {
    let (app, viewport) = mount_at(Config::default(), "/configuracoes").await;
    let mut app = app.unwrap();

    assert!(app.router().current().is_none());
    assert!(viewport.scrolls().is_empty());
    assert!(matches!(app.render().await, Err(AppError::NoActiveRoute)));

    let nav = app.navigate("/").await.unwrap();
    assert_eq!(nav.route().unwrap().name, RouteName::Home);
    assert_eq!(viewport.scrolls().len(), 1);
}

#[tokio::test]
async fn test_navigation_between_pages() {
    let (app, viewport) = mount_at(Config::default(), "/").await;
    let mut app = app.unwrap();

    app.navigate("/dashboard").await.unwrap();
    app.navigate("/analise").await.unwrap();
    assert_eq!(app.router().current().unwrap().name, RouteName::Analise);

    let back = app.back().await.unwrap().unwrap();
    assert_eq!(back.route().unwrap().name, RouteName::Dashboard);

    let err = app.navigate("/sobre").await.unwrap_err();
    assert!(matches!(err, AppError::Router(RouterError::NoMatch(_))));
    assert_eq!(app.router().current().unwrap().name, RouteName::Dashboard);

    // Initial, two pushes and one back
    assert_eq!(viewport.scrolls().len(), 4);
    assert!(viewport.scrolls().iter().all(|s| *s == ScrollPosition::top()));
}

#[tokio::test]
async fn test_render_dashboard_loads_all_indicators() {
    let server = MockServer::start_async().await;

    let mut mocks = Vec::new();
    for path in [
        "/api/ibge/unemployment",
        "/api/ibge/occupied",
        "/api/ibge/income",
        "/api/ibge/informality",
    ] {
        mocks.push(
            server
                .mock_async(|when, then| {
                    when.method(GET).path(path);
                    then.status(200).json_body(json!({"success": true, "source": path}));
                })
                .await,
        );
    }

    let (app, _) = mount_at(config_for(&server), "/dashboard").await;
    let page = app.unwrap().render().await.unwrap();

    assert_eq!(page.route, RouteName::Dashboard);
    assert_eq!(
        page.data.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["income", "informality", "occupied", "unemployment"]
    );
    assert_eq!(page.data["occupied"]["source"], "/api/ibge/occupied");

    for mock in &mocks {
        mock.assert_hits_async(1).await;
    }
}

#[tokio::test]
async fn test_render_analise_uses_configured_indicator() {
    let server = MockServer::start_async().await;

    let mut mocks = Vec::new();
    for dimension in ["sex", "race", "education", "region"] {
        mocks.push(
            server
                .mock_async(|when, then| {
                    when.method(GET)
                        .path(format!("/api/analysis/{}", dimension))
                        .query_param("indicator", "income");
                    then.status(200).json_body(json!({"classification": dimension}));
                })
                .await,
        );
    }
    mocks.push(
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/analysis/age");
                then.status(200).json_body(json!({"classification": "age"}));
            })
            .await,
    );

    let mut config = config_for(&server);
    config.app.default_indicator = "income".to_string();

    let (app, _) = mount_at(config, "/analise").await;
    let page = app.unwrap().render().await.unwrap();

    assert_eq!(page.route, RouteName::Analise);
    assert_eq!(page.data.len(), 5);
    assert_eq!(page.data["age"]["classification"], "age");

    for mock in &mocks {
        mock.assert_hits_async(1).await;
    }
}

#[tokio::test]
async fn test_render_requires_registered_charts() {
    let host = StaticHost::new("/dashboard").with_anchor("#app");
    let app = App::new(Config::default())
        .unwrap()
        .use_router(Router::new(routes("unemployment")))
        .mount(&host)
        .await
        .unwrap();

    match app.render().await {
        Err(AppError::Chart(ChartError::NotRegistered(missing))) => {
            assert!(missing.contains(&Registerable::LineController));
        }
        other => panic!("expected missing charts, got {other:?}"),
    }
}

#[tokio::test]
async fn test_render_propagates_backend_failure() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/ibge/unemployment/summary");
            then.status(502)
                .json_body(json!({"detail": "Falha ao obter dados do IBGE"}));
        })
        .await;

    let (app, _) = mount_at(config_for(&server), "/").await;
    let err = app.unwrap().render().await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Api(ApiError::Status { status: 502, .. })
    ));
    mock.assert_hits_async(1).await;
}
