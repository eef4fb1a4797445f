//! IBGE Dashboard CLI
//!
//! Boots the dashboard against a running backend and prints page data:
//! - Visit a route and render its page
//! - Fetch a single endpoint
//! - List the route table
//! - Check backend health

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ibge_dashboard::{
    generate_default_config, registerables, routes, AnalysisPayload, App, ClientConfig, Config,
    Endpoint, IbgeApi, IndicatorPayload, LoggingConfig, Router, ScrollPosition, StaticHost,
    Summary, Viewport,
};

#[derive(Parser)]
#[command(name = "ibge-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Brazilian labor-market indicators dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend origin, overrides the config file
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Boot the dashboard at a path and render the page
    Visit {
        /// Route path (/, /dashboard, /analise)
        #[arg(default_value = "/")]
        path: String,
    },

    /// Fetch a single endpoint
    Fetch {
        /// Endpoint name (e.g., unemployment, analysis-sex)
        endpoint: Endpoint,
        /// Indicator for analysis endpoints (default: unemployment)
        #[arg(short, long)]
        indicator: Option<String>,
    },

    /// List the route table
    Routes,

    /// Show backend status
    Status,

    /// Print a default config file
    InitConfig,
}

/// Terminal stands in for the page: scrolls are just logged
struct TerminalViewport;

impl Viewport for TerminalViewport {
    fn scroll_to(&self, position: ScrollPosition) {
        tracing::debug!(?position, "Scrolled");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.url = url.clone();
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Visit { path } => {
            let selector = config.app.mount_selector.clone();
            let router = Router::new(routes(&config.app.default_indicator));
            let host = StaticHost::new(path)
                .with_anchor(selector)
                .with_viewport(Arc::new(TerminalViewport));

            let app = App::new(config)?
                .register_charts(registerables())
                .use_router(router)
                .mount(&host)
                .await?;

            let page = app.render().await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&page)?),
                _ => {
                    println!("{}", page.title);
                    println!("{}", "=".repeat(page.title.chars().count()));
                    for (section, body) in &page.data {
                        println!();
                        println!("[{}]", section);
                        print_payload(body)?;
                    }
                }
            }
        }

        Commands::Fetch {
            endpoint,
            indicator,
        } => {
            let api = IbgeApi::new(ClientConfig::from(&config.api))?;
            let body = api.fetch(endpoint, indicator.as_deref()).await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&body)?),
                _ => print_payload(&body)?,
            }
        }

        Commands::Routes => {
            let router = Router::new(routes(&config.app.default_indicator));
            match cli.format.as_str() {
                "json" => {
                    let table: Vec<Value> = router
                        .records()
                        .iter()
                        .map(|r| serde_json::json!({ "path": r.path(), "name": r.name() }))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&table)?);
                }
                _ => {
                    println!("{:<12} NAME", "PATH");
                    for record in router.records() {
                        println!("{:<12} {}", record.path(), record.name());
                    }
                }
            }
        }

        Commands::Status => {
            let api = IbgeApi::new(ClientConfig::from(&config.api))?;
            println!("IBGE Dashboard v{}", env!("CARGO_PKG_VERSION"));
            println!("Backend: {}", api.config().base_url);

            match api.health().await {
                Ok(health) => println!("Status: {}", health.status),
                Err(e) => {
                    eprintln!("Backend unreachable: {}", e);
                    std::process::exit(1);
                }
            }
        }

        Commands::InitConfig => {
            print!("{}", generate_default_config());
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("ibge_dashboard={}", logging.level).into());

    // Logs go to stderr so stdout stays clean for page output
    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

/// Print a payload as a summary table, falling back to raw JSON
fn print_payload(body: &Value) -> anyhow::Result<()> {
    if let Ok(payload) = IndicatorPayload::from_value(body) {
        let unit = payload.unit.as_deref().unwrap_or("");
        println!("{} ({})", payload.indicator, unit);
        print_summary_header();
        print_summary_row("Total", &payload.summary);
    } else if let Ok(payload) = AnalysisPayload::from_value(body) {
        println!("{}", payload.classification);
        print_summary_header();
        for name in payload.category_names() {
            let summary = payload.summary(name).cloned().unwrap_or_default();
            print_summary_row(name, &summary);
        }
    } else {
        println!("{}", serde_json::to_string_pretty(body)?);
    }
    Ok(())
}

fn print_summary_header() {
    println!(
        "{:<28} {:>10} {:>8} {:>10} {:>10} {:>10} {:>8}",
        "CATEGORY", "LATEST", "PERIOD", "MIN", "MAX", "AVERAGE", "TREND"
    );
}

fn print_summary_row(name: &str, summary: &Summary) {
    let num = |v: Option<f64>| v.map(|v| format!("{:.2}", v)).unwrap_or_else(|| "-".into());
    println!(
        "{:<28} {:>10} {:>8} {:>10} {:>10} {:>10} {:>8}",
        name,
        num(summary.latest),
        summary.latest_period.as_deref().unwrap_or("-"),
        num(summary.min),
        num(summary.max),
        num(summary.average),
        num(summary.trend),
    );
}
