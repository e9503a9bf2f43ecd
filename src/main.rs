use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;
use url::Url;

use stall::api::ApiClient;
use stall::app::{App, AppEvent};
use stall::config::Config;
use stall::ui;

/// Get the config directory path (~/.config/stall/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("stall");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "stall", about = "Terminal product-management dashboard")]
struct Args {
    /// Base URL of the product API (overrides config file)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Per-request timeout in seconds (overrides config file)
    #[arg(long, value_name = "SECS")]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config_dir = get_config_dir()?;
    let mut config = Config::load(&config_dir.join("config.toml"))
        .context("Failed to load configuration")?;

    // CLI flags win over the config file
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    if let Some(timeout) = args.timeout_secs {
        config.request_timeout_secs = timeout;
    }

    let base_url = Url::parse(&config.api_url)
        .with_context(|| format!("Invalid API URL: {}", config.api_url))?;
    let api = ApiClient::new(base_url, Duration::from_secs(config.request_timeout_secs))
        .context("Failed to create API client")?;

    // Create app state
    let mut app = App::new(api.clone());

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Two independent initial reads; the UI renders with empty collections
    // until each resolves. No ordering dependency between them.
    let tx = event_tx.clone();
    let client = api.clone();
    tokio::spawn(async move {
        let result = client.list_products().await;
        let _ = tx.send(AppEvent::ProductsLoaded(result)).await;
    });

    let tx = event_tx.clone();
    let client = api.clone();
    tokio::spawn(async move {
        let result = client.list_categories().await;
        let _ = tx.send(AppEvent::CategoriesLoaded(result)).await;
    });

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    println!("Goodbye!");
    Ok(())
}
