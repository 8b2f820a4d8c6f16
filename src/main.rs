mod catalog;
mod config;
mod console;
mod debounce;
mod loader;
mod model;
mod normalizer;
mod pages;
mod parser;
mod scraper;
mod search;
mod state;
mod utils;

use config::{load_config, AppConfig};
use console::listener::listen_for_commands;
use console::Console;
use normalizer::CategoryAliasTable;
use scraper::ScraperImpl;
use state::AppState;
use std::sync::Arc;
use tokio::sync::{Mutex, Notify};
use tokio::time::{sleep, Duration};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    // Load configuration from file
    let config: Arc<AppConfig> = match load_config("config.json") {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let scraper = match ScraperImpl::new(Duration::from_secs(config.http_timeout_seconds)) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };
    let table = CategoryAliasTable::storefront();

    // Single owner of the loaded lists
    let state = Arc::new(Mutex::new(AppState::new()));

    // Manual refresh (/refresh) wakes the reload loop early
    let refresh_notify = Arc::new(Notify::new());
    let console = Arc::new(Console::new(
        state.clone(),
        config.clone(),
        refresh_notify.clone(),
    ));

    tokio::spawn({
        let console = console.clone();
        async move {
            info!("▶️ Starting console listener...");
            listen_for_commands(console).await;
            info!("🛑 Console listener ended.");
        }
    });

    info!("Sheet: {}", config.products.request().url());
    if let Some(url) = &config.posts_url {
        info!("Posts: {}", url);
    }

    // Reload loop
    loop {
        let report = loader::reload(&scraper, &config, table, state.clone()).await;
        if !report.products_ok {
            warn!("Sheet fetch failed. Check sharing & sheet name.");
        } else {
            let home = console.home().await;
            info!(
                "Catalog ready: {} carousels on the homepage.",
                home.carousels().len()
            );
        }
        if config.posts_url.is_some() && !report.posts_ok {
            warn!("Posts not refreshed; the blog index keeps its previous list.");
        }

        info!(
            "Waiting for timer ({}s) or manual refresh...",
            config.refresh_interval_seconds
        );
        tokio::select! {
            _ = sleep(Duration::from_secs(config.refresh_interval_seconds)) => {
                info!("Timer triggered.");
            }
            _ = refresh_notify.notified() => {
                info!("Manual refresh triggered.");
            }
        }
    }
}
