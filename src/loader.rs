// Fetch → parse → normalize → commit, one load cycle at a time.
use crate::config::AppConfig;
use crate::model::{BlogPost, FetchError, ProductRecord};
use crate::normalizer::{normalize_all, CategoryAliasTable};
use crate::parser::{GvizParser, Parser, PostsParser};
use crate::scraper::Scraper;
use crate::state::AppState;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Fetches the product sheet and returns canonicalized records.
pub async fn load_products(
    scraper: &dyn Scraper,
    config: &AppConfig,
    table: &CategoryAliasTable,
) -> Result<Vec<ProductRecord>, FetchError> {
    let body = scraper.fetch(&config.products.request().url()).await?;
    let mut products = GvizParser::new(config.products.layout()).parse(&body)?;
    normalize_all(&mut products, table);
    Ok(products)
}

pub async fn load_posts(scraper: &dyn Scraper, url: &str) -> Result<Vec<BlogPost>, FetchError> {
    let body = scraper.fetch(url).await?;
    PostsParser::new().parse(&body)
}

/// Outcome of one reload, for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReloadReport {
    pub products_ok: bool,
    pub posts_ok: bool,
}

/// Runs a full reload: both sources fetched concurrently, each committed only if
/// this cycle is still the newest. Failures keep the previous data and are not retried.
pub async fn reload(
    scraper: &dyn Scraper,
    config: &AppConfig,
    table: &CategoryAliasTable,
    state: Arc<Mutex<AppState>>,
) -> ReloadReport {
    let ticket = state.lock().await.begin_load();
    info!("Reloading catalog (generation {})...", ticket.generation());

    let posts_future = async {
        match &config.posts_url {
            Some(url) => Some(load_posts(scraper, url).await),
            None => None,
        }
    };
    let (products, posts) = futures::join!(load_products(scraper, config, table), posts_future);

    let mut report = ReloadReport::default();
    let mut guard = state.lock().await;

    match products {
        Ok(products) => report.products_ok = guard.commit_products(ticket, products),
        Err(e) => error!("❌ Failed to load sheet: {}", e),
    }

    match posts {
        Some(Ok(posts)) => report.posts_ok = guard.commit_posts(ticket, posts),
        Some(Err(e)) => warn!("Unable to load posts: {}", e),
        None => {}
    }

    report
}
