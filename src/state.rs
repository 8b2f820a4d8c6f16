use crate::model::{BlogPost, ProductRecord};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

/// Identifies one load cycle. Results carrying an outdated ticket are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

/// Single owner of everything loaded from the sheet and the blog feed.
/// Lists are immutable snapshots, replaced wholesale on reload.
#[derive(Debug, Default)]
pub struct AppState {
    products: Arc<Vec<ProductRecord>>,
    posts: Arc<Vec<BlogPost>>,
    generation: u64,
    products_loaded_at: Option<DateTime<Utc>>,
    posts_loaded_at: Option<DateTime<Utc>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new load cycle; any ticket handed out earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Returns false (and keeps the current list) when `ticket` is stale.
    pub fn commit_products(&mut self, ticket: LoadTicket, products: Vec<ProductRecord>) -> bool {
        if !self.is_current(ticket) {
            warn!(
                "Dropping stale product load (generation {} < {})",
                ticket.0, self.generation
            );
            return false;
        }
        info!("Loaded {} products (generation {})", products.len(), ticket.0);
        self.products = Arc::new(products);
        self.products_loaded_at = Some(Utc::now());
        true
    }

    pub fn commit_posts(&mut self, ticket: LoadTicket, posts: Vec<BlogPost>) -> bool {
        if !self.is_current(ticket) {
            warn!(
                "Dropping stale posts load (generation {} < {})",
                ticket.0, self.generation
            );
            return false;
        }
        info!("Loaded {} posts (generation {})", posts.len(), ticket.0);
        self.posts = Arc::new(posts);
        self.posts_loaded_at = Some(Utc::now());
        true
    }

    pub fn products(&self) -> Arc<Vec<ProductRecord>> {
        self.products.clone()
    }

    pub fn posts(&self) -> Arc<Vec<BlogPost>> {
        self.posts.clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn products_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.products_loaded_at
    }

    pub fn posts_loaded_at(&self) -> Option<DateTime<Utc>> {
        self.posts_loaded_at
    }
}
