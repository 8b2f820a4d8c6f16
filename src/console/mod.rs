pub mod render;
pub mod listener;
pub mod command_handler;

use crate::config::AppConfig;
use crate::pages::{BlogIndex, HomePage, ProductGrid};
use crate::state::AppState;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, Notify};

/// Console front-end: owns the page controllers and prints what they produce.
pub struct Console {
    pub state: Arc<Mutex<AppState>>,
    pub config: Arc<AppConfig>,
    pub start_time: Instant,
    pub refresh_notify: Arc<Notify>,
    pub grid: Mutex<ProductGrid>,
    pub blog: Mutex<BlogIndex>,
}

impl Console {
    pub fn new(
        state: Arc<Mutex<AppState>>,
        config: Arc<AppConfig>,
        refresh_notify: Arc<Notify>,
    ) -> Self {
        let page_size = config.blog_page_size;
        Self {
            state,
            config,
            start_time: Instant::now(),
            refresh_notify,
            grid: Mutex::new(ProductGrid::new(Arc::default())),
            blog: Mutex::new(BlogIndex::new(Arc::default(), page_size)),
        }
    }

    pub async fn home(&self) -> HomePage {
        let products = self.state.lock().await.products();
        HomePage::new(
            products,
            self.config.homepage_order.clone(),
            self.config.suggestion_limit,
        )
    }

    /// Grid controller synced to the latest loaded snapshot.
    pub async fn grid(&self) -> tokio::sync::MutexGuard<'_, ProductGrid> {
        let products = self.state.lock().await.products();
        let mut grid = self.grid.lock().await;
        grid.replace_products(products);
        grid
    }

    pub async fn blog(&self) -> tokio::sync::MutexGuard<'_, BlogIndex> {
        let posts = self.state.lock().await.posts();
        let mut blog = self.blog.lock().await;
        blog.replace_posts(posts);
        blog
    }

    /// Debounced homepage search target.
    pub async fn show_suggestions(&self, query: &str) {
        let text = render::suggestions(self.home().await.suggest(query).as_deref());
        println!("{text}");
    }

    /// Debounced blog search target.
    pub async fn show_blog_search(&self, query: &str) {
        let page = self.blog().await.search(query);
        println!("{}", render::blog_page(&page));
    }
}
