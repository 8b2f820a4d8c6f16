use crate::catalog::{DEFAULT_INJECT_LIMIT, HOMEPAGE_ORDER};
use crate::model::{SheetLayout, SheetRequest};
use serde::Deserialize;
use std::fs;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutPreset {
    /// Product Name | Price | ImageURL | Code | Category
    Homepage,
    /// Name | Price | Image | Link | Code | Description | Category
    Catalog,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    pub sheet_id: String,
    pub sheet_name: String,
    #[serde(default = "default_layout")]
    pub layout: LayoutPreset,
    /// Raw category for rows whose category cell is empty.
    #[serde(default = "default_category")]
    pub default_category: String,
}

impl SheetConfig {
    pub fn request(&self) -> SheetRequest {
        SheetRequest {
            sheet_id: self.sheet_id.clone(),
            sheet_name: self.sheet_name.clone(),
        }
    }

    pub fn layout(&self) -> SheetLayout {
        match self.layout {
            LayoutPreset::Homepage => SheetLayout::homepage(&self.default_category),
            LayoutPreset::Catalog => SheetLayout::catalog(&self.default_category),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub products: SheetConfig,
    pub posts_url: Option<String>,
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    #[serde(default = "default_homepage_order")]
    pub homepage_order: Vec<String>,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    #[serde(default = "default_blog_page_size")]
    pub blog_page_size: usize,
    #[serde(default = "default_search_debounce")]
    pub search_debounce_ms: u64,
    #[serde(default = "default_blog_debounce")]
    pub blog_debounce_ms: u64,
    #[serde(default = "default_inject_limit")]
    pub inject_limit: usize,
}

impl AppConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn blog_debounce(&self) -> Duration {
        Duration::from_millis(self.blog_debounce_ms)
    }

    fn validate(&self) -> Result<(), String> {
        if self.products.sheet_id.trim().is_empty() {
            return Err("products.sheet_id must not be empty".into());
        }
        if self.products.default_category.trim().is_empty() {
            return Err("products.default_category must not be empty".into());
        }
        if self.blog_page_size == 0 {
            return Err("blog_page_size must be at least 1".into());
        }
        if self.refresh_interval_seconds == 0 {
            return Err("refresh_interval_seconds must be at least 1".into());
        }
        Ok(())
    }
}

fn default_layout() -> LayoutPreset {
    LayoutPreset::Homepage
}

fn default_category() -> String {
    "other".to_string()
}

fn default_refresh_interval() -> u64 {
    300
}

fn default_http_timeout() -> u64 {
    10
}

fn default_homepage_order() -> Vec<String> {
    HOMEPAGE_ORDER.iter().map(|s| s.to_string()).collect()
}

fn default_suggestion_limit() -> usize {
    12
}

fn default_blog_page_size() -> usize {
    10
}

fn default_search_debounce() -> u64 {
    160
}

fn default_blog_debounce() -> u64 {
    200
}

fn default_inject_limit() -> usize {
    DEFAULT_INJECT_LIMIT
}

pub fn parse_config(content: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}
