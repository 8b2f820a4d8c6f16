use crate::model::{FetchError, SheetRequest};
use crate::scraper::traits::Scraper;

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub struct ScraperImpl {
    pub client: Client,
}

impl ScraperImpl {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) StorefrontFeed/0.1")
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl SheetRequest {
    /// gviz JSON export of one sheet tab.
    pub fn url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:json&sheet={}",
            self.sheet_id, self.sheet_name
        )
    }
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
