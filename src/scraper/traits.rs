use crate::model::FetchError;

#[async_trait::async_trait]
pub trait Scraper: Send + Sync {
    /// Returns the response body of a successful GET on `url`.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
