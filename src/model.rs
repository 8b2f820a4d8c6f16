// Core structs: ProductRecord, BlogPost, SheetLayout
use serde::{Deserialize, Deserializer};

/// Placeholder link used when a sheet has no link column or the cell is empty.
pub const PLACEHOLDER_LINK: &str = "#";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    pub title: String,
    /// Currency digits exactly as the sheet gives them.
    pub price: String,
    pub image: String,
    pub link: String,
    pub code: String,
    pub description: String,
    /// Canonical category, already passed through the normalizer.
    pub category: String,
}

/// `null` and absent keys both become the field's default.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    #[serde(deserialize_with = "null_default")]
    pub title: String,
    #[serde(deserialize_with = "null_default")]
    pub excerpt: String,
    #[serde(deserialize_with = "null_default")]
    pub date: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub image: String,
    #[serde(deserialize_with = "null_default")]
    pub categories: Vec<String>,
}

/// Positional column contract between the spreadsheet author and the parser.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetLayout {
    pub title: usize,
    pub price: usize,
    pub image: usize,
    pub link: Option<usize>,
    pub code: usize,
    pub description: Option<usize>,
    pub category: Option<usize>,
    /// Raw category used when the category cell is missing or empty.
    pub default_category: String,
}

impl SheetLayout {
    /// Product Name | Price | ImageURL | Code | Category
    pub fn homepage(default_category: &str) -> Self {
        Self {
            title: 0,
            price: 1,
            image: 2,
            link: None,
            code: 3,
            description: None,
            category: Some(4),
            default_category: default_category.to_string(),
        }
    }

    /// Name | Price | Image | Link | Code | Description | Category
    pub fn catalog(default_category: &str) -> Self {
        Self {
            title: 0,
            price: 1,
            image: 2,
            link: Some(3),
            code: 4,
            description: Some(5),
            category: Some(6),
            default_category: default_category.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRequest {
    pub sheet_id: String,
    pub sheet_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    pub id: String,
    pub heading: String,
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based.
    pub current: usize,
    pub total_pages: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("response is not wrapped in a gviz setResponse(...) call")]
    MalformedWrapper,
    #[error("invalid json: {0}")]
    Json(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Json(e.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Http(e.to_string()),
        }
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::ProductRecord;

    pub fn product(title: &str, code: &str, category: &str) -> ProductRecord {
        ProductRecord {
            title: title.to_string(),
            price: "499".to_string(),
            image: format!("https://img.example/{code}.jpg"),
            link: "#".to_string(),
            code: code.to_string(),
            description: String::new(),
            category: category.to_string(),
        }
    }
}
