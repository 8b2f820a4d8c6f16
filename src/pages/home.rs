use crate::catalog::{homepage_carousels, inject};
use crate::model::{Carousel, ProductRecord};
use crate::search::{filter, ProductField};
use std::sync::Arc;

/// Homepage: fixed-order carousels plus the search suggestion dropdown.
pub struct HomePage {
    products: Arc<Vec<ProductRecord>>,
    order: Vec<String>,
    suggestion_limit: usize,
}

impl HomePage {
    pub fn new(products: Arc<Vec<ProductRecord>>, order: Vec<String>, suggestion_limit: usize) -> Self {
        Self {
            products,
            order,
            suggestion_limit,
        }
    }

    pub fn carousels(&self) -> Vec<Carousel> {
        homepage_carousels(self.products.as_slice(), self.order.as_slice())
    }

    /// `None` hides the dropdown (blank query). `Some(vec![])` is the "no results" state.
    pub fn suggest(&self, query: &str) -> Option<Vec<ProductRecord>> {
        if query.trim().is_empty() {
            return None;
        }
        let mut results = filter(self.products.as_slice(), query, ProductField::SUGGESTIONS);
        results.truncate(self.suggestion_limit);
        Some(results)
    }

    /// Products for an in-article block on a blog page.
    pub fn inject(&self, category: &str, limit: usize) -> Vec<ProductRecord> {
        inject(&self.products, category, limit)
    }
}
