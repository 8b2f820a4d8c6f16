// Grouping and selection over the loaded product list.
use crate::model::{Carousel, ProductRecord};
use crate::utils::{capitalize, make_id};
use std::collections::HashMap;

/// Fixed homepage carousel order.
pub const HOMEPAGE_ORDER: &[&str] = &[
    "trending",
    "problem-solving",
    "home organisers",
    "insta trends",
    "kitchen",
];

pub const DEFAULT_INJECT_LIMIT: usize = 4;

/// Products bucketed by canonical category; each bucket keeps input order.
pub fn group_by_category(products: &[ProductRecord]) -> HashMap<String, Vec<ProductRecord>> {
    let mut groups: HashMap<String, Vec<ProductRecord>> = HashMap::new();
    for product in products {
        groups
            .entry(product.category.clone())
            .or_default()
            .push(product.clone());
    }
    groups
}

/// One carousel per category in `order` that has products. Other categories are not shown.
pub fn homepage_carousels<S: AsRef<str>>(products: &[ProductRecord], order: &[S]) -> Vec<Carousel> {
    let mut groups = group_by_category(products);
    order
        .iter()
        .filter_map(|cat| {
            let cat = cat.as_ref();
            let products = groups.remove(cat).filter(|list| !list.is_empty())?;
            Some(Carousel {
                id: make_id(cat),
                heading: capitalize(cat),
                products,
            })
        })
        .collect()
}

/// Distinct categories in first-seen order.
pub fn unique_categories(products: &[ProductRecord]) -> Vec<String> {
    let mut seen = Vec::new();
    for product in products {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Products for an in-article block: category contains `category`, at most `limit`.
pub fn inject(products: &[ProductRecord], category: &str, limit: usize) -> Vec<ProductRecord> {
    let wanted = category.trim().to_lowercase();
    products
        .iter()
        .filter(|p| p.category.to_lowercase().contains(&wanted))
        .take(limit)
        .cloned()
        .collect()
}
