use crate::catalog::unique_categories;
use crate::model::ProductRecord;
use crate::normalizer::normalize;
use crate::search::{filter, ChipSelection, ProductField};
use std::sync::Arc;

/// All-products grid. Chips and the search box each filter the full list on their own.
pub struct ProductGrid {
    products: Arc<Vec<ProductRecord>>,
    chips: ChipSelection,
}

impl ProductGrid {
    pub fn new(products: Arc<Vec<ProductRecord>>) -> Self {
        Self {
            products,
            chips: ChipSelection::default(),
        }
    }

    /// Chip labels after the leading "all" chip.
    pub fn chip_labels(&self) -> Vec<String> {
        unique_categories(&self.products)
    }

    pub fn active_chip(&self) -> &str {
        self.chips.active()
    }

    /// Chip text is folded like sheet categories, so aliases pick the canonical chip.
    pub fn select_chip(&mut self, chip: &str) -> Vec<ProductRecord> {
        self.chips.select(&normalize(chip));
        self.chips.apply(self.products.as_slice())
    }

    pub fn search(&self, query: &str) -> Vec<ProductRecord> {
        filter(self.products.as_slice(), query, ProductField::GRID)
    }

    /// Swaps in a freshly loaded list; the active chip stays.
    pub fn replace_products(&mut self, products: Arc<Vec<ProductRecord>>) {
        self.products = products;
    }
}
