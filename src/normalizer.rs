use crate::model::ProductRecord;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Accepted spellings folded into the canonical storefront categories.
/// Keys must be lowercase and trimmed.
pub const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("problem solving", "problem-solving"),
    ("problem-solving", "problem-solving"),
    ("home organizers", "home organisers"),
    ("home organizer", "home organisers"),
    ("home organize", "home organisers"),
    ("home organiser", "home organisers"),
    ("insta trend", "insta trends"),
    ("insta trends", "insta trends"),
    ("instagram", "insta trends"),
    ("kitchen bestseller", "kitchen"),
    ("kitchen bestsellers", "kitchen"),
];

/// Maps folded alias text to a canonical category.
#[derive(Debug, Clone)]
pub struct CategoryAliasTable {
    aliases: HashMap<String, String>,
}

impl CategoryAliasTable {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let aliases = entries
            .into_iter()
            .map(|(alias, canonical)| (fold(alias.as_ref()), canonical.into()))
            .collect();
        Self { aliases }
    }

    /// The built-in storefront table, built once.
    pub fn storefront() -> &'static CategoryAliasTable {
        static TABLE: OnceLock<CategoryAliasTable> = OnceLock::new();
        TABLE.get_or_init(|| CategoryAliasTable::new(CATEGORY_ALIASES.iter().copied()))
    }

    /// Returns the canonical category for `raw`, or the folded input when no alias matches.
    pub fn normalize(&self, raw: &str) -> String {
        let folded = fold(raw);
        match self.aliases.get(&folded) {
            Some(canonical) => canonical.clone(),
            None => folded,
        }
    }
}

/// Normalizes a category with the built-in table.
pub fn normalize(raw: &str) -> String {
    CategoryAliasTable::storefront().normalize(raw)
}

/// Rewrites every product category in place with `table`.
pub fn normalize_all(products: &mut [ProductRecord], table: &CategoryAliasTable) {
    for product in products.iter_mut() {
        product.category = table.normalize(&product.category);
    }
}

fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}
