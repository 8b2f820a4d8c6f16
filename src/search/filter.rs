use crate::model::{BlogPost, ProductRecord};
use std::borrow::Cow;

/// Lowercase, whitespace-separated tokens of a user query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    tokens: Vec<String>,
}

impl SearchQuery {
    pub fn parse(input: &str) -> Self {
        let tokens = input
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    #[cfg(test)]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when every token occurs somewhere in `haystack`.
    /// `haystack` must already be lower-cased.
    pub fn matches(&self, haystack: &str) -> bool {
        self.tokens.iter().all(|t| haystack.contains(t.as_str()))
    }
}

/// A record whose fields can be searched. `Field` enumerates the selectable fields.
pub trait Searchable {
    type Field: Copy;

    fn field_text(&self, field: Self::Field) -> Cow<'_, str>;

    /// Selected fields joined with single spaces, lower-cased.
    fn haystack(&self, fields: &[Self::Field]) -> String {
        fields
            .iter()
            .map(|&f| self.field_text(f))
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Title,
    Price,
    Code,
    Description,
    Category,
}

impl ProductField {
    /// Homepage suggestion dropdown.
    pub const SUGGESTIONS: &'static [ProductField] = &[
        ProductField::Title,
        ProductField::Code,
        ProductField::Category,
        ProductField::Price,
    ];

    /// All-products grid.
    pub const GRID: &'static [ProductField] = &[
        ProductField::Title,
        ProductField::Code,
        ProductField::Description,
        ProductField::Category,
    ];
}

impl Searchable for ProductRecord {
    type Field = ProductField;

    fn field_text(&self, field: ProductField) -> Cow<'_, str> {
        Cow::Borrowed(match field {
            ProductField::Title => self.title.as_str(),
            ProductField::Price => self.price.as_str(),
            ProductField::Code => self.code.as_str(),
            ProductField::Description => self.description.as_str(),
            ProductField::Category => self.category.as_str(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Title,
    Excerpt,
    Categories,
}

impl PostField {
    pub const INDEX: &'static [PostField] =
        &[PostField::Title, PostField::Excerpt, PostField::Categories];
}

impl Searchable for BlogPost {
    type Field = PostField;

    fn field_text(&self, field: PostField) -> Cow<'_, str> {
        match field {
            PostField::Title => Cow::Borrowed(self.title.as_str()),
            PostField::Excerpt => Cow::Borrowed(self.excerpt.as_str()),
            PostField::Categories => Cow::Owned(self.categories.join(" ")),
        }
    }
}

/// Keeps the records whose haystack over `fields` contains every query token.
///
/// A blank query returns every record. Order is the input order; there is no
/// ranking and no cap on the result size.
pub fn filter<T>(records: &[T], query: &str, fields: &[T::Field]) -> Vec<T>
where
    T: Searchable + Clone,
{
    let query = SearchQuery::parse(query);
    if query.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| query.matches(&r.haystack(fields)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::product;

    fn with_description(title: &str, code: &str, description: &str) -> ProductRecord {
        ProductRecord {
            description: description.to_string(),
            ..product(title, code, "kitchen")
        }
    }

    fn titles(records: &[ProductRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn query_splits_on_whitespace_runs() {
        let q = SearchQuery::parse("  Kitchen \t STEEL\n rack ");
        assert_eq!(q.tokens(), &["kitchen", "steel", "rack"]);
    }

    #[test]
    fn blank_query_returns_everything_in_order() {
        let records = vec![
            product("B", "2", "kitchen"),
            product("A", "1", "trending"),
        ];
        assert_eq!(filter(&records, "", ProductField::GRID), records);
        assert_eq!(filter(&records, "   \t", ProductField::GRID), records);
    }

    #[test]
    fn every_token_must_match() {
        let records = vec![
            product("Steel kitchen organiser", "A1", "kitchen"),
            product("Steel bathroom organiser", "A2", "home organisers"),
            product("Wooden spoon", "A3", "trending"),
        ];
        let result = filter(&records, "kitchen steel", &[ProductField::Title]);
        assert_eq!(titles(&result), vec!["Steel kitchen organiser"]);
    }

    #[test]
    fn subset_and_disjoint_matches_are_excluded() {
        let records = vec![
            with_description("Rack", "R1", "steel kitchen organiser"),
            with_description("Rack", "R2", "steel bathroom organiser"),
            with_description("Mug", "M1", "ceramic"),
        ];
        let result = filter(&records, "steel kitchen", &[ProductField::Description]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].code, "R1");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let records = vec![
            product("Kitchen Timer", "T1", "kitchen"),
            product("Desk Lamp", "L1", "trending"),
        ];
        let upper = filter(&records, "KITCHEN", &[ProductField::Title]);
        let lower = filter(&records, "kitchen", &[ProductField::Title]);
        assert_eq!(upper, lower);
        assert_eq!(titles(&upper), vec!["Kitchen Timer"]);
    }

    #[test]
    fn tokens_match_substrings_not_words() {
        let records = vec![product("Organiser box", "B1", "home organisers")];
        assert_eq!(filter(&records, "organ", &[ProductField::Title]).len(), 1);
    }

    #[test]
    fn only_configured_fields_are_searched() {
        let records = vec![product("Timer", "SKU-77", "kitchen")];
        assert!(filter(&records, "sku-77", &[ProductField::Title]).is_empty());
        assert_eq!(filter(&records, "sku-77", ProductField::SUGGESTIONS).len(), 1);
        assert_eq!(filter(&records, "499", ProductField::SUGGESTIONS).len(), 1);
        assert!(filter(&records, "499", ProductField::GRID).is_empty());
    }

    #[test]
    fn tokens_may_span_adjacent_fields() {
        let records = vec![product("Timer", "K9", "kitchen")];
        assert_eq!(
            filter(&records, "timer k9", &[ProductField::Title, ProductField::Code]).len(),
            1
        );
    }

    #[test]
    fn posts_search_title_excerpt_and_categories() {
        let posts = vec![
            BlogPost {
                title: "Ten tidy drawers".into(),
                excerpt: "Small fixes".into(),
                categories: vec!["Home".into(), "Storage".into()],
                ..BlogPost::default()
            },
            BlogPost {
                title: "Best peelers".into(),
                excerpt: "Kitchen picks".into(),
                categories: vec!["Kitchen".into()],
                ..BlogPost::default()
            },
        ];
        let result = filter(&posts, "storage tidy", PostField::INDEX);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Ten tidy drawers");
    }

    #[test]
    fn input_is_left_untouched() {
        let records = vec![product("A", "1", "kitchen"), product("B", "2", "kitchen")];
        let before = records.clone();
        let _ = filter(&records, "a", &[ProductField::Title]);
        assert_eq!(records, before);
    }
}
