use crate::model::{BlogPost, Page};
use crate::search::{filter, paginate, ChipSelection, PostField};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Blog index: category chip and search box compose, results are paginated.
pub struct BlogIndex {
    posts: Arc<Vec<BlogPost>>,
    chips: ChipSelection,
    query: String,
    page: usize,
    page_size: usize,
}

impl BlogIndex {
    pub fn new(posts: Arc<Vec<BlogPost>>, page_size: usize) -> Self {
        Self {
            posts,
            chips: ChipSelection::default(),
            query: String::new(),
            page: 1,
            page_size,
        }
    }

    /// Sorted unique categories across all posts.
    pub fn chip_labels(&self) -> Vec<String> {
        self.posts
            .iter()
            .flat_map(|p| p.categories.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn active_chip(&self) -> &str {
        self.chips.active()
    }

    pub fn select_chip(&mut self, chip: &str) -> Page<BlogPost> {
        self.chips.select(chip);
        self.page = 1;
        self.current()
    }

    pub fn search(&mut self, query: &str) -> Page<BlogPost> {
        self.query = query.trim().to_string();
        self.page = 1;
        self.current()
    }

    pub fn goto(&mut self, page: usize) -> Page<BlogPost> {
        self.page = page;
        self.current()
    }

    pub fn replace_posts(&mut self, posts: Arc<Vec<BlogPost>>) {
        self.posts = posts;
    }

    /// The visible page; an out-of-range page number is clamped and remembered.
    pub fn current(&mut self) -> Page<BlogPost> {
        let by_category = self.chips.apply(self.posts.as_slice());
        let matching = filter(&by_category, &self.query, PostField::INDEX);
        let page = paginate(&matching, self.page, self.page_size);
        self.page = page.current;
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, categories: &[&str]) -> BlogPost {
        BlogPost {
            title: title.to_string(),
            excerpt: format!("All about {title}"),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            ..BlogPost::default()
        }
    }

    fn index() -> BlogIndex {
        let mut posts: Vec<BlogPost> = (1..=12)
            .map(|i| post(&format!("Kitchen tip {i}"), &["Kitchen"]))
            .collect();
        posts.push(post("Closet makeover", &["Home", "Storage"]));
        posts.push(post("Drawer kitchen hacks", &["Storage"]));
        BlogIndex::new(Arc::new(posts), 10)
    }

    #[test]
    fn first_page_holds_page_size_items() {
        let page = index().current();
        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn chip_and_query_compose() {
        let mut blog = index();
        blog.select_chip("storage");
        let page = blog.search("kitchen");
        let titles: Vec<&str> = page.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Drawer kitchen hacks"]);
        assert_eq!(blog.active_chip(), "storage");
    }

    #[test]
    fn filtering_resets_to_first_page() {
        let mut blog = index();
        assert_eq!(blog.goto(2).current, 2);
        assert_eq!(blog.search("tip").current, 1);
        assert_eq!(blog.goto(5).current, 2);
        assert_eq!(blog.select_chip("all").current, 1);
    }

    #[test]
    fn no_match_yields_an_empty_single_page() {
        let page = index().search("gardening");
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn chip_labels_sorted_and_unique() {
        assert_eq!(index().chip_labels(), vec!["Home", "Kitchen", "Storage"]);
    }
}
