// console/render.rs

use crate::model::{BlogPost, Carousel, Page, ProductRecord};
use crate::utils::parse_datetime;
use std::fmt::Write;

fn product_line(out: &mut String, p: &ProductRecord) {
    let _ = writeln!(out, "  • {} — ₹{} [{}] {}", p.title, p.price, p.code, p.link);
}

pub fn products(list: &[ProductRecord]) -> String {
    if list.is_empty() {
        return "No products found".to_string();
    }
    let mut out = String::new();
    for p in list {
        product_line(&mut out, p);
    }
    out
}

/// `None` renders nothing (dropdown hidden).
pub fn suggestions(list: Option<&[ProductRecord]>) -> String {
    match list {
        None => String::new(),
        Some([]) => "No results found".to_string(),
        Some(list) => products(list),
    }
}

pub fn carousels(list: &[Carousel]) -> String {
    if list.is_empty() {
        return "No carousels to show".to_string();
    }
    let mut out = String::new();
    for c in list {
        let _ = writeln!(out, "## {} (#{})", c.heading, c.id);
        out.push_str(&products(&c.products));
    }
    out
}

pub fn chips(active: &str, labels: &[String]) -> String {
    std::iter::once("all")
        .chain(labels.iter().map(String::as_str))
        .map(|label| {
            if label.eq_ignore_ascii_case(active) {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn date_label(post: &BlogPost) -> String {
    match parse_datetime(&post.date) {
        Some(dt) => dt.format("%d %b %Y").to_string(),
        None => post.date.clone(),
    }
}

pub fn blog_page(page: &Page<BlogPost>) -> String {
    let mut out = String::new();
    if page.items.is_empty() {
        out.push_str("No posts found.\n");
    }
    for post in &page.items {
        let cats = post
            .categories
            .iter()
            .take(2)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "  • {} ({}) [{}] {}", post.title, date_label(post), cats, post.url);
        if !post.excerpt.is_empty() {
            let _ = writeln!(out, "    {}", post.excerpt);
        }
    }
    let _ = write!(out, "Page {}/{}", page.current, page.total_pages);
    out
}

pub fn injected(category: &str, list: &[ProductRecord]) -> String {
    if list.is_empty() {
        return format!("No products found for \"{category}\".");
    }
    products(list)
}
