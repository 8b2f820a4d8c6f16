use crate::model::{BlogPost, FetchError};
use crate::parser::Parser;
use crate::utils::parse_datetime;
use std::cmp::Reverse;

/// Parses `posts.json` and orders it newest first.
pub struct PostsParser;

impl PostsParser {
    pub fn new() -> Self {
        Self
    }
}

/// Newest first; posts with an unreadable date keep their relative order at the end.
pub fn sort_newest_first(posts: &mut [BlogPost]) {
    posts.sort_by_key(|p| match parse_datetime(&p.date) {
        Some(dt) => (false, Reverse(Some(dt))),
        None => (true, Reverse(None)),
    });
}

impl Parser for PostsParser {
    type Output = BlogPost;

    fn parse(&self, body: &str) -> Result<Vec<BlogPost>, FetchError> {
        let mut posts: Vec<BlogPost> = serde_json::from_str(body)?;
        sort_newest_first(&mut posts);
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_by_date_descending() {
        let body = r#"[
            {"title":"old","date":"2023-01-10"},
            {"title":"undated","date":"soon"},
            {"title":"new","date":"2024-06-01","categories":["Kitchen"]},
            {"title":"mid","date":"2023-11-20T08:00:00Z"}
        ]"#;
        let posts = PostsParser::new().parse(body).unwrap();
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["new", "mid", "old", "undated"]);
        assert_eq!(posts[0].categories, vec!["Kitchen"]);
        assert!(posts[1].categories.is_empty());
    }

    #[test]
    fn null_fields_fall_back_to_empty() {
        let body = r#"[
            {"title":"ok","date":"2024-01-01","excerpt":"fine","categories":["Home"]},
            {"title":"no cats","date":"2024-02-01","categories":null,"excerpt":null,"url":null}
        ]"#;
        let posts = PostsParser::new().parse(body).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "no cats");
        assert!(posts[0].categories.is_empty());
        assert_eq!(posts[0].excerpt, "");
        assert_eq!(posts[0].url, "");
        assert_eq!(posts[1].categories, vec!["Home"]);
    }

    #[test]
    fn rejects_non_array_documents() {
        assert!(matches!(
            PostsParser::new().parse(r#"{"posts":[]}"#),
            Err(FetchError::Json(_))
        ));
    }
}
