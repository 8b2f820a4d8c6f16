// Utility functions
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%d %B %Y", "%Y/%m/%d"];

/// Parses a blog date. RFC 3339 first, then naive date-times and plain dates,
/// both read as UTC (plain dates at midnight).
pub fn parse_datetime(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(date_str, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(date_str, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|dt| dt.and_utc())
}

/// Anchor id for a category section: lowercase ASCII letters and digits only.
pub fn make_id(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Upper-cases the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn ids_drop_everything_but_ascii_alphanumerics() {
        assert_eq!(make_id("Problem-Solving"), "problemsolving");
        assert_eq!(make_id("home organisers"), "homeorganisers");
        assert_eq!(make_id("top 10!"), "top10");
    }

    #[test]
    fn capitalize_only_touches_the_first_char() {
        assert_eq!(capitalize("insta trends"), "Insta trends");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn parses_plain_and_rfc3339_dates() {
        assert_eq!(parse_datetime("2024-03-05").map(|d| d.day()), Some(5));
        assert!(parse_datetime("2024-03-05T10:00:00+05:30").is_some());
        assert!(parse_datetime("last tuesday").is_none());
    }

    #[test]
    fn parses_naive_datetimes_and_written_dates() {
        use chrono::Timelike;
        let dt = parse_datetime("2024-03-05 10:30").unwrap();
        assert_eq!((dt.day(), dt.hour(), dt.minute()), (5, 10, 30));
        assert_eq!(parse_datetime("March 5, 2024"), parse_datetime("2024-03-05"));
        assert_eq!(parse_datetime("5 March 2024"), parse_datetime("2024-03-05"));
    }
}
