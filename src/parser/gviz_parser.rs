// Google Visualization (gviz) sheet export parsing
use crate::model::{FetchError, ProductRecord, SheetLayout, PLACEHOLDER_LINK};
use crate::parser::Parser;
use serde::Deserialize;
use serde_json::Value;

const SET_RESPONSE: &str = "setResponse(";

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    rows: Option<Vec<GvizRow>>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    c: Option<Vec<Option<GvizCell>>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    v: Option<Value>,
}

/// Cuts the JSON body out of `/*O_o*/\ngoogle.visualization.Query.setResponse(...);`.
pub fn strip_gviz_wrapper(text: &str) -> Result<&str, FetchError> {
    let start = text
        .find(SET_RESPONSE)
        .map(|i| i + SET_RESPONSE.len())
        .ok_or(FetchError::MalformedWrapper)?;
    let end = text.rfind(')').ok_or(FetchError::MalformedWrapper)?;
    if end < start {
        return Err(FetchError::MalformedWrapper);
    }
    Ok(text[start..end].trim())
}

/// Text of a cell value; `None` for null or empty cells.
fn cell_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => i.to_string(),
            // Whole floats render without a trailing ".0", as the sheet shows them.
            (None, Some(f)) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
                (f as i64).to_string()
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

pub struct GvizParser {
    layout: SheetLayout,
}

impl GvizParser {
    pub fn new(layout: SheetLayout) -> Self {
        Self { layout }
    }

    fn row_to_product(&self, cells: &[Option<GvizCell>]) -> ProductRecord {
        let cell = |idx: Option<usize>| -> Option<String> {
            idx.and_then(|i| cells.get(i))
                .and_then(|c| c.as_ref())
                .and_then(|c| c.v.as_ref())
                .and_then(cell_text)
        };
        let layout = &self.layout;

        ProductRecord {
            title: cell(Some(layout.title)).unwrap_or_default(),
            price: cell(Some(layout.price)).unwrap_or_default(),
            image: cell(Some(layout.image)).unwrap_or_default(),
            link: cell(layout.link).unwrap_or_else(|| PLACEHOLDER_LINK.to_string()),
            code: cell(Some(layout.code)).unwrap_or_default(),
            description: cell(layout.description).unwrap_or_default(),
            // Raw label; the normalizer canonicalizes it afterwards.
            category: cell(layout.category)
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| layout.default_category.clone()),
        }
    }
}

impl Parser for GvizParser {
    type Output = ProductRecord;

    fn parse(&self, body: &str) -> Result<Vec<ProductRecord>, FetchError> {
        let json = strip_gviz_wrapper(body)?;
        let response: GvizResponse = serde_json::from_str(json)?;

        let rows = response.table.and_then(|t| t.rows).unwrap_or_default();
        let products = rows
            .iter()
            .map(|row| self.row_to_product(row.c.as_deref().unwrap_or(&[])))
            .collect();

        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(json: &str) -> String {
        format!("/*O_o*/\ngoogle.visualization.Query.setResponse({json});")
    }

    #[test]
    fn strips_the_fixed_wrapper() {
        let body = wrap(r#"{"table":{"rows":[]}}"#);
        assert_eq!(strip_gviz_wrapper(&body).unwrap(), r#"{"table":{"rows":[]}}"#);
    }

    #[test]
    fn rejects_unwrapped_payloads() {
        assert!(matches!(
            strip_gviz_wrapper("<html>sign in</html>"),
            Err(FetchError::MalformedWrapper)
        ));
        assert!(matches!(
            strip_gviz_wrapper(") setResponse("),
            Err(FetchError::MalformedWrapper)
        ));
    }

    #[test]
    fn maps_homepage_columns_positionally() {
        let body = wrap(
            r#"{"table":{"rows":[
                {"c":[{"v":"Steel Rack"},{"v":499.0},{"v":"https://img/x.jpg"},{"v":1042},{"v":"Kitchen Bestseller"}]}
            ]}}"#,
        );
        let products = GvizParser::new(SheetLayout::homepage("trending"))
            .parse(&body)
            .unwrap();
        assert_eq!(
            products,
            vec![ProductRecord {
                title: "Steel Rack".into(),
                price: "499".into(),
                image: "https://img/x.jpg".into(),
                link: "#".into(),
                code: "1042".into(),
                description: String::new(),
                category: "Kitchen Bestseller".into(),
            }]
        );
    }

    #[test]
    fn missing_cells_fall_back_to_defaults() {
        let body = wrap(
            r#"{"table":{"rows":[
                {"c":[{"v":"Mug"},null,{"v":null},{"v":""}]},
                {"c":null}
            ]}}"#,
        );
        let products = GvizParser::new(SheetLayout::catalog("other"))
            .parse(&body)
            .unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].title, "Mug");
        assert_eq!(products[0].price, "");
        assert_eq!(products[0].link, "#");
        assert_eq!(products[0].category, "other");
        assert_eq!(products[1].title, "");
        assert_eq!(products[1].category, "other");
    }

    #[test]
    fn fractional_prices_keep_their_decimals() {
        let body = wrap(r#"{"table":{"rows":[{"c":[{"v":"Cup"},{"v":12.5}]}]}}"#);
        let products = GvizParser::new(SheetLayout::catalog("other"))
            .parse(&body)
            .unwrap();
        assert_eq!(products[0].price, "12.5");
    }

    #[test]
    fn missing_table_is_an_empty_sheet() {
        let parser = GvizParser::new(SheetLayout::homepage("other"));
        assert!(parser.parse(&wrap(r#"{"status":"ok"}"#)).unwrap().is_empty());
    }

    #[test]
    fn broken_json_is_reported() {
        let parser = GvizParser::new(SheetLayout::homepage("other"));
        assert!(matches!(parser.parse(&wrap("{nope")), Err(FetchError::Json(_))));
    }
}
