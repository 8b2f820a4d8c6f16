pub mod gviz_parser;
pub mod posts_parser;

use crate::model::FetchError;

pub use gviz_parser::GvizParser;
pub use posts_parser::PostsParser;

pub trait Parser {
    type Output;

    fn parse(&self, body: &str) -> Result<Vec<Self::Output>, FetchError>;
}
