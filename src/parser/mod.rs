mod common;
mod php;

pub use common::{ParseResult, Parser};
pub use php::PhpParser;
