pub mod catalog_loader;
pub mod parser;

pub use catalog_loader::{is_json_resource, load, CatalogLoader, OnParseError};
pub use parser::{parse_document, parse_str};
