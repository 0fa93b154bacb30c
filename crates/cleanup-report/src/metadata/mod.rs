mod parser;
mod types;

pub use parser::{parse_metadata, parse_metadata_str};
pub use types::*;
