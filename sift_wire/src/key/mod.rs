//! The bracket grammar used for filter parameter keys.

mod parser;

pub use parser::{FilterKey, KeyParseError, format_filter_key, parse_filter_key};
