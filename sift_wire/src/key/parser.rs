//! Parser for bracket filter keys using pest

use pest::Parser;
use pest_derive::Parser;

use sift_core::Operator;

#[derive(Parser)]
#[grammar = "key/grammar.pest"]
struct KeyParser;

/// Error type for filter key parsing
#[derive(Debug, Clone, PartialEq)]
pub enum KeyParseError {
    SyntaxError(String),
}

impl std::fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyParseError::SyntaxError(msg) => write!(f, "Syntax error: {}", msg),
        }
    }
}

impl std::error::Error for KeyParseError {}

/// A parsed `field[operator]` key.
///
/// The operator id is kept as written; whether it names a known operator is
/// up to the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterKey {
    pub field: String,
    pub operator_id: String,
}

/// Parse a query parameter key of the form `field[operator]`
pub fn parse_filter_key(input: &str) -> Result<FilterKey, KeyParseError> {
    let key_pair = KeyParser::parse(Rule::filter_key, input)
        .map_err(|e| KeyParseError::SyntaxError(e.to_string()))?
        .next()
        .ok_or_else(|| KeyParseError::SyntaxError("Empty filter key".to_string()))?;

    let mut field = None;
    let mut operator_id = None;

    for inner_pair in key_pair.into_inner() {
        match inner_pair.as_rule() {
            Rule::field_name => field = Some(inner_pair.as_str().to_string()),
            Rule::operator_id => operator_id = Some(inner_pair.as_str().to_string()),
            _ => {}
        }
    }

    match (field, operator_id) {
        (Some(field), Some(operator_id)) => Ok(FilterKey { field, operator_id }),
        _ => Err(KeyParseError::SyntaxError(format!(
            "Invalid filter key '{}'",
            input
        ))),
    }
}

/// Builds the `field[operator]` key for a condition
pub fn format_filter_key(field: &str, operator: Operator) -> String {
    format!("{}[{}]", field, operator.as_str())
}
