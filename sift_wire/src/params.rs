//! Flat query parameter representation

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use sift_core::{Scalar, SortOrder};

/// Free-text search key.
pub const SEARCH_KEY: &str = "search";
/// JSON-encoded array of `{field, order}` objects, in priority order.
pub const SORT_BY_KEY: &str = "sortBy";
/// Default logical operator, `and` or `or`.
pub const OPERATOR_KEY: &str = "operator";

/// The value of a single query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    List(Vec<Scalar>),
    Scalar(Scalar),
}

impl ParamValue {
    /// The value as text, if it is a single value.
    pub fn as_text(&self) -> Option<String> {
        match self {
            ParamValue::Scalar(scalar) => Some(scalar.to_string()),
            ParamValue::List(_) => None,
        }
    }

    /// Appends another value for the same key, turning a scalar into a list.
    pub fn push(self, value: Scalar) -> ParamValue {
        match self {
            ParamValue::Scalar(first) => ParamValue::List(vec![first, value]),
            ParamValue::List(mut items) => {
                items.push(value);
                ParamValue::List(items)
            }
        }
    }
}

impl From<Scalar> for ParamValue {
    fn from(value: Scalar) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(Scalar::from(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(Scalar::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Scalar(Scalar::Bool(value))
    }
}

impl From<Vec<Scalar>> for ParamValue {
    fn from(value: Vec<Scalar>) -> Self {
        ParamValue::List(value)
    }
}

/// Insertion-ordered map of query parameters.
pub type QueryParams = IndexMap<String, ParamValue>;

/// One entry of the `sortBy` parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}
