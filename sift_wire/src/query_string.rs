//! URL query string form of query parameters

use url::form_urlencoded;

use sift_core::Scalar;

use crate::params::{ParamValue, QueryParams};

/// Flattens parameters into a URL-encoded query string.
///
/// List values repeat their key once per element; scalars appear once.
pub fn to_query_string(params: &QueryParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (key, value) in params {
        match value {
            ParamValue::Scalar(scalar) => {
                serializer.append_pair(key, &scalar.to_string());
            }
            ParamValue::List(items) => {
                for item in items {
                    serializer.append_pair(key, &item.to_string());
                }
            }
        }
    }

    serializer.finish()
}

/// Parses a URL query string into parameters. A leading `?` is ignored.
///
/// Repeated keys collect into a list in order of appearance. All values are
/// read as text, since the string carries no type information.
pub fn parse_query_string(input: &str) -> QueryParams {
    let input = input.strip_prefix('?').unwrap_or(input);
    let mut params = QueryParams::new();

    for (key, value) in form_urlencoded::parse(input.as_bytes()) {
        let scalar = Scalar::Text(value.into_owned());
        match params.get_mut(&*key) {
            Some(existing) => {
                let previous = std::mem::replace(existing, ParamValue::List(Vec::new()));
                *existing = previous.push(scalar);
            }
            None => {
                params.insert(key.into_owned(), ParamValue::Scalar(scalar));
            }
        }
    }

    params
}
