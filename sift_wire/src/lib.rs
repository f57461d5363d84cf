//! Wire format and editing sessions for Sift search configurations.
//!
//! A [`SearchConfig`](sift_core::SearchConfig) travels as a flat, ordered map
//! of [`QueryParams`]: reserved keys for global search, sorting and the
//! default logical operator, plus one `field[operator]` key per enabled
//! condition. [`encode`] and [`decode`] convert between the two, and
//! [`SearchSession`] wraps both around a mutable editing loop.

pub mod decode;
pub mod encode;
pub mod key;
pub mod params;
pub mod query_string;
pub mod session;

pub use decode::{decode, decode_sort};
pub use encode::{encode, encode_sort};
pub use key::{FilterKey, KeyParseError, format_filter_key, parse_filter_key};
pub use params::{
    OPERATOR_KEY, ParamValue, QueryParams, SEARCH_KEY, SORT_BY_KEY, SortSpec,
};
pub use query_string::{parse_query_string, to_query_string};
pub use session::SearchSession;
