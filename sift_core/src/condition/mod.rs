//! Condition model: filter conditions, sort conditions and the search
//! configuration that owns them.

mod config;
mod types;
mod value;

pub use config::{SearchConfig, SearchConfigPatch};
pub use types::*;
pub use value::{ConditionValue, Scalar};
