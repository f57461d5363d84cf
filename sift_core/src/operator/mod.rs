//! Operator catalog: which operators exist, what value shape each takes and
//! which field types each supports.

mod catalog;
mod types;

pub use catalog::OperatorCatalog;
pub use types::*;
