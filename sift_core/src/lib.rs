//! Core data structures for Sift search configurations.
//!
//! A caller declares a [`FieldSchema`] once, picks operators from an
//! [`OperatorCatalog`], and assembles filter and sort conditions into a
//! [`SearchConfig`]. Configurations are immutable values: every change goes
//! through [`SearchConfig::apply`] and yields a new configuration.

pub mod condition;
pub mod operation;
pub mod operator;
pub mod schema;
pub mod validation;

pub use condition::{
    ConditionId, ConditionValue, FilterCondition, FilterConditionUpdate, LogicalOperator, Scalar,
    SearchConfig, SearchConfigPatch, SortCondition, SortConditionUpdate, SortOrder,
};
pub use operation::SearchOperation;
pub use operator::{Operator, OperatorCatalog, OperatorDescriptor, UnknownOperator, ValueShape};
pub use schema::{FieldOption, FieldSchema, FieldType, SchemaError, SearchField};
pub use validation::{ConditionError, ValidationErrorKind, validate_condition, validate_config};
