//! Operator type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::FieldType;

/// Comparison operators for filter conditions.
///
/// The serialized form is the wire identifier used inside bracket keys,
/// e.g. `createdAt[between]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Eq,
    Ne,
    In,
    NotIn,
    Contains,
    StartsWith,
    EndsWith,
    Gt,
    Gte,
    Lt,
    Lte,
    Between,
    IsNull,
    IsNotNull,
}

impl Operator {
    pub const ALL: [Operator; 14] = [
        Operator::Eq,
        Operator::Ne,
        Operator::In,
        Operator::NotIn,
        Operator::Contains,
        Operator::StartsWith,
        Operator::EndsWith,
        Operator::Gt,
        Operator::Gte,
        Operator::Lt,
        Operator::Lte,
        Operator::Between,
        Operator::IsNull,
        Operator::IsNotNull,
    ];

    /// The wire identifier of this operator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::In => "in",
            Operator::NotIn => "notIn",
            Operator::Contains => "contains",
            Operator::StartsWith => "startsWith",
            Operator::EndsWith => "endsWith",
            Operator::Gt => "gt",
            Operator::Gte => "gte",
            Operator::Lt => "lt",
            Operator::Lte => "lte",
            Operator::Between => "between",
            Operator::IsNull => "isNull",
            Operator::IsNotNull => "isNotNull",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string is not a known operator identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl std::str::FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.as_str() == s)
            .ok_or_else(|| UnknownOperator(s.to_string()))
    }
}

/// The shape of value an operator expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    /// No value at all (null checks).
    None,
    Scalar,
    /// A non-empty ordered list.
    List,
    /// Exactly two bounds.
    Range,
}

/// One entry of the operator catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorDescriptor {
    pub operator: Operator,
    pub label: &'static str,
    pub shape: ValueShape,
    pub supported_types: Vec<FieldType>,
}

impl OperatorDescriptor {
    pub fn new(
        operator: Operator,
        label: &'static str,
        shape: ValueShape,
        supported_types: &[FieldType],
    ) -> Self {
        Self {
            operator,
            label,
            shape,
            supported_types: supported_types.to_vec(),
        }
    }

    /// Whether the operator takes any value. True for list and range shapes too.
    pub fn requires_value(&self) -> bool {
        self.shape != ValueShape::None
    }

    pub fn requires_array(&self) -> bool {
        self.shape == ValueShape::List
    }

    pub fn requires_range(&self) -> bool {
        self.shape == ValueShape::Range
    }

    pub fn supports(&self, field_type: FieldType) -> bool {
        self.supported_types.contains(&field_type)
    }
}
