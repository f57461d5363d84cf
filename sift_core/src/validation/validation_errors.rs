use serde::Serialize;
use std::fmt;

use crate::condition::ConditionId;
use crate::operator::Operator;
use crate::schema::FieldType;

/// The category of a validation failure.
///
/// Validation itself only yields `Required` and `Invalid`; `Format` and
/// `Range` are left for per-type checks layered on top by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationErrorKind {
    Required,
    Invalid,
    Format,
    Range,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValidationErrorKind::Required => "required",
            ValidationErrorKind::Invalid => "invalid",
            ValidationErrorKind::Format => "format",
            ValidationErrorKind::Range => "range",
        };
        write!(f, "{}", name)
    }
}

/// A problem with one condition of a search configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionError {
    pub condition_id: ConditionId,
    pub field: String,
    pub message: String,
    pub kind: ValidationErrorKind,
}

impl ConditionError {
    pub fn new(
        condition_id: ConditionId,
        field: &str,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            condition_id,
            field: field.to_string(),
            message: message.into(),
            kind,
        }
    }

    pub fn unknown_operator(condition_id: ConditionId, field: &str, operator: Operator) -> Self {
        Self::new(
            condition_id,
            field,
            ValidationErrorKind::Invalid,
            format!("Unknown operator '{}'", operator),
        )
    }

    pub fn unsupported_operator(
        condition_id: ConditionId,
        field: &str,
        operator: Operator,
        field_type: FieldType,
    ) -> Self {
        Self::new(
            condition_id,
            field,
            ValidationErrorKind::Invalid,
            format!(
                "Operator '{}' is not supported for {} fields",
                operator, field_type
            ),
        )
    }

    pub fn missing_value(condition_id: ConditionId, field: &str) -> Self {
        Self::new(
            condition_id,
            field,
            ValidationErrorKind::Required,
            "A value is required",
        )
    }

    pub fn missing_list(condition_id: ConditionId, field: &str) -> Self {
        Self::new(
            condition_id,
            field,
            ValidationErrorKind::Required,
            "At least one value is required",
        )
    }

    pub fn missing_range(condition_id: ConditionId, field: &str) -> Self {
        Self::new(
            condition_id,
            field,
            ValidationErrorKind::Required,
            "Both range bounds are required",
        )
    }

    pub fn unknown_field(condition_id: ConditionId, field: &str) -> Self {
        Self::new(
            condition_id,
            field,
            ValidationErrorKind::Invalid,
            format!("Unknown field '{}'", field),
        )
    }

    pub fn duplicate_condition(condition_id: ConditionId, field: &str, operator: Operator) -> Self {
        Self::new(
            condition_id,
            field,
            ValidationErrorKind::Invalid,
            format!(
                "Another enabled condition already uses '{}' on this field",
                operator
            ),
        )
    }

    pub fn not_sortable(condition_id: ConditionId, field: &str) -> Self {
        Self::new(
            condition_id,
            field,
            ValidationErrorKind::Invalid,
            format!("Field '{}' cannot be sorted", field),
        )
    }
}

impl fmt::Display for ConditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.field, self.kind, self.message)
    }
}

impl std::error::Error for ConditionError {}
