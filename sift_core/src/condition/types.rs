//! Filter and sort condition definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::value::ConditionValue;
use crate::operator::Operator;

/// Opaque identity of a condition. Carries no meaning and never crosses the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionId(Uuid);

impl ConditionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ConditionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a condition combines with the one after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicalOperator {
    #[default]
    And,
    Or,
}

impl LogicalOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogicalOperator::And => "and",
            LogicalOperator::Or => "or",
        }
    }

    /// Parses exactly `"and"` or `"or"`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "and" => Some(LogicalOperator::And),
            "or" => Some(LogicalOperator::Or),
            _ => None,
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn default_true() -> bool {
    true
}

/// One `(field, operator, value)` unit of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    #[serde(default)]
    pub id: ConditionId,
    pub field: String,
    pub operator: Operator,
    #[serde(default)]
    pub value: ConditionValue,
    #[serde(default)]
    pub logical_operator: LogicalOperator,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl FilterCondition {
    /// Creates an enabled AND condition under a fresh id. Never fails; the
    /// value is stored as given and checked only by validation.
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            id: ConditionId::new(),
            field: field.into(),
            operator,
            value: value.into(),
            logical_operator: LogicalOperator::default(),
            enabled: true,
        }
    }

    /// Creates a condition for operators that take no value.
    pub fn without_value(field: impl Into<String>, operator: Operator) -> Self {
        Self::new(field, operator, ConditionValue::Absent)
    }

    pub fn with_logical_operator(mut self, logical_operator: LogicalOperator) -> Self {
        self.logical_operator = logical_operator;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Copies everything but the id and enabled flag under a new id.
    pub fn duplicate(&self) -> Self {
        Self {
            id: ConditionId::new(),
            field: self.field.clone(),
            operator: self.operator,
            value: self.value.clone(),
            logical_operator: self.logical_operator,
            enabled: true,
        }
    }
}

impl fmt::Display for FilterCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.value)?;
        if !self.enabled {
            write!(f, " (disabled)")?;
        }
        Ok(())
    }
}

/// One key of a multi-field sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortCondition {
    #[serde(default)]
    pub id: ConditionId,
    pub field: String,
    #[serde(default)]
    pub order: SortOrder,
}

impl SortCondition {
    pub fn new(field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            id: ConditionId::new(),
            field: field.into(),
            order,
        }
    }

    pub fn ascending(field: impl Into<String>) -> Self {
        Self::new(field, SortOrder::Asc)
    }
}

impl fmt::Display for SortCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.order)
    }
}

/// A partial change to a filter condition. Unset fields stay as they are.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConditionUpdate {
    pub field: Option<String>,
    pub operator: Option<Operator>,
    pub value: Option<ConditionValue>,
    pub logical_operator: Option<LogicalOperator>,
    pub enabled: Option<bool>,
}

impl FilterConditionUpdate {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn value(mut self, value: impl Into<ConditionValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn logical_operator(mut self, logical_operator: LogicalOperator) -> Self {
        self.logical_operator = Some(logical_operator);
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Returns the updated copy of `condition`, keeping its id.
    pub fn apply_to(&self, condition: &FilterCondition) -> FilterCondition {
        FilterCondition {
            id: condition.id,
            field: self.field.clone().unwrap_or_else(|| condition.field.clone()),
            operator: self.operator.unwrap_or(condition.operator),
            value: self.value.clone().unwrap_or_else(|| condition.value.clone()),
            logical_operator: self.logical_operator.unwrap_or(condition.logical_operator),
            enabled: self.enabled.unwrap_or(condition.enabled),
        }
    }
}

/// A partial change to a sort condition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortConditionUpdate {
    pub field: Option<String>,
    pub order: Option<SortOrder>,
}

impl SortConditionUpdate {
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn apply_to(&self, condition: &SortCondition) -> SortCondition {
        SortCondition {
            id: condition.id,
            field: self.field.clone().unwrap_or_else(|| condition.field.clone()),
            order: self.order.unwrap_or(condition.order),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_filter_condition_defaults() {
        let condition = FilterCondition::new("status", Operator::Eq, "PENDING");

        assert_eq!(condition.field, "status");
        assert_eq!(condition.operator, Operator::Eq);
        assert_eq!(condition.value, ConditionValue::from("PENDING"));
        assert_eq!(condition.logical_operator, LogicalOperator::And);
        assert!(condition.enabled);
    }

    #[test]
    fn test_new_conditions_get_distinct_ids() {
        let a = FilterCondition::without_value("email", Operator::IsNull);
        let b = FilterCondition::without_value("email", Operator::IsNull);
        assert_ne!(a.id, b.id);
        assert_eq!(a.value, ConditionValue::Absent);
    }

    #[test]
    fn test_duplicate_keeps_content_but_not_id() {
        let original = FilterCondition::new("severity", Operator::Gt, 3i64)
            .with_logical_operator(LogicalOperator::Or);
        let copy = original.duplicate();

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.field, original.field);
        assert_eq!(copy.operator, original.operator);
        assert_eq!(copy.value, original.value);
        assert_eq!(copy.logical_operator, LogicalOperator::Or);
    }

    #[test]
    fn test_filter_update_keeps_unset_fields() {
        let condition = FilterCondition::new("severity", Operator::Gt, 3i64);
        let updated = FilterConditionUpdate::default()
            .operator(Operator::Lte)
            .apply_to(&condition);

        assert_eq!(updated.id, condition.id);
        assert_eq!(updated.operator, Operator::Lte);
        assert_eq!(updated.value, condition.value);
        assert_eq!(updated.field, "severity");
    }

    #[test]
    fn test_sort_update() {
        let sort = SortCondition::ascending("createdAt");
        let updated = SortConditionUpdate::default()
            .order(SortOrder::Desc)
            .apply_to(&sort);

        assert_eq!(updated.id, sort.id);
        assert_eq!(updated.order, SortOrder::Desc);
        assert_eq!(updated.field, "createdAt");
    }

    #[test]
    fn test_logical_operator_parse_is_exact() {
        assert_eq!(LogicalOperator::parse("and"), Some(LogicalOperator::And));
        assert_eq!(LogicalOperator::parse("or"), Some(LogicalOperator::Or));
        assert_eq!(LogicalOperator::parse("AND"), None);
        assert_eq!(LogicalOperator::parse(""), None);
    }

    #[test]
    fn test_filter_condition_deserialize_defaults() {
        let condition: FilterCondition = serde_json::from_str(
            r#"{ "field": "email", "operator": "isNotNull" }"#,
        )
        .unwrap();

        assert_eq!(condition.operator, Operator::IsNotNull);
        assert_eq!(condition.value, ConditionValue::Absent);
        assert!(condition.enabled);
    }
}
