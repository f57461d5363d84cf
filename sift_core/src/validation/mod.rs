//! Validation of conditions against the operator catalog and field schema.

mod validation_errors;

pub use validation_errors::{ConditionError, ValidationErrorKind};

use log::debug;
use std::collections::HashSet;

use crate::condition::{FilterCondition, SearchConfig};
use crate::operator::{OperatorCatalog, ValueShape};
use crate::schema::{FieldSchema, FieldType};

/// Checks one condition, stopping at the first problem found.
///
/// Only list and range operators check the value's shape. A scalar operator
/// such as `eq` accepts a list or range value as long as it is not missing;
/// callers that need exactly one value must check for it themselves.
pub fn validate_condition(
    catalog: &OperatorCatalog,
    condition: &FilterCondition,
    field_type: FieldType,
) -> Option<ConditionError> {
    let id = condition.id;
    let field = condition.field.as_str();

    let Some(descriptor) = catalog.describe(condition.operator) else {
        return Some(ConditionError::unknown_operator(id, field, condition.operator));
    };

    if !descriptor.supports(field_type) {
        return Some(ConditionError::unsupported_operator(
            id,
            field,
            condition.operator,
            field_type,
        ));
    }

    if descriptor.requires_value() && condition.value.is_missing() {
        return Some(ConditionError::missing_value(id, field));
    }

    match descriptor.shape {
        ValueShape::List if !condition.value.is_non_empty_list() => {
            Some(ConditionError::missing_list(id, field))
        }
        ValueShape::Range if !condition.value.is_range() => {
            Some(ConditionError::missing_range(id, field))
        }
        _ => None,
    }
}

/// Checks every enabled condition of a configuration, plus its sort list.
///
/// Disabled filter conditions are skipped entirely. The configuration is
/// valid iff the returned list is empty.
pub fn validate_config(
    catalog: &OperatorCatalog,
    schema: &FieldSchema,
    config: &SearchConfig,
) -> Vec<ConditionError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for condition in config.enabled_conditions() {
        let Some(field_type) = schema.field_type(&condition.field) else {
            errors.push(ConditionError::unknown_field(condition.id, &condition.field));
            continue;
        };

        if let Some(error) = validate_condition(catalog, condition, field_type) {
            errors.push(error);
            continue;
        }

        // Two enabled conditions on the same field and operator would collapse
        // into one query parameter
        if !seen.insert((condition.field.as_str(), condition.operator)) {
            errors.push(ConditionError::duplicate_condition(
                condition.id,
                &condition.field,
                condition.operator,
            ));
        }
    }

    for sort in &config.sort_conditions {
        match schema.get(&sort.field) {
            None => errors.push(ConditionError::unknown_field(sort.id, &sort.field)),
            Some(field) if !field.sortable => {
                errors.push(ConditionError::not_sortable(sort.id, &sort.field))
            }
            Some(_) => {}
        }
    }

    if !errors.is_empty() {
        debug!("Search configuration has {} validation errors", errors.len());
    }

    errors
}
