//! Serializer: search configuration to flat query parameters

use log::{debug, warn};

use sift_core::{
    ConditionValue, OperatorCatalog, OperatorDescriptor, SearchConfig, SortCondition, ValueShape,
};

use crate::key::format_filter_key;
use crate::params::{OPERATOR_KEY, ParamValue, QueryParams, SEARCH_KEY, SORT_BY_KEY, SortSpec};

/// Encodes a configuration into query parameters.
///
/// Disabled conditions and conditions whose operator the catalog doesn't know
/// are left out. Each remaining condition yields at most one
/// `field[operator]` key, so two conditions sharing a field and operator
/// collide and the later one wins.
pub fn encode(catalog: &OperatorCatalog, config: &SearchConfig) -> QueryParams {
    let mut params = QueryParams::new();

    if let Some(text) = config.search_text() {
        params.insert(SEARCH_KEY.to_string(), ParamValue::from(text));
    }

    if !config.sort_conditions.is_empty() {
        match encode_sort(&config.sort_conditions) {
            Ok(json) => {
                params.insert(SORT_BY_KEY.to_string(), ParamValue::from(json));
            }
            Err(e) => warn!("Could not encode sort conditions: {}", e),
        }
    }

    if let Some(operator) = config.default_logical_operator {
        params.insert(OPERATOR_KEY.to_string(), ParamValue::from(operator.as_str()));
    }

    for condition in config.enabled_conditions() {
        let Some(descriptor) = catalog.describe(condition.operator) else {
            debug!(
                "Skipping condition on '{}': operator '{}' not in catalog",
                condition.field, condition.operator
            );
            continue;
        };

        let Some(value) = encode_value(descriptor, &condition.value) else {
            continue;
        };

        let key = format_filter_key(&condition.field, condition.operator);
        if params.insert(key.clone(), value).is_some() {
            warn!("Parameter '{}' set by more than one condition, keeping the last", key);
        }
    }

    params
}

/// Serializes sort conditions to the JSON array carried by `sortBy`.
pub fn encode_sort(sorts: &[SortCondition]) -> Result<String, serde_json::Error> {
    let specs: Vec<SortSpec> = sorts
        .iter()
        .map(|sort| SortSpec {
            field: sort.field.clone(),
            order: sort.order,
        })
        .collect();
    serde_json::to_string(&specs)
}

fn encode_value(descriptor: &OperatorDescriptor, value: &ConditionValue) -> Option<ParamValue> {
    match (descriptor.shape, value) {
        (ValueShape::None, _) => Some(ParamValue::from(true)),
        (ValueShape::List, ConditionValue::List(items)) if !items.is_empty() => {
            Some(ParamValue::List(items.clone()))
        }
        (ValueShape::List, _) => None,
        (ValueShape::Range, ConditionValue::Range(from, to)) => {
            Some(ParamValue::List(vec![from.clone(), to.clone()]))
        }
        (ValueShape::Range, _) => None,
        (ValueShape::Scalar, ConditionValue::Absent) => None,
        (ValueShape::Scalar, ConditionValue::Scalar(scalar)) => {
            Some(ParamValue::Scalar(scalar.clone()))
        }
        // A mis-shaped value is passed on as-is; validation is where it gets reported
        (ValueShape::Scalar, ConditionValue::List(items)) => Some(ParamValue::List(items.clone())),
        (ValueShape::Scalar, ConditionValue::Range(from, to)) => {
            Some(ParamValue::List(vec![from.clone(), to.clone()]))
        }
    }
}
