//! Deserializer: flat query parameters to a partial search configuration

use log::debug;
use std::collections::HashSet;

use sift_core::{
    ConditionValue, FilterCondition, LogicalOperator, Operator, OperatorCatalog, Scalar,
    SearchConfigPatch, SortCondition, ValueShape,
};

use crate::key::parse_filter_key;
use crate::params::{OPERATOR_KEY, ParamValue, QueryParams, SEARCH_KEY, SORT_BY_KEY, SortSpec};

/// Decodes query parameters into a partial configuration. Never fails.
///
/// Fragments that can't be understood (a malformed `sortBy`, an unknown
/// operator id, an unrecognised `operator` value) are dropped one by one.
/// Keys outside the bracket grammar are read as `field = value`.
/// Conditions get fresh ids.
pub fn decode(catalog: &OperatorCatalog, params: &QueryParams) -> SearchConfigPatch {
    let mut patch = SearchConfigPatch::default();
    let mut conditions: Vec<FilterCondition> = Vec::new();
    let mut seen = HashSet::new();

    for (key, value) in params {
        match key.as_str() {
            SEARCH_KEY => match value.as_text() {
                Some(text) => patch.global_search = Some(text),
                None => debug!("Ignoring list value for '{}'", SEARCH_KEY),
            },
            SORT_BY_KEY => {
                patch.sort_conditions = decode_sort(value);
                if patch.sort_conditions.is_none() {
                    debug!("Ignoring malformed '{}' parameter", SORT_BY_KEY);
                }
            }
            OPERATOR_KEY => {
                patch.default_logical_operator =
                    value.as_text().and_then(|text| LogicalOperator::parse(&text));
            }
            _ => {
                let Some(condition) = decode_condition(catalog, key, value) else {
                    continue;
                };
                if seen.insert((condition.field.clone(), condition.operator)) {
                    conditions.push(condition);
                } else {
                    debug!("Dropping repeated condition '{}'", key);
                }
            }
        }
    }

    if !conditions.is_empty() {
        patch.filter_conditions = Some(conditions);
    }

    patch
}

/// Parses the `sortBy` JSON array, keeping its order.
pub fn decode_sort(value: &ParamValue) -> Option<Vec<SortCondition>> {
    let ParamValue::Scalar(Scalar::Text(json)) = value else {
        return None;
    };
    let specs: Vec<SortSpec> = serde_json::from_str(json).ok()?;

    Some(
        specs
            .into_iter()
            .map(|spec| SortCondition::new(spec.field, spec.order))
            .collect(),
    )
}

fn decode_condition(
    catalog: &OperatorCatalog,
    key: &str,
    value: &ParamValue,
) -> Option<FilterCondition> {
    match parse_filter_key(key) {
        Ok(filter_key) => {
            let Some(descriptor) = catalog.describe_id(&filter_key.operator_id) else {
                debug!("Dropping '{}': unknown operator", key);
                return None;
            };
            let value = shape_value(descriptor.shape, value);
            Some(FilterCondition::new(filter_key.field, descriptor.operator, value))
        }
        // Not bracketed: a bare field with implicit equality
        Err(_) => Some(FilterCondition::new(
            key,
            Operator::Eq,
            shape_value(ValueShape::Scalar, value),
        )),
    }
}

/// Fits a wire value to the operator's value shape where it is unambiguous.
fn shape_value(shape: ValueShape, value: &ParamValue) -> ConditionValue {
    match (shape, value) {
        (ValueShape::None, _) => ConditionValue::Absent,
        (ValueShape::Range, ParamValue::List(items)) if items.len() == 2 => {
            ConditionValue::Range(items[0].clone(), items[1].clone())
        }
        (ValueShape::List | ValueShape::Range, ParamValue::Scalar(scalar)) => {
            ConditionValue::List(vec![scalar.clone()])
        }
        (_, ParamValue::List(items)) => ConditionValue::List(items.clone()),
        (_, ParamValue::Scalar(scalar)) => ConditionValue::Scalar(scalar.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::SortOrder;

    fn params(entries: &[(&str, ParamValue)]) -> QueryParams {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_decode_empty_params() {
        let patch = decode(&OperatorCatalog::standard(), &QueryParams::new());
        assert!(patch.is_empty());
    }

    #[test]
    fn test_decode_reserved_keys() {
        let patch = decode(
            &OperatorCatalog::standard(),
            &params(&[
                ("search", ParamValue::from("crash")),
                ("operator", ParamValue::from("or")),
                (
                    "sortBy",
                    ParamValue::from(r#"[{"field":"severity","order":"desc"},{"field":"createdAt","order":"asc"}]"#),
                ),
            ]),
        );

        assert_eq!(patch.global_search.as_deref(), Some("crash"));
        assert_eq!(patch.default_logical_operator, Some(LogicalOperator::Or));
        let sorts = patch.sort_conditions.unwrap();
        assert_eq!(sorts.len(), 2);
        assert_eq!((sorts[0].field.as_str(), sorts[0].order), ("severity", SortOrder::Desc));
        assert_eq!((sorts[1].field.as_str(), sorts[1].order), ("createdAt", SortOrder::Asc));
        assert!(patch.filter_conditions.is_none());
    }

    #[test]
    fn test_decode_malformed_sort_is_omitted() {
        for value in [
            ParamValue::from("not-json"),
            ParamValue::from(r#"{"field":"x","order":"asc"}"#),
            ParamValue::from(r#"[{"field":"x","order":"sideways"}]"#),
            ParamValue::List(vec![Scalar::from("[]")]),
        ] {
            let patch = decode(&OperatorCatalog::standard(), &params(&[("sortBy", value)]));
            assert!(patch.sort_conditions.is_none());
        }
    }

    #[test]
    fn test_decode_operator_must_be_exact() {
        for text in ["AND", "xor", ""] {
            let patch = decode(
                &OperatorCatalog::standard(),
                &params(&[("operator", ParamValue::from(text))]),
            );
            assert_eq!(patch.default_logical_operator, None);
        }
    }

    #[test]
    fn test_decode_bracket_keys() {
        let patch = decode(
            &OperatorCatalog::standard(),
            &params(&[
                ("status[eq]", ParamValue::from("PENDING")),
                (
                    "createdAt[between]",
                    ParamValue::List(vec![Scalar::from("2024-01-01"), Scalar::from("2024-01-31")]),
                ),
                ("email[isNotNull]", ParamValue::from(true)),
            ]),
        );

        let conditions = patch.filter_conditions.unwrap();
        assert_eq!(conditions.len(), 3);
        assert_eq!(conditions[0].operator, Operator::Eq);
        assert_eq!(conditions[0].value, ConditionValue::from("PENDING"));
        assert_eq!(
            conditions[1].value,
            ConditionValue::range("2024-01-01", "2024-01-31")
        );
        assert_eq!(conditions[2].value, ConditionValue::Absent);
        assert!(conditions.iter().all(|c| c.enabled));
    }

    #[test]
    fn test_decode_unknown_operator_dropped() {
        let patch = decode(
            &OperatorCatalog::standard(),
            &params(&[
                ("status[like]", ParamValue::from("PEND")),
                ("status[eq]", ParamValue::from("PENDING")),
            ]),
        );

        let conditions = patch.filter_conditions.unwrap();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].operator, Operator::Eq);
    }

    #[test]
    fn test_decode_bare_key_is_equality() {
        let patch = decode(
            &OperatorCatalog::standard(),
            &params(&[("reporter", ParamValue::from("alice"))]),
        );

        let conditions = patch.filter_conditions.unwrap();
        assert_eq!(conditions[0].field, "reporter");
        assert_eq!(conditions[0].operator, Operator::Eq);
        assert_eq!(conditions[0].value, ConditionValue::from("alice"));
    }

    #[test]
    fn test_decode_single_value_for_list_operator() {
        let patch = decode(
            &OperatorCatalog::standard(),
            &params(&[("status[in]", ParamValue::from("PENDING"))]),
        );

        let conditions = patch.filter_conditions.unwrap();
        assert_eq!(conditions[0].value, ConditionValue::list(["PENDING"]));
    }

    #[test]
    fn test_decode_repeated_pair_keeps_first() {
        let patch = decode(
            &OperatorCatalog::standard(),
            &params(&[
                ("status[eq]", ParamValue::from("PENDING")),
                ("status", ParamValue::from("APPROVED")),
            ]),
        );

        let conditions = patch.filter_conditions.unwrap();
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].value, ConditionValue::from("PENDING"));
    }
}
