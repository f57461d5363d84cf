//! Encode/decode round trips, by example and by property

use proptest::prelude::*;
use std::collections::HashSet;

use sift_core::{
    ConditionValue, FilterCondition, LogicalOperator, Operator, OperatorCatalog, Scalar,
    SearchConfig, SortCondition, SortOrder, ValueShape,
};
use sift_wire::{decode, encode, parse_query_string, to_query_string};

/// The parts of a condition that travel over the wire.
fn wire_view(config: &SearchConfig) -> Vec<(String, Operator, ConditionValue)> {
    config
        .enabled_conditions()
        .map(|c| (c.field.clone(), c.operator, c.value.clone()))
        .collect()
}

fn sort_view(config: &SearchConfig) -> Vec<(String, SortOrder)> {
    config
        .sort_conditions
        .iter()
        .map(|s| (s.field.clone(), s.order))
        .collect()
}

fn assert_equivalent(before: &SearchConfig, after: &SearchConfig) {
    assert_eq!(wire_view(before), wire_view(after));
    assert_eq!(sort_view(before), sort_view(after));
    assert_eq!(before.search_text(), after.search_text());
    assert_eq!(before.default_logical_operator, after.default_logical_operator);
}

fn round_trip(config: &SearchConfig) -> SearchConfig {
    let catalog = OperatorCatalog::standard();
    decode(&catalog, &encode(&catalog, config)).into_config()
}

#[test]
fn test_round_trip_mixed_config() {
    let config = SearchConfig::new()
        .with_condition(FilterCondition::new("status", Operator::In, ConditionValue::list(["PENDING", "APPROVED"])))
        .with_condition(FilterCondition::new("severity", Operator::Gte, 3i64))
        .with_condition(FilterCondition::new(
            "createdAt",
            Operator::Between,
            ConditionValue::range("2024-01-01", "2024-01-31"),
        ))
        .with_condition(FilterCondition::without_value("email", Operator::IsNull))
        .with_condition(FilterCondition::new("archived", Operator::Eq, false))
        .with_sort(SortCondition::new("severity", SortOrder::Desc))
        .with_global_search("disk full")
        .with_default_logical_operator(LogicalOperator::Or);

    assert_equivalent(&config, &round_trip(&config));
}

#[test]
fn test_round_trip_drops_disabled_conditions() {
    let config = SearchConfig::new()
        .with_condition(FilterCondition::new("status", Operator::Eq, "PENDING"))
        .with_condition(FilterCondition::new("severity", Operator::Gt, 2i64).disabled());

    let decoded = round_trip(&config);
    assert_eq!(decoded.filter_conditions.len(), 1);
    assert_equivalent(&config, &decoded);
}

#[test]
fn test_decoded_ids_are_fresh() {
    let config =
        SearchConfig::new().with_condition(FilterCondition::new("status", Operator::Eq, "PENDING"));

    let decoded = round_trip(&config);
    assert_ne!(decoded.filter_conditions[0].id, config.filter_conditions[0].id);
}

#[test]
fn test_round_trip_bracketed_field_names() {
    let config = SearchConfig::new()
        .with_condition(FilterCondition::new("meta[x]", Operator::Gt, "3"))
        .with_condition(FilterCondition::new("tags[]", Operator::In, ConditionValue::list(["a"])))
        .with_condition(FilterCondition::new("a]b[eq]", Operator::Eq, "x"))
        .with_condition(FilterCondition::without_value("[", Operator::IsNull));

    let decoded = round_trip(&config);
    assert_equivalent(&config, &decoded);

    let catalog = OperatorCatalog::standard();
    let query = to_query_string(&encode(&catalog, &config));
    let decoded = decode(&catalog, &parse_query_string(&query)).into_config();
    assert_equivalent(&config, &decoded);
}

#[test]
fn test_query_string_round_trip() {
    let config = SearchConfig::new()
        .with_condition(FilterCondition::new("status", Operator::NotIn, ConditionValue::list(["A&B", "C=D"])))
        .with_condition(FilterCondition::without_value("email", Operator::IsNotNull))
        .with_sort(SortCondition::new("createdAt", SortOrder::Asc));
    let catalog = OperatorCatalog::standard();

    let query = to_query_string(&encode(&catalog, &config));
    let decoded = decode(&catalog, &parse_query_string(&query)).into_config();

    assert_equivalent(&config, &decoded);
}

fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<bool>().prop_map(Scalar::Bool),
        any::<i32>().prop_map(|n| Scalar::Number(f64::from(n))),
        "[ -~]{0,12}".prop_map(Scalar::Text),
    ]
}

fn text_scalar() -> impl Strategy<Value = Scalar> {
    "[ -~]{1,12}".prop_map(Scalar::Text)
}

/// A value of the shape the operator expects.
fn value_for(shape: ValueShape, scalar: BoxedStrategy<Scalar>) -> BoxedStrategy<ConditionValue> {
    match shape {
        ValueShape::None => Just(ConditionValue::Absent).boxed(),
        ValueShape::Scalar => scalar.prop_map(ConditionValue::Scalar).boxed(),
        ValueShape::List => prop::collection::vec(scalar, 1..4)
            .prop_map(ConditionValue::List)
            .boxed(),
        ValueShape::Range => (scalar.clone(), scalar)
            .prop_map(|(from, to)| ConditionValue::Range(from, to))
            .boxed(),
    }
}

fn condition(scalar: BoxedStrategy<Scalar>) -> impl Strategy<Value = FilterCondition> {
    let catalog = OperatorCatalog::standard();
    let descriptors: Vec<_> = catalog.iter().cloned().collect();

    (r"[a-z][a-zA-Z_.\[\]]{0,8}", prop::sample::select(descriptors)).prop_flat_map(
        move |(field, descriptor)| {
            value_for(descriptor.shape, scalar.clone())
                .prop_map(move |value| FilterCondition::new(field.clone(), descriptor.operator, value))
        },
    )
}

fn config(scalar: BoxedStrategy<Scalar>) -> impl Strategy<Value = SearchConfig> {
    (
        prop::collection::vec(condition(scalar), 0..6),
        prop::collection::vec(("[a-z]{1,8}", any::<bool>()), 0..3),
        prop::option::of("[ -~]{1,16}"),
        prop::option::of(prop_oneof![Just(LogicalOperator::And), Just(LogicalOperator::Or)]),
    )
        .prop_map(|(conditions, sorts, search, operator)| {
            let mut seen = HashSet::new();
            let mut config = SearchConfig::new();
            config.filter_conditions = conditions
                .into_iter()
                .filter(|c| seen.insert((c.field.clone(), c.operator)))
                .collect();
            config.sort_conditions = sorts
                .into_iter()
                .map(|(field, desc)| {
                    SortCondition::new(field, if desc { SortOrder::Desc } else { SortOrder::Asc })
                })
                .collect();
            config.global_search = search;
            config.default_logical_operator = operator;
            config
        })
}

proptest! {
    #[test]
    fn prop_params_round_trip(config in config(scalar().boxed())) {
        let decoded = round_trip(&config);
        prop_assert_eq!(wire_view(&config), wire_view(&decoded));
        prop_assert_eq!(sort_view(&config), sort_view(&decoded));
        prop_assert_eq!(config.search_text(), decoded.search_text());
        prop_assert_eq!(config.default_logical_operator, decoded.default_logical_operator);
    }

    #[test]
    fn prop_query_string_round_trip(config in config(text_scalar().boxed())) {
        let catalog = OperatorCatalog::standard();
        let query = to_query_string(&encode(&catalog, &config));
        let decoded = decode(&catalog, &parse_query_string(&query)).into_config();

        prop_assert_eq!(wire_view(&config), wire_view(&decoded));
        prop_assert_eq!(sort_view(&config), sort_view(&decoded));
        prop_assert_eq!(config.search_text(), decoded.search_text());
    }

    #[test]
    fn prop_decode_never_panics(
        entries in prop::collection::vec(("[ -~]{0,12}", "[ -~]{0,12}"), 0..8)
    ) {
        let query: Vec<String> = entries.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        let params = parse_query_string(&query.join("&"));
        let _ = decode(&OperatorCatalog::standard(), &params);
    }
}
