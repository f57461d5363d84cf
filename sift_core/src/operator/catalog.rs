use super::types::{Operator, OperatorDescriptor, ValueShape};
use crate::schema::FieldType;

const ALL_TYPES: &[FieldType] = &FieldType::ALL;
const TEXT: &[FieldType] = &[FieldType::String];
const LISTABLE: &[FieldType] = &[FieldType::String, FieldType::Number, FieldType::Enum];
const ORDERED: &[FieldType] = &[FieldType::Number, FieldType::Date];

/// The fixed table of operators a search may use.
///
/// Declaration order matters: the default operator for a field type is the
/// first entry supporting it.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorCatalog {
    descriptors: Vec<OperatorDescriptor>,
}

impl OperatorCatalog {
    /// Creates a catalog from an explicit descriptor list.
    pub fn new(descriptors: Vec<OperatorDescriptor>) -> Self {
        Self { descriptors }
    }

    /// The built-in operator table.
    pub fn standard() -> Self {
        use Operator as Op;
        use ValueShape as Shape;

        Self::new(vec![
            OperatorDescriptor::new(Op::Eq, "equals", Shape::Scalar, ALL_TYPES),
            OperatorDescriptor::new(Op::Ne, "not equals", Shape::Scalar, ALL_TYPES),
            OperatorDescriptor::new(Op::Contains, "contains", Shape::Scalar, TEXT),
            OperatorDescriptor::new(Op::StartsWith, "starts with", Shape::Scalar, TEXT),
            OperatorDescriptor::new(Op::EndsWith, "ends with", Shape::Scalar, TEXT),
            OperatorDescriptor::new(Op::In, "in", Shape::List, LISTABLE),
            OperatorDescriptor::new(Op::NotIn, "not in", Shape::List, LISTABLE),
            OperatorDescriptor::new(Op::Gt, "greater than", Shape::Scalar, ORDERED),
            OperatorDescriptor::new(Op::Gte, "greater or equal", Shape::Scalar, ORDERED),
            OperatorDescriptor::new(Op::Lt, "less than", Shape::Scalar, ORDERED),
            OperatorDescriptor::new(Op::Lte, "less or equal", Shape::Scalar, ORDERED),
            OperatorDescriptor::new(Op::Between, "between", Shape::Range, ORDERED),
            OperatorDescriptor::new(Op::IsNull, "is empty", Shape::None, ALL_TYPES),
            OperatorDescriptor::new(Op::IsNotNull, "is not empty", Shape::None, ALL_TYPES),
        ])
    }

    /// Looks up the descriptor of an operator, if this catalog has one.
    pub fn describe(&self, operator: Operator) -> Option<&OperatorDescriptor> {
        self.descriptors.iter().find(|d| d.operator == operator)
    }

    /// Looks up a descriptor by wire identifier.
    pub fn describe_id(&self, id: &str) -> Option<&OperatorDescriptor> {
        id.parse::<Operator>().ok().and_then(|op| self.describe(op))
    }

    /// All operators usable on a field type, in catalog order.
    pub fn operators_supporting(&self, field_type: FieldType) -> Vec<&OperatorDescriptor> {
        self.descriptors
            .iter()
            .filter(|d| d.supports(field_type))
            .collect()
    }

    /// The first operator in catalog order that supports the field type.
    pub fn default_operator(&self, field_type: FieldType) -> Option<&OperatorDescriptor> {
        self.descriptors.iter().find(|d| d.supports(field_type))
    }

    pub fn iter(&self) -> impl Iterator<Item = &OperatorDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for OperatorCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_covers_every_operator() {
        let catalog = OperatorCatalog::standard();
        for operator in Operator::ALL {
            assert!(catalog.describe(operator).is_some(), "missing {}", operator);
        }
    }

    #[test]
    fn test_value_shape_flags_are_exclusive() {
        for descriptor in OperatorCatalog::standard().iter() {
            assert!(!(descriptor.requires_array() && descriptor.requires_range()));
            if descriptor.requires_array() || descriptor.requires_range() {
                assert!(descriptor.requires_value());
            }
        }
    }

    #[test]
    fn test_default_operator_supports_type() {
        let catalog = OperatorCatalog::standard();
        for field_type in FieldType::ALL {
            let descriptor = catalog.default_operator(field_type).unwrap();
            assert!(descriptor.supports(field_type));
        }
    }

    #[test]
    fn test_default_operator_is_first_in_declaration_order() {
        let catalog = OperatorCatalog::new(vec![
            OperatorDescriptor::new(Operator::Gt, "gt", ValueShape::Scalar, ORDERED),
            OperatorDescriptor::new(Operator::Eq, "eq", ValueShape::Scalar, ALL_TYPES),
        ]);

        assert_eq!(
            catalog.default_operator(FieldType::Number).unwrap().operator,
            Operator::Gt
        );
        assert_eq!(
            catalog.default_operator(FieldType::String).unwrap().operator,
            Operator::Eq
        );
    }

    #[test]
    fn test_operators_supporting_string() {
        let catalog = OperatorCatalog::standard();
        let operators: Vec<_> = catalog
            .operators_supporting(FieldType::String)
            .iter()
            .map(|d| d.operator)
            .collect();

        assert!(operators.contains(&Operator::Contains));
        assert!(operators.contains(&Operator::In));
        assert!(!operators.contains(&Operator::Between));
        assert!(!operators.contains(&Operator::Gt));
    }

    #[test]
    fn test_operators_supporting_boolean() {
        let catalog = OperatorCatalog::standard();
        let operators: Vec<_> = catalog
            .operators_supporting(FieldType::Boolean)
            .iter()
            .map(|d| d.operator)
            .collect();

        assert_eq!(
            operators,
            vec![Operator::Eq, Operator::Ne, Operator::IsNull, Operator::IsNotNull]
        );
    }

    #[test]
    fn test_describe_missing_operator() {
        let catalog = OperatorCatalog::new(vec![OperatorDescriptor::new(
            Operator::Eq,
            "eq",
            ValueShape::Scalar,
            ALL_TYPES,
        )]);

        assert!(catalog.describe(Operator::Between).is_none());
        assert!(catalog.describe_id("between").is_none());
        assert!(catalog.describe_id("like").is_none());
        assert!(catalog.describe_id("eq").is_some());
    }

    #[test]
    fn test_operator_ids_round_trip_through_from_str() {
        for operator in Operator::ALL {
            assert_eq!(operator.as_str().parse::<Operator>().unwrap(), operator);
        }
        assert!("NOT_AN_OP".parse::<Operator>().is_err());
    }
}
