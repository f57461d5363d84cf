//! Field schema: the declared set of fields a search may reference.

mod field;
mod schema_errors;

pub use field::{FieldOption, FieldType, SearchField};
pub use schema_errors::SchemaError;

use log::debug;
use std::collections::HashSet;

/// An ordered, validated list of searchable fields.
///
/// The schema is fixed for the lifetime of whatever consumes it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldSchema {
    fields: Vec<SearchField>,
}

impl FieldSchema {
    /// Builds a schema, reporting every broken invariant at once.
    pub fn new(fields: Vec<SearchField>) -> Result<Self, Vec<SchemaError>> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for field in &fields {
            if !seen.insert(field.key.as_str()) {
                errors.push(SchemaError::DuplicateKey {
                    key: field.key.clone(),
                });
            }
            if field.field_type == FieldType::Enum && field.options.is_empty() {
                errors.push(SchemaError::MissingEnumOptions {
                    key: field.key.clone(),
                });
            }
        }

        if errors.is_empty() {
            debug!("Built field schema with {} fields", fields.len());
            Ok(Self { fields })
        } else {
            debug!("Field schema rejected with {} errors", errors.len());
            Err(errors)
        }
    }

    /// Looks up a field by key.
    pub fn get(&self, key: &str) -> Option<&SearchField> {
        self.fields.iter().find(|field| field.key == key)
    }

    /// Returns the type of the field with the given key.
    pub fn field_type(&self, key: &str) -> Option<FieldType> {
        self.get(key).map(|field| field.field_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchField> {
        self.fields.iter()
    }

    pub fn sortable_fields(&self) -> impl Iterator<Item = &SearchField> {
        self.fields.iter().filter(|field| field.sortable)
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &SearchField> {
        self.fields.iter().filter(|field| field.visible)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
