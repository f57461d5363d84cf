use std::fmt;

/// A field schema declaration that breaks one of the schema invariants.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Two fields share the same key.
    DuplicateKey { key: String },
    /// An enum field was declared without any options.
    MissingEnumOptions { key: String },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::DuplicateKey { key } => {
                write!(f, "Field key '{}' is declared more than once", key)
            }
            SchemaError::MissingEnumOptions { key } => {
                write!(f, "Enum field '{}' must declare at least one option", key)
            }
        }
    }
}

impl std::error::Error for SchemaError {}
