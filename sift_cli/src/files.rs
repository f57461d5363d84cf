//! Loading of schema and configuration files.

use std::path::Path;

use serde::de::DeserializeOwned;
use sift_core::{FieldSchema, SearchConfig, SearchField};

use crate::errors::CliError;
use crate::ui;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let source = std::fs::read_to_string(path).map_err(|e| {
        ui::error_with_details(&format!("Failed to read '{}'", path.display()), &e.to_string());
        CliError::FileError
    })?;

    serde_json::from_str(&source).map_err(|e| {
        ui::error_with_details(&format!("Failed to parse '{}'", path.display()), &e.to_string());
        CliError::InputError
    })
}

/// Loads a field schema from a JSON array of field definitions.
pub fn load_schema(path: &Path) -> Result<FieldSchema, CliError> {
    ui::debug(&format!("Loading schema from '{}'", path.display()));
    let fields: Vec<SearchField> = read_json(path)?;

    FieldSchema::new(fields).map_err(|errors| {
        for e in &errors {
            ui::error(&e.to_string());
        }
        CliError::SchemaError
    })
}

/// Loads the schema when a path was given, failing otherwise.
pub fn require_schema(path: Option<&Path>) -> Result<FieldSchema, CliError> {
    match path {
        Some(path) => load_schema(path),
        None => {
            ui::error(&CliError::MissingSchema.to_string());
            Err(CliError::MissingSchema)
        }
    }
}

/// Loads a search configuration from JSON.
pub fn load_config(path: &Path) -> Result<SearchConfig, CliError> {
    ui::debug(&format!("Loading search configuration from '{}'", path.display()));
    read_json(path)
}
