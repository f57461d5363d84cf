use std::path::Path;

use serde::Serialize;
use sift_core::{ConditionError, OperatorCatalog, validate_config};

use super::decode::query_to_config;
use crate::errors::CliError;
use crate::files::require_schema;
use crate::ui::{self, OutputFormat};

#[derive(Serialize)]
struct ValidationReport<'a> {
    valid: bool,
    errors: &'a [ConditionError],
}

/// Decodes a query string and checks it against the schema.
pub fn validate_query(
    schema_path: Option<&Path>,
    query: &str,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Validating query");
    let schema = require_schema(schema_path)?;
    let catalog = OperatorCatalog::standard();
    let config = query_to_config(&catalog, query);
    let errors = validate_config(&catalog, &schema, &config);

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_errors(&errors),
        OutputFormat::Json => ui::json_output(&ValidationReport {
            valid: errors.is_empty(),
            errors: &errors,
        }),
    }

    if errors.is_empty() {
        ui::success("No errors found");
        Ok(())
    } else {
        ui::error(&format!("Found {} error(s)", errors.len()));
        Err(CliError::ValidationError(errors.len()))
    }
}
