use std::path::Path;

use sift_core::{OperatorCatalog, SearchConfig, validate_config};
use sift_wire::{decode, parse_query_string};

use crate::errors::CliError;
use crate::files::load_schema;
use crate::ui::{self, OutputFormat};

/// Decodes a query string into a configuration.
pub fn query_to_config(catalog: &OperatorCatalog, query: &str) -> SearchConfig {
    let params = parse_query_string(query);
    ui::debug(&format!("Parsed {} query parameters", params.len()));
    decode(catalog, &params).into_config()
}

/// Decodes a query string and prints the resulting configuration.
///
/// With a schema, problems are reported as warnings; use `validate` to fail on them.
pub fn decode_query(
    schema_path: Option<&Path>,
    query: &str,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Decoding query");
    let catalog = OperatorCatalog::standard();
    let config = query_to_config(&catalog, query);

    ui::success(&format!(
        "Decoded {} filter(s) and {} sort(s)",
        config.filter_conditions.len(),
        config.sort_conditions.len()
    ));

    if let Some(path) = schema_path {
        let schema = load_schema(path)?;
        for e in validate_config(&catalog, &schema, &config) {
            ui::warning(&format!("{}: {}", e.field, e.message));
        }
    }

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_config(&config),
        OutputFormat::Json => ui::json_output(&config),
    }

    Ok(())
}
