use std::path::Path;

use sift_core::SearchField;

use crate::errors::CliError;
use crate::files::require_schema;
use crate::ui::{self, OutputFormat};

/// Lists the fields declared by the schema.
pub fn list_fields(schema_path: Option<&Path>, output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Fields");
    let schema = require_schema(schema_path)?;

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_fields(&schema),
        OutputFormat::Json => {
            let fields: Vec<&SearchField> = schema.iter().collect();
            ui::json_output(&fields);
        }
    }

    Ok(())
}
