use std::path::Path;

use sift_core::OperatorCatalog;
use sift_wire::{encode, to_query_string};

use crate::errors::CliError;
use crate::files::load_config;
use crate::ui::{self, OutputFormat};

/// Encodes a JSON configuration file into query parameters.
pub fn encode_config(config_path: &Path, output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Encoding search configuration");
    let config = load_config(config_path)?;
    let params = encode(&OperatorCatalog::standard(), &config);

    let skipped = config.filter_conditions.len() - config.enabled_conditions().count();
    if skipped > 0 {
        ui::info(&format!("Left out {} disabled condition(s)", skipped));
    }
    ui::success(&format!("Encoded {} parameter(s)", params.len()));

    match output_format {
        OutputFormat::Pretty => ui::raw_output(&to_query_string(&params)),
        OutputFormat::Json => ui::json_output(&params),
    }

    Ok(())
}
