//! Command line front end for Sift.

pub mod cli;
pub mod commands;
pub mod errors;
pub mod files;
pub mod ui;

use cli::{SiftCli, SiftCliCommand};
use errors::CliError;

/// Dispatches a parsed command line to its command.
pub fn run(cli: SiftCli) -> Result<(), CliError> {
    let schema = cli.schema.as_deref();

    match cli.command {
        SiftCliCommand::Operators { field_type } => {
            commands::list_operators(field_type, cli.format)
        }
        SiftCliCommand::Fields => commands::list_fields(schema, cli.format),
        SiftCliCommand::Decode { query } => commands::decode_query(schema, &query, cli.format),
        SiftCliCommand::Encode { config } => commands::encode_config(&config, cli.format),
        SiftCliCommand::Validate { query } => commands::validate_query(schema, &query, cli.format),
    }
}
