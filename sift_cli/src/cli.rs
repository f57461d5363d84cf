use clap::{Parser, Subcommand};
use std::path::PathBuf;

use sift_core::FieldType;

use super::ui::OutputFormat;

/// Defines the top-level interface for the Sift CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "sift")]
#[command(version, about = "Sift CLI: Build, inspect and validate search query parameters.")]
pub struct SiftCli {
    /// Path to a JSON field schema.
    #[arg(short, long, global = true, env = "SIFT_SCHEMA")]
    pub schema: Option<PathBuf>,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: SiftCliCommand,
}

/// Defines the available subcommands of the Sift CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum SiftCliCommand {
    /// List the operators of the standard catalog.
    Operators {
        /// Only operators usable on this field type (string, number, date, boolean, enum)
        #[arg(short = 't', long = "type")]
        field_type: Option<FieldType>,
    },
    /// List the fields of the schema.
    Fields,
    /// Decode a query string into a search configuration.
    Decode {
        /// Query string, with or without the leading '?'
        query: String,
    },
    /// Encode a JSON search configuration into a query string.
    Encode {
        /// Path to a JSON search configuration.
        config: PathBuf,
    },
    /// Decode a query string and validate it against the schema.
    Validate {
        /// Query string, with or without the leading '?'
        query: String,
    },
}
