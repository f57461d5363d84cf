use std::fmt;

/// Failures surfaced by CLI commands. Details are reported through the UI
/// before one of these is returned.
#[derive(Debug, PartialEq)]
pub enum CliError {
    FileError,
    SchemaError,
    MissingSchema,
    InputError,
    ValidationError(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileError => write!(f, "Could not read input file"),
            CliError::SchemaError => write!(f, "Field schema is invalid"),
            CliError::MissingSchema => {
                write!(f, "No field schema given (use --schema or SIFT_SCHEMA)")
            }
            CliError::InputError => write!(f, "Input could not be parsed"),
            CliError::ValidationError(count) => {
                write!(f, "Search configuration has {} error(s)", count)
            }
        }
    }
}

impl std::error::Error for CliError {}
