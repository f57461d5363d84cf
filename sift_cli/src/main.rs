use clap::Parser;
use std::process::ExitCode;

use sift_cli::cli::SiftCli;

fn main() -> ExitCode {
    let cli = SiftCli::parse();
    initialize_logging(cli.verbose);

    match sift_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Command failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs warnings by default and debug output with `--verbose`. `RUST_LOG` overrides both.
fn initialize_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
