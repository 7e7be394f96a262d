//! Drydock CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Manifest validation failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Produce(args) => commands::produce::execute(args),
        Commands::Validate(args) => commands::validate::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let mut filter = EnvFilter::from_default_env().add_directive("warn".parse().unwrap());
    for target in ["drydock_cli", "drydock_producer", "drydock_artifacts"] {
        filter = filter.add_directive(format!("{}={}", target, level).parse().unwrap());
    }

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate")
        || msg.contains("unresolved")
        || msg.contains("unsupported")
        || msg.contains("missing")
    {
        ExitCodes::VALIDATION_FAILURE
    } else if msg.contains("not found") || msg.contains("format") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drydock_artifacts::ArtifactsError;
    use drydock_producer::{Collection, ProducerError};

    #[test]
    fn test_producer_errors_map_to_validation_failure() {
        for err in [
            ProducerError::duplicate_name(Collection::Subnet, "snet-1"),
            ProducerError::unresolved_reference(Collection::LoadBalancer, "lb-x"),
            ProducerError::UnsupportedSchema("v9".to_string()),
            ProducerError::MissingField("iaas"),
        ] {
            let err = anyhow::Error::new(err);
            assert_eq!(categorize_error(&err), ExitCodes::VALIDATION_FAILURE);
        }
    }

    #[test]
    fn test_loader_errors_map_to_invalid_args() {
        let err = anyhow::Error::new(ArtifactsError::NotFound("missing.yml".into()));
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);

        let err = anyhow::Error::new(ArtifactsError::UnknownFormat("manifest.txt".into()));
        assert_eq!(categorize_error(&err), ExitCodes::INVALID_ARGS);
    }

    #[test]
    fn test_other_errors_map_to_general_error() {
        let err = anyhow::anyhow!("something else went wrong");
        assert_eq!(categorize_error(&err), ExitCodes::GENERAL_ERROR);
    }
}
