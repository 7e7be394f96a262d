//! CLI command definitions.
//!
//! This module defines the command structure for the Drydock CLI. Each
//! subcommand maps to one pass over a manifest file.

use clap::{Parser, Subcommand};

pub mod produce;
pub mod validate;

/// Drydock - declarative infrastructure manifest compiler
#[derive(Parser)]
#[command(name = "drydock")]
#[command(version, about = "Drydock - declarative infrastructure manifest compiler")]
#[command(long_about = r#"
Drydock compiles a declarative infrastructure manifest into
provisioning-ready artifacts: a deployment descriptor of top-level
resources and a host inventory with one record per VM group instance.

WORKFLOWS:
  produce   → Compile a manifest into deployment and host artifacts
  validate  → Check a manifest without writing any artifacts

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Manifest validation failure

For more information, visit: https://github.com/drydock-io/drydock
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compile a manifest into deployment and host artifacts
    Produce(produce::ProduceArgs),

    /// Validate a manifest without writing artifacts
    Validate(validate::ValidateArgs),
}
