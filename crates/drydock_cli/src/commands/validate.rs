//! Validate command - Check a manifest without writing artifacts.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use drydock_artifacts::ManifestReader;
use drydock_producer::DeploymentProducer;

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the manifest file (.yml, .yaml or .json)
    #[arg(short, long)]
    manifest: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating manifest: {}", args.manifest.display());

    let manifest = ManifestReader::read_file(&args.manifest)?;

    println!("📋 Validating manifest...");
    let (deployment, hosts) = DeploymentProducer::produce(&manifest)?;

    println!("✅ Manifest is valid");
    println!(
        "   {} top-level resources, {} VM groups, {} hosts after expansion",
        deployment.resource_count(),
        manifest.vm_groups.len(),
        hosts.len()
    );

    Ok(())
}
