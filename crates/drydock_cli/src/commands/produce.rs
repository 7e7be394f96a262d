//! Produce command - Compile a manifest into deployment artifacts.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use drydock_artifacts::{ArtifactFormat, ArtifactWriter, ManifestReader};
use drydock_producer::DeploymentProducer;

#[derive(Args)]
pub struct ProduceArgs {
    /// Path to the manifest file (.yml, .yaml or .json)
    #[arg(short, long)]
    manifest: PathBuf,

    /// Directory the artifacts are written to
    #[arg(short, long, default_value = "artifacts")]
    output_dir: PathBuf,

    /// Artifact output format (yaml or json)
    #[arg(short, long, default_value = "yaml")]
    format: String,
}

pub fn execute(args: ProduceArgs) -> Result<()> {
    let format = ArtifactFormat::from_str(&args.format)
        .ok_or_else(|| anyhow::anyhow!("Unknown artifact format: {}", args.format))?;

    info!("Producing deployment from: {}", args.manifest.display());

    let manifest = ManifestReader::read_file(&args.manifest)?;
    let (deployment, hosts) = DeploymentProducer::produce(&manifest)?;

    let deployment_path = ArtifactWriter::write_deployment(&args.output_dir, &deployment, format)?;
    let hosts_path = ArtifactWriter::write_hosts(&args.output_dir, &hosts, format)?;

    println!(
        "✅ Produced {} top-level resources and {} hosts",
        deployment.resource_count(),
        hosts.len()
    );
    println!("   📦 Deployment: {}", deployment_path.display());
    println!("   📦 Hosts:      {}", hosts_path.display());

    Ok(())
}
