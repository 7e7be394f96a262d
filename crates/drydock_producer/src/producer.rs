//! Deployment production entry point.

use tracing::info;

use drydock_artifacts::{Deployment, Host, Manifest};

use crate::assemble::DeploymentAssembler;
use crate::error::ProducerResult;
use crate::expand::HostExpander;
use crate::index::ReferenceIndex;

/// Compiles a manifest into a deployment descriptor and a host inventory.
///
/// Stateless and side-effect-free: identical manifests always produce
/// deep-equal outputs, and calls share nothing.
pub struct DeploymentProducer;

impl DeploymentProducer {
    /// Produces the deployment descriptor and one host per VM group
    /// instance.
    ///
    /// Hosts follow manifest declaration order: all hosts of an earlier
    /// group precede those of a later one, indices ascending within each
    /// group. Fails on the first duplicate name, unresolved reference or
    /// rejected manifest-level field; an error means no output at all.
    pub fn produce(manifest: &Manifest) -> ProducerResult<(Deployment, Vec<Host>)> {
        let index = ReferenceIndex::build(manifest)?;
        let deployment = DeploymentAssembler::assemble(manifest)?;

        let mut hosts = Vec::new();
        for group in &manifest.vm_groups {
            hosts.extend(HostExpander::expand(&index, group)?);
        }

        info!(
            "Produced deployment with {} top-level resources and {} hosts",
            deployment.resource_count(),
            hosts.len()
        );
        Ok((deployment, hosts))
    }
}
