//! Deployment descriptor assembly.

use tracing::debug;

use drydock_artifacts::{Deployment, Manifest, SCHEMA_V0_1};

use crate::error::{ProducerError, ProducerResult};

/// Schema versions the current producer understands.
const RECOGNIZED_SCHEMAS: &[&str] = &[SCHEMA_V0_1];

/// Re-expresses a manifest's top-level collections as a deployment
/// descriptor.
///
/// Carries collections over in declaration order. Cross-collection name
/// resolution belongs to host expansion, not here; this step only checks
/// manifest-level fields.
pub struct DeploymentAssembler;

impl DeploymentAssembler {
    /// Validates the schema version, platform and IaaS declarations, then
    /// assembles the descriptor.
    pub fn assemble(manifest: &Manifest) -> ProducerResult<Deployment> {
        if !RECOGNIZED_SCHEMAS.contains(&manifest.schema.as_str()) {
            return Err(ProducerError::UnsupportedSchema(manifest.schema.clone()));
        }
        if manifest.iaas.is_empty() {
            return Err(ProducerError::MissingField("iaas"));
        }
        match &manifest.platform {
            Some(platform) if !platform.kind.is_empty() => {}
            _ => return Err(ProducerError::MissingField("platform.type")),
        }

        let deployment = Deployment {
            iaas: manifest.iaas.clone(),
            location: manifest.location.clone(),
            vnets: manifest.vnets.clone(),
            load_balancers: manifest.load_balancers.clone(),
            network_security_groups: manifest.network_security_groups.clone(),
            storage_accounts: manifest.storage_accounts.clone(),
            databases: manifest.databases.clone(),
        };
        debug!(
            "Assembled deployment descriptor with {} top-level resources",
            deployment.resource_count()
        );
        Ok(deployment)
    }
}
