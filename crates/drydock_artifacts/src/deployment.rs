//! The provisioning-ready deployment descriptor.

use serde::{Deserialize, Serialize};

use crate::manifest::{
    Database, LoadBalancer, NetworkSecurityGroup, StorageAccount, VirtualNetwork,
};

/// Top-level infrastructure topology, re-expressed from a validated manifest.
///
/// Carries everything a provisioner needs that is not per-host: networks,
/// load balancers, security groups, storage accounts and databases, in
/// manifest declaration order. Name references inside the source manifest
/// have already been validated when a value of this type exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    /// Target platform kind, e.g. `azure`.
    pub iaas: String,
    /// Deployment region, e.g. `eastus`.
    pub location: String,
    #[serde(default)]
    pub vnets: Vec<VirtualNetwork>,
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
    #[serde(default)]
    pub network_security_groups: Vec<NetworkSecurityGroup>,
    #[serde(default)]
    pub storage_accounts: Vec<StorageAccount>,
    #[serde(default)]
    pub databases: Vec<Database>,
}

impl Deployment {
    /// Total number of top-level resources in the descriptor.
    pub fn resource_count(&self) -> usize {
        self.vnets.len()
            + self.load_balancers.len()
            + self.network_security_groups.len()
            + self.storage_accounts.len()
            + self.databases.len()
    }
}
