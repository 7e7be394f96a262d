//! Expanded host records.
//!
//! One [`Host`] is produced per VM group instance. Unlike the manifest, a
//! host carries resolved resource objects rather than name references, so a
//! downstream provisioner never has to search the manifest again.

use serde::{Deserialize, Serialize};

use crate::manifest::{
    DataDisk, Image, LoadBalancer, NetworkSecurityGroup, OsDisk, OsProfile, PublicIpMode, Role,
    StorageAccount, Subnet, VmNetworkOutput,
};

/// One concrete machine instance expanded from a VM group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Host {
    /// Name of the VM group this host was expanded from.
    pub group_name: String,
    /// Instance index within the group, `0..count`.
    pub index: u32,
    /// Machine SKU, e.g. `Standard_DS1_v2`.
    pub sku: String,
    pub os_profile: OsProfile,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<HostStorage>,
    #[serde(default)]
    pub networks: Vec<HostNetwork>,
}

impl Host {
    /// Addressable host name, `<group>-<index>`.
    pub fn name(&self) -> String {
        format!("{}-{}", self.group_name, self.index)
    }
}

/// Storage layout of a host with the file-share backing accounts resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostStorage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_disk: Option<OsDisk>,
    #[serde(default)]
    pub data_disks: Vec<DataDisk>,
    #[serde(default)]
    pub azure_files: Vec<HostAzureFile>,
}

/// Azure file share with its backing storage account resolved to the full
/// object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostAzureFile {
    pub storage_account: StorageAccount,
    pub name: String,
    pub mount_point: String,
}

/// One resolved NIC binding on a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostNetwork {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Subnet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer: Option<LoadBalancer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_security_group: Option<NetworkSecurityGroup>,
    #[serde(default)]
    pub public_ip: PublicIpMode,
    /// Pre-known network assignment for this instance, if the manifest
    /// declared one at this index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<VmNetworkOutput>,
}
