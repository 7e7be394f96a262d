//! The declarative infrastructure manifest.
//!
//! A [`Manifest`] is the input to deployment production: ordered collections
//! of virtual networks, load balancers, security groups, VM groups, storage
//! accounts and databases, cross-referencing each other by name. Collection
//! order is insertion order and is significant for deterministic output.

use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// Manifest schema version accepted by the current producer.
pub const SCHEMA_V0_1: &str = "v0.1";

/// Common Azure machine SKUs.
pub const VM_STANDARD_DS1_V2: &str = "Standard_DS1_v2";
pub const VM_STANDARD_DS2_V2: &str = "Standard_DS2_v2";

/// VM group kind for individually managed virtual machines.
pub const GROUP_KIND_VM: &str = "VM";
/// VM group kind for scale sets.
pub const GROUP_KIND_VMSS: &str = "VMSS";

/// Root manifest describing all infrastructure resources to provision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Schema version string, e.g. `v0.1`.
    pub schema: String,
    /// Target platform kind, e.g. `azure`.
    pub iaas: String,
    /// Deployment region, e.g. `eastus`.
    pub location: String,
    /// Application platform the infrastructure hosts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub vnets: Vec<VirtualNetwork>,
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
    #[serde(default)]
    pub network_security_groups: Vec<NetworkSecurityGroup>,
    #[serde(default)]
    pub vm_groups: Vec<VmGroup>,
    #[serde(default)]
    pub storage_accounts: Vec<StorageAccount>,
    #[serde(default)]
    pub databases: Vec<Database>,
}

/// Application platform declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    /// Platform kind, e.g. `php`.
    #[serde(rename = "type")]
    pub kind: String,
}

/// A virtual network and the subnets carved out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualNetwork {
    pub name: String,
    #[serde(default)]
    pub subnets: Vec<Subnet>,
}

/// Subnet of a virtual network. VM groups reference subnets by name alone,
/// so subnet names must be unique across all virtual networks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subnet {
    pub name: String,
    /// Address range in CIDR notation, e.g. `10.10.0.0/24`.
    pub range: String,
    pub gateway: String,
}

/// Load balancer fronting one or more VM groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalancer {
    pub name: String,
    /// SKU tier, e.g. `standard`.
    pub sku: String,
}

/// Named collection of network security rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSecurityGroup {
    pub name: String,
    #[serde(default)]
    pub network_security_rules: Vec<NetworkSecurityRule>,
}

/// A single security rule. Rules with a lower priority number are evaluated
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSecurityRule {
    pub name: String,
    pub priority: u16,
    pub direction: RuleDirection,
    pub access: RuleAccess,
    /// Transport protocol, e.g. `Tcp`, `Udp` or `*`.
    pub protocol: String,
    pub source_port_range: String,
    pub destination_port_range: String,
    pub source_address_prefix: String,
    pub destination_address_prefix: String,
}

/// Traffic direction a security rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuleDirection {
    #[default]
    Inbound,
    Outbound,
}

/// Whether a matched security rule admits or drops traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RuleAccess {
    #[default]
    Allow,
    Deny,
}

/// Storage account backing Azure file shares and disks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageAccount {
    pub name: String,
    pub sku: String,
    pub location: String,
}

/// Managed database instance, created fresh or migrated from an origin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub engine: DatabaseEngine,
    pub engine_version: String,
    pub cores: u32,
    /// Provisioned storage in GB.
    #[serde(rename = "storage")]
    pub storage_gb: u32,
    pub backup_retention_days: u32,
    pub username: String,
    pub password: String,
    /// Present only when the database is migrated rather than created fresh.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migration_information: Option<MigrationInformation>,
}

/// Database engine kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseEngine {
    #[default]
    Mysql,
}

impl DatabaseEngine {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatabaseEngine::Mysql => "mysql",
        }
    }
}

impl std::fmt::Display for DatabaseEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Source connection details for a database migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationInformation {
    pub origin_host: String,
    pub origin_database: String,
    pub origin_username: String,
    pub origin_password: String,
}

/// A template for `count` near-identical machine instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VmGroup {
    pub name: String,
    /// Free-form metadata, emitted in declaration order.
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub meta: Metadata,
    /// Machine SKU applied to every instance, e.g. `Standard_DS1_v2`.
    pub sku: String,
    /// Number of host records this group expands to.
    pub count: u32,
    /// Group kind, `VM` or `VMSS`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<VmStorage>,
    pub os_profile: OsProfile,
    #[serde(default)]
    pub network_infos: Vec<VmNetworkInfo>,
    /// Capability bindings applied to every expanded host.
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Capability binding, e.g. `builtin/jumpbox`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
}

/// Admin identity configured on each instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsProfile {
    pub admin_name: String,
}

/// Storage layout shared by all instances of a VM group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmStorage {
    /// OS image to boot from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_disk: Option<OsDisk>,
    #[serde(default)]
    pub data_disks: Vec<DataDisk>,
    #[serde(default)]
    pub azure_files: Vec<AzureFile>,
}

/// Marketplace image reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub offer: String,
    pub publisher: String,
    pub sku: String,
    pub version: String,
}

/// OS disk settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsDisk {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<u32>,
}

/// Attached data disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataDisk {
    pub disk_size_gb: u32,
}

/// Azure file share mounted on every instance, referencing its backing
/// storage account by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AzureFile {
    pub storage_account: String,
    pub name: String,
    pub mount_point: String,
}

/// One NIC declaration for a VM group. A group may declare several; all of
/// them attach to every expanded instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmNetworkInfo {
    /// Subnet reference by name. Empty means no subnet binding.
    #[serde(default)]
    pub subnet_name: String,
    /// Load balancer reference by name. Empty means no load balancer binding.
    #[serde(default)]
    pub load_balancer_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_security_group_name: Option<String>,
    #[serde(default)]
    pub public_ip: PublicIpMode,
    /// Pre-known network assignments, one per instance index.
    #[serde(default)]
    pub outputs: Vec<VmNetworkOutput>,
}

/// Public IP allocation mode for a NIC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicIpMode {
    /// No public IP.
    #[default]
    #[serde(alias = "")]
    None,
    Dynamic,
    Static,
}

/// Network assignment known ahead of provisioning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmNetworkOutput {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub public_ip: String,
    #[serde(default)]
    pub host: String,
}
