//! VM group expansion into per-instance host records.

use tracing::debug;

use drydock_artifacts::{Host, HostAzureFile, HostNetwork, HostStorage, VmGroup};

use crate::error::ProducerResult;
use crate::index::ReferenceIndex;

/// Expands one VM group into `count` host records.
///
/// References are resolved once per group; instances share the resolved
/// bindings and differ only in index and pre-known network output.
pub struct HostExpander;

impl HostExpander {
    /// Emits `group.count` hosts in ascending index order.
    ///
    /// A count of zero yields no hosts. When a NIC declares fewer pre-known
    /// outputs than the group has instances, instances beyond the last
    /// output are emitted without one.
    pub fn expand(index: &ReferenceIndex<'_>, group: &VmGroup) -> ProducerResult<Vec<Host>> {
        let networks = Self::resolve_networks(index, group)?;
        let storage = Self::resolve_storage(index, group)?;

        let mut hosts = Vec::with_capacity(group.count as usize);
        for i in 0..group.count {
            let mut host_networks = networks.clone();
            for (network, info) in host_networks.iter_mut().zip(&group.network_infos) {
                network.output = info.outputs.get(i as usize).cloned();
            }
            hosts.push(Host {
                group_name: group.name.clone(),
                index: i,
                sku: group.sku.clone(),
                os_profile: group.os_profile.clone(),
                roles: group.roles.clone(),
                storage: storage.clone(),
                networks: host_networks,
            });
        }

        debug!("Expanded VM group '{}' into {} hosts", group.name, hosts.len());
        Ok(hosts)
    }

    /// Resolves every NIC declaration of the group. Empty subnet and load
    /// balancer names mean no binding; a missing security group name is a
    /// no-op rather than an error.
    fn resolve_networks(
        index: &ReferenceIndex<'_>,
        group: &VmGroup,
    ) -> ProducerResult<Vec<HostNetwork>> {
        let mut networks = Vec::with_capacity(group.network_infos.len());
        for info in &group.network_infos {
            let subnet = match info.subnet_name.as_str() {
                "" => None,
                name => Some(index.subnet(name)?.clone()),
            };
            let load_balancer = match info.load_balancer_name.as_str() {
                "" => None,
                name => Some(index.load_balancer(name)?.clone()),
            };
            let network_security_group = match info.network_security_group_name.as_deref() {
                None | Some("") => None,
                Some(name) => Some(index.security_group(name)?.clone()),
            };
            networks.push(HostNetwork {
                subnet,
                load_balancer,
                network_security_group,
                public_ip: info.public_ip,
                output: None,
            });
        }
        Ok(networks)
    }

    /// Resolves the group's storage layout, turning azure file references
    /// into their backing storage accounts.
    fn resolve_storage(
        index: &ReferenceIndex<'_>,
        group: &VmGroup,
    ) -> ProducerResult<Option<HostStorage>> {
        let storage = match &group.storage {
            Some(storage) => storage,
            None => return Ok(None),
        };

        let mut azure_files = Vec::with_capacity(storage.azure_files.len());
        for file in &storage.azure_files {
            let account = index.storage_account(&file.storage_account)?;
            azure_files.push(HostAzureFile {
                storage_account: account.clone(),
                name: file.name.clone(),
                mount_point: file.mount_point.clone(),
            });
        }

        Ok(Some(HostStorage {
            image: storage.image.clone(),
            os_disk: storage.os_disk.clone(),
            data_disks: storage.data_disks.clone(),
            azure_files,
        }))
    }
}
