//! Name lookup tables over a manifest's referenceable collections.

use std::collections::HashMap;

use tracing::debug;

use drydock_artifacts::{LoadBalancer, Manifest, NetworkSecurityGroup, StorageAccount, Subnet};

use crate::error::{Collection, ProducerError, ProducerResult};

/// Name to entry tables for every collection a VM group can reference.
///
/// Subnets are flattened across all virtual networks because a VM group
/// references a subnet by name alone, without naming its parent network.
/// Tables borrow from the manifest and are only ever probed by key, never
/// iterated, so map ordering cannot leak into the output.
#[derive(Debug)]
pub struct ReferenceIndex<'a> {
    subnets: HashMap<&'a str, &'a Subnet>,
    load_balancers: HashMap<&'a str, &'a LoadBalancer>,
    security_groups: HashMap<&'a str, &'a NetworkSecurityGroup>,
    storage_accounts: HashMap<&'a str, &'a StorageAccount>,
}

impl<'a> ReferenceIndex<'a> {
    /// Scans the manifest and builds the lookup tables.
    ///
    /// Fails with [`ProducerError::DuplicateName`] on the first name that
    /// appears twice within one collection. Virtual network and VM group
    /// names are not referenced by anything, but must still be unique.
    pub fn build(manifest: &'a Manifest) -> ProducerResult<Self> {
        index_by_name(
            manifest.vnets.iter(),
            |vnet| vnet.name.as_str(),
            Collection::VirtualNetwork,
        )?;
        let subnets = index_by_name(
            manifest.vnets.iter().flat_map(|vnet| vnet.subnets.iter()),
            |subnet| subnet.name.as_str(),
            Collection::Subnet,
        )?;
        let load_balancers = index_by_name(
            manifest.load_balancers.iter(),
            |lb| lb.name.as_str(),
            Collection::LoadBalancer,
        )?;
        let security_groups = index_by_name(
            manifest.network_security_groups.iter(),
            |nsg| nsg.name.as_str(),
            Collection::NetworkSecurityGroup,
        )?;
        index_by_name(
            manifest.vm_groups.iter(),
            |group| group.name.as_str(),
            Collection::VmGroup,
        )?;
        let storage_accounts = index_by_name(
            manifest.storage_accounts.iter(),
            |account| account.name.as_str(),
            Collection::StorageAccount,
        )?;

        debug!(
            "Indexed {} subnets, {} load balancers, {} security groups, {} storage accounts",
            subnets.len(),
            load_balancers.len(),
            security_groups.len(),
            storage_accounts.len()
        );

        Ok(ReferenceIndex {
            subnets,
            load_balancers,
            security_groups,
            storage_accounts,
        })
    }

    /// Resolves a subnet reference by name.
    pub fn subnet(&self, name: &str) -> ProducerResult<&'a Subnet> {
        self.subnets
            .get(name)
            .copied()
            .ok_or_else(|| ProducerError::unresolved_reference(Collection::Subnet, name))
    }

    /// Resolves a load balancer reference by name.
    pub fn load_balancer(&self, name: &str) -> ProducerResult<&'a LoadBalancer> {
        self.load_balancers
            .get(name)
            .copied()
            .ok_or_else(|| ProducerError::unresolved_reference(Collection::LoadBalancer, name))
    }

    /// Resolves a network security group reference by name.
    pub fn security_group(&self, name: &str) -> ProducerResult<&'a NetworkSecurityGroup> {
        self.security_groups.get(name).copied().ok_or_else(|| {
            ProducerError::unresolved_reference(Collection::NetworkSecurityGroup, name)
        })
    }

    /// Resolves a storage account reference by name.
    pub fn storage_account(&self, name: &str) -> ProducerResult<&'a StorageAccount> {
        self.storage_accounts
            .get(name)
            .copied()
            .ok_or_else(|| ProducerError::unresolved_reference(Collection::StorageAccount, name))
    }
}

fn index_by_name<'a, T>(
    items: impl Iterator<Item = &'a T>,
    name_of: impl Fn(&'a T) -> &'a str,
    collection: Collection,
) -> ProducerResult<HashMap<&'a str, &'a T>> {
    let mut table = HashMap::new();
    for item in items {
        let name = name_of(item);
        if table.insert(name, item).is_some() {
            return Err(ProducerError::duplicate_name(collection, name));
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest(yaml: &str) -> Manifest {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_build_indexes_all_collections() {
        let manifest = manifest(
            r#"
schema: v0.1
iaas: azure
location: eastus
vnets:
  - name: vnet-1
    subnets:
      - name: snet-1
        range: 10.10.0.0/24
        gateway: 10.10.0.1
  - name: vnet-2
    subnets:
      - name: snet-2
        range: 10.10.1.0/24
        gateway: 10.10.1.1
load_balancers:
  - name: lb-1
    sku: standard
network_security_groups:
  - name: nsg-1
storage_accounts:
  - name: storage-account-1
    sku: standard
    location: eastus
"#,
        );

        let index = ReferenceIndex::build(&manifest).unwrap();
        assert_eq!(index.subnet("snet-2").unwrap().range, "10.10.1.0/24");
        assert_eq!(index.load_balancer("lb-1").unwrap().sku, "standard");
        assert_eq!(index.security_group("nsg-1").unwrap().name, "nsg-1");
        assert_eq!(
            index.storage_account("storage-account-1").unwrap().location,
            "eastus"
        );
    }

    #[test]
    fn test_build_rejects_subnet_duplicated_across_vnets() {
        let manifest = manifest(
            r#"
schema: v0.1
iaas: azure
location: eastus
vnets:
  - name: vnet-1
    subnets:
      - name: snet-1
        range: 10.10.0.0/24
        gateway: 10.10.0.1
  - name: vnet-2
    subnets:
      - name: snet-1
        range: 10.10.1.0/24
        gateway: 10.10.1.1
"#,
        );

        let err = ReferenceIndex::build(&manifest).unwrap_err();
        assert_eq!(
            err,
            ProducerError::duplicate_name(Collection::Subnet, "snet-1")
        );
    }

    #[test]
    fn test_build_rejects_duplicate_vm_group_names() {
        let manifest = manifest(
            r#"
schema: v0.1
iaas: azure
location: eastus
vm_groups:
  - name: web
    sku: Standard_DS1_v2
    count: 1
    type: VM
    os_profile:
      admin_name: ops
  - name: web
    sku: Standard_DS2_v2
    count: 1
    type: VM
    os_profile:
      admin_name: ops
"#,
        );

        let err = ReferenceIndex::build(&manifest).unwrap_err();
        assert_eq!(err, ProducerError::duplicate_name(Collection::VmGroup, "web"));
    }

    #[test]
    fn test_lookup_misses_report_the_collection_and_name() {
        let manifest = manifest(
            r#"
schema: v0.1
iaas: azure
location: eastus
"#,
        );

        let index = ReferenceIndex::build(&manifest).unwrap();
        assert_eq!(
            index.subnet("nonexistent-subnet").unwrap_err(),
            ProducerError::unresolved_reference(Collection::Subnet, "nonexistent-subnet")
        );
        assert_eq!(
            index.storage_account("missing").unwrap_err(),
            ProducerError::unresolved_reference(Collection::StorageAccount, "missing")
        );
    }
}
