//! Integration tests for the artifact model and its I/O collaborators.

use std::fs;

use tempfile::tempdir;

use drydock_artifacts::{
    ArtifactFormat, ArtifactWriter, Deployment, Host, HostAzureFile, HostNetwork, HostStorage,
    Image, LoadBalancer, ManifestReader, OsDisk, OsProfile, PublicIpMode, Role, StorageAccount,
    Subnet, VmNetworkOutput,
};

const FULL_MANIFEST: &str = r#"
schema: v0.1
iaas: azure
location: eastus
platform:
  type: php
vnets:
  - name: vnet-1
    subnets:
      - name: snet-1
        range: 10.10.0.0/24
        gateway: 10.10.0.1
load_balancers:
  - name: lb-1
    sku: standard
network_security_groups:
  - name: nsg-1
    network_security_rules:
      - name: allow-ssh
        priority: 100
        direction: Inbound
        access: Allow
        protocol: Tcp
        source_port_range: '*'
        destination_port_range: '22'
        source_address_prefix: '*'
        destination_address_prefix: '*'
storage_accounts:
  - name: storage-account-1
    sku: standard
    location: eastus
databases:
  - engine: mysql
    engine_version: '5.7'
    cores: 2
    storage: 5
    backup_retention_days: 35
    username: dbuser
    password: abcd1234!
vm_groups:
  - name: jumpbox
    meta:
      group_type: jumpbox
    sku: Standard_DS1_v2
    count: 1
    type: VM
    storage:
      image:
        offer: UbuntuServer
        publisher: Canonical
        sku: 18.04-LTS
        version: latest
      os_disk: {}
      data_disks:
        - disk_size_gb: 10
      azure_files:
        - storage_account: storage-account-1
          name: share-1
          mount_point: /mnt/share-1
    os_profile:
      admin_name: drydock
    network_infos:
      - subnet_name: snet-1
        load_balancer_name: lb-1
        network_security_group_name: nsg-1
        public_ip: dynamic
        outputs:
          - ip: 172.16.8.4
            public_ip: 13.75.71.162
            host: jumpbox.eastus.cloudapp.azure.com
    roles:
      - name: builtin/jumpbox
"#;

/// Parsing a complete manifest and serializing it back yields a deep-equal
/// value.
#[test]
fn test_manifest_round_trip() {
    let manifest = ManifestReader::from_yaml(FULL_MANIFEST).unwrap();

    let rendered = serde_yaml::to_string(&manifest).unwrap();
    let reparsed = ManifestReader::from_yaml(&rendered).unwrap();
    assert_eq!(manifest, reparsed);

    let json = serde_json::to_string(&manifest).unwrap();
    let from_json = ManifestReader::from_json(&json).unwrap();
    assert_eq!(manifest, from_json);
}

/// Metadata keeps declaration order across a full manifest round trip.
#[test]
fn test_manifest_round_trip_keeps_meta_order() {
    let yaml = r#"
schema: v0.1
iaas: azure
location: eastus
vm_groups:
  - name: web
    meta:
      zebra: first
      alpha: second
      middle: third
    sku: Standard_DS1_v2
    count: 1
    type: VM
    os_profile:
      admin_name: drydock
"#;
    let manifest = ManifestReader::from_yaml(yaml).unwrap();
    let rendered = serde_yaml::to_string(&manifest).unwrap();
    let reparsed = ManifestReader::from_yaml(&rendered).unwrap();

    let keys: Vec<_> = reparsed.vm_groups[0].meta.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["zebra", "alpha", "middle"]);
}

fn sample_host() -> Host {
    Host {
        group_name: "jumpbox".to_string(),
        index: 0,
        sku: "Standard_DS1_v2".to_string(),
        os_profile: OsProfile {
            admin_name: "drydock".to_string(),
        },
        roles: vec![Role {
            name: "builtin/jumpbox".to_string(),
        }],
        storage: Some(HostStorage {
            image: Some(Image {
                offer: "UbuntuServer".to_string(),
                publisher: "Canonical".to_string(),
                sku: "18.04-LTS".to_string(),
                version: "latest".to_string(),
            }),
            os_disk: Some(OsDisk { disk_size_gb: None }),
            data_disks: vec![],
            azure_files: vec![HostAzureFile {
                storage_account: StorageAccount {
                    name: "storage-account-1".to_string(),
                    sku: "standard".to_string(),
                    location: "eastus".to_string(),
                },
                name: "share-1".to_string(),
                mount_point: "/mnt/share-1".to_string(),
            }],
        }),
        networks: vec![HostNetwork {
            subnet: Some(Subnet {
                name: "snet-1".to_string(),
                range: "10.10.0.0/24".to_string(),
                gateway: "10.10.0.1".to_string(),
            }),
            load_balancer: Some(LoadBalancer {
                name: "lb-1".to_string(),
                sku: "standard".to_string(),
            }),
            network_security_group: None,
            public_ip: PublicIpMode::Dynamic,
            output: Some(VmNetworkOutput {
                ip: "172.16.8.4".to_string(),
                public_ip: "13.75.71.162".to_string(),
                host: "jumpbox.eastus.cloudapp.azure.com".to_string(),
            }),
        }],
    }
}

/// Emitted artifacts parse back deep-equal in both formats.
#[test]
fn test_artifact_round_trip_is_lossless() {
    let hosts = vec![sample_host()];
    let manifest = ManifestReader::from_yaml(FULL_MANIFEST).unwrap();
    let deployment = Deployment {
        iaas: manifest.iaas.clone(),
        location: manifest.location.clone(),
        vnets: manifest.vnets.clone(),
        load_balancers: manifest.load_balancers.clone(),
        network_security_groups: manifest.network_security_groups.clone(),
        storage_accounts: manifest.storage_accounts.clone(),
        databases: manifest.databases.clone(),
    };

    for format in [ArtifactFormat::Yaml, ArtifactFormat::Json] {
        let rendered = ArtifactWriter::to_string(&deployment, format).unwrap();
        let reparsed: Deployment = match format {
            ArtifactFormat::Yaml => serde_yaml::from_str(&rendered).unwrap(),
            ArtifactFormat::Json => serde_json::from_str(&rendered).unwrap(),
        };
        assert_eq!(deployment, reparsed, "deployment round trip ({})", format);

        let rendered = ArtifactWriter::to_string(&hosts, format).unwrap();
        let reparsed: Vec<Host> = match format {
            ArtifactFormat::Yaml => serde_yaml::from_str(&rendered).unwrap(),
            ArtifactFormat::Json => serde_json::from_str(&rendered).unwrap(),
        };
        assert_eq!(hosts, reparsed, "host round trip ({})", format);
    }
}

/// Written artifact files land under the requested directory with the
/// format's extension.
#[test]
fn test_write_artifacts_to_directory() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("artifacts");

    let deployment = Deployment {
        iaas: "azure".to_string(),
        location: "eastus".to_string(),
        ..Default::default()
    };
    let hosts = vec![sample_host()];

    let dep_path =
        ArtifactWriter::write_deployment(&out, &deployment, ArtifactFormat::Yaml).unwrap();
    let hosts_path = ArtifactWriter::write_hosts(&out, &hosts, ArtifactFormat::Yaml).unwrap();

    assert_eq!(dep_path, out.join("deployment.yml"));
    assert_eq!(hosts_path, out.join("hosts.yml"));

    let reparsed: Vec<Host> =
        serde_yaml::from_str(&fs::read_to_string(&hosts_path).unwrap()).unwrap();
    assert_eq!(reparsed[0].name(), "jumpbox-0");
}
