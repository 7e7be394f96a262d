//! # drydock_producer
//!
//! Compilation of a declarative infrastructure manifest into
//! provisioning-ready artifacts for Drydock.
//!
//! One call turns an in-memory manifest into a deployment descriptor of
//! top-level resources plus a host inventory with one record per VM group
//! instance. The crate performs no I/O; loading manifests and persisting
//! artifacts belong to its callers.
//!
//! ## Features
//!
//! - **Reference Index**: name lookup tables with duplicate detection
//! - **Host Expansion**: per-instance fan-out of VM groups with resolved
//!   network and storage bindings
//! - **Deployment Assembly**: schema and manifest-level validation plus
//!   structural carry-over of top-level collections
//! - **Determinism**: identical manifests produce deep-equal outputs
//!
//! ## Example
//!
//! ```rust
//! use drydock_artifacts::ManifestReader;
//! use drydock_producer::DeploymentProducer;
//!
//! let manifest = ManifestReader::from_yaml(
//!     r#"
//! schema: v0.1
//! iaas: azure
//! location: eastus
//! platform:
//!   type: php
//! vm_groups:
//!   - name: web
//!     sku: Standard_DS1_v2
//!     count: 2
//!     type: VM
//!     os_profile:
//!       admin_name: ops
//! "#,
//! )
//! .unwrap();
//!
//! let (deployment, hosts) = DeploymentProducer::produce(&manifest).unwrap();
//! assert_eq!(deployment.iaas, "azure");
//! assert_eq!(hosts.len(), 2);
//! assert_eq!(hosts[0].name(), "web-0");
//! ```

pub mod assemble;
pub mod error;
pub mod expand;
pub mod index;
pub mod producer;

pub use assemble::DeploymentAssembler;
pub use error::{Collection, ProducerError, ProducerResult};
pub use expand::HostExpander;
pub use index::ReferenceIndex;
pub use producer::DeploymentProducer;
