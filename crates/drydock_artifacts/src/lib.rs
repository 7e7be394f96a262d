//! # drydock_artifacts
//!
//! Manifest and deployment artifact model for Drydock.
//!
//! This crate defines the declarative infrastructure manifest that feeds the
//! producer, the two artifacts the producer returns (deployment descriptor
//! and host inventory), and the I/O collaborators that load manifests and
//! persist artifacts. The producer core itself never touches a file; it
//! works on the in-memory values defined here.
//!
//! ## Features
//!
//! - **Manifest model**: virtual networks, load balancers, security groups,
//!   VM groups, storage accounts and databases, with ordered collections
//! - **Output model**: provisioning-ready `Deployment` and per-instance
//!   `Host` records with resolved resource objects
//! - **Ordered metadata**: insertion-ordered key/value pairs on VM groups
//! - **Loading and emission**: YAML/JSON manifest reading and lossless
//!   artifact writing
//!
//! ## Example
//!
//! ```rust
//! use drydock_artifacts::reader::ManifestReader;
//!
//! let manifest = ManifestReader::from_yaml(
//!     "schema: v0.1\niaas: azure\nlocation: eastus\n",
//! ).unwrap();
//! assert_eq!(manifest.iaas, "azure");
//! ```

pub mod deployment;
pub mod error;
pub mod host;
pub mod manifest;
pub mod metadata;
pub mod reader;
pub mod writer;

pub use deployment::Deployment;
pub use error::{ArtifactsError, ArtifactsResult};
pub use host::{Host, HostAzureFile, HostNetwork, HostStorage};
pub use manifest::*;
pub use metadata::Metadata;
pub use reader::ManifestReader;
pub use writer::{ArtifactFormat, ArtifactWriter};
