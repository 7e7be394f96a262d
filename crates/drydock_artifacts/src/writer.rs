//! Artifact emission.
//!
//! Serializes produced deployment descriptors and host inventories for the
//! persistence layer. Serialization is lossless: parsing an emitted artifact
//! yields a value deep-equal to the original.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::deployment::Deployment;
use crate::error::ArtifactsResult;
use crate::host::Host;

/// Emission format for produced artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArtifactFormat {
    #[default]
    Yaml,
    Json,
}

impl ArtifactFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactFormat::Yaml => "yaml",
            ArtifactFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Some(ArtifactFormat::Yaml),
            "json" => Some(ArtifactFormat::Json),
            _ => None,
        }
    }

    /// File extension used when writing artifacts of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Yaml => "yml",
            ArtifactFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Writer for produced artifacts.
pub struct ArtifactWriter;

impl ArtifactWriter {
    /// File stem of the deployment descriptor artifact.
    pub const DEPLOYMENT_STEM: &'static str = "deployment";
    /// File stem of the host inventory artifact.
    pub const HOSTS_STEM: &'static str = "hosts";

    /// Serialize any artifact value to a string in the given format.
    pub fn to_string<T: Serialize>(value: &T, format: ArtifactFormat) -> ArtifactsResult<String> {
        let rendered = match format {
            ArtifactFormat::Yaml => serde_yaml::to_string(value)?,
            ArtifactFormat::Json => serde_json::to_string_pretty(value)?,
        };
        Ok(rendered)
    }

    /// Write the deployment descriptor into `dir`, returning the written path.
    pub fn write_deployment(
        dir: impl AsRef<Path>,
        deployment: &Deployment,
        format: ArtifactFormat,
    ) -> ArtifactsResult<PathBuf> {
        Self::write_artifact(dir.as_ref(), Self::DEPLOYMENT_STEM, deployment, format)
    }

    /// Write the host inventory into `dir`, returning the written path.
    pub fn write_hosts(
        dir: impl AsRef<Path>,
        hosts: &[Host],
        format: ArtifactFormat,
    ) -> ArtifactsResult<PathBuf> {
        Self::write_artifact(dir.as_ref(), Self::HOSTS_STEM, &hosts, format)
    }

    fn write_artifact<T: Serialize>(
        dir: &Path,
        stem: &str,
        value: &T,
        format: ArtifactFormat,
    ) -> ArtifactsResult<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.{}", stem, format.extension()));
        debug!("Writing artifact to {:?}", path);

        let content = Self::to_string(value, format)?;
        fs::write(&path, content)?;
        Ok(path)
    }
}
