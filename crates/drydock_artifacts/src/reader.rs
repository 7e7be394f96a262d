//! Manifest loading.
//!
//! Loading is an external collaborator of the producer core: the core only
//! ever sees an in-memory [`Manifest`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ArtifactsError, ArtifactsResult};
use crate::manifest::Manifest;

/// Loader for manifest files.
pub struct ManifestReader;

impl ManifestReader {
    /// Parse a manifest from YAML.
    pub fn from_yaml(content: &str) -> ArtifactsResult<Manifest> {
        let manifest: Manifest = serde_yaml::from_str(content)?;
        Ok(manifest)
    }

    /// Parse a manifest from JSON.
    pub fn from_json(content: &str) -> ArtifactsResult<Manifest> {
        let manifest: Manifest = serde_json::from_str(content)?;
        Ok(manifest)
    }

    /// Read a manifest file, choosing the parser by file extension.
    pub fn read_file(path: impl AsRef<Path>) -> ArtifactsResult<Manifest> {
        let path = path.as_ref();
        debug!("Reading manifest from {:?}", path);

        if !path.exists() {
            return Err(ArtifactsError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yml") | Some("yaml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => Err(ArtifactsError::UnknownFormat(path.to_path_buf())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const MINIMAL: &str = "schema: v0.1\niaas: azure\nlocation: eastus\n";

    #[test]
    fn test_from_yaml() {
        let manifest = ManifestReader::from_yaml(MINIMAL).unwrap();
        assert_eq!(manifest.iaas, "azure");
        assert!(manifest.vm_groups.is_empty());
    }

    #[test]
    fn test_from_json() {
        let manifest = ManifestReader::from_json(
            r#"{"schema": "v0.1", "iaas": "azure", "location": "eastus"}"#,
        )
        .unwrap();
        assert_eq!(manifest.location, "eastus");
    }

    #[test]
    fn test_read_file_by_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.yml");
        fs::write(&path, MINIMAL).unwrap();

        let manifest = ManifestReader::read_file(&path).unwrap();
        assert_eq!(manifest.schema, "v0.1");
    }

    #[test]
    fn test_read_file_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("manifest.txt");
        fs::write(&path, MINIMAL).unwrap();

        let err = ManifestReader::read_file(&path).unwrap_err();
        assert!(matches!(err, ArtifactsError::UnknownFormat(_)));
    }

    #[test]
    fn test_read_file_missing() {
        let err = ManifestReader::read_file("does/not/exist.yml").unwrap_err();
        assert!(matches!(err, ArtifactsError::NotFound(_)));
    }
}
