//! Error types for the artifacts module.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for artifact operations.
pub type ArtifactsResult<T> = Result<T, ArtifactsError>;

/// Errors that can occur while loading manifests or writing artifacts.
#[derive(Error, Debug)]
pub enum ArtifactsError {
    #[error("Manifest not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Unknown manifest format for path: {0} (expected .yml, .yaml or .json)")]
    UnknownFormat(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
