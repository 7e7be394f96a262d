//! Error types for deployment production.

use std::fmt;

use thiserror::Error;

/// Result type alias for producer operations.
pub type ProducerResult<T> = Result<T, ProducerError>;

/// Errors that can occur while compiling a manifest into deployment
/// artifacts.
///
/// Every variant is fatal: production returns the first error encountered
/// and never a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProducerError {
    #[error("Duplicate {collection} name: {name}")]
    DuplicateName { collection: Collection, name: String },

    #[error("Unresolved {collection} reference: {name}")]
    UnresolvedReference { collection: Collection, name: String },

    #[error("Unsupported manifest schema: {0}")]
    UnsupportedSchema(String),

    #[error("Missing manifest field: {0}")]
    MissingField(&'static str),
}

impl ProducerError {
    pub fn duplicate_name(collection: Collection, name: impl Into<String>) -> Self {
        ProducerError::DuplicateName {
            collection,
            name: name.into(),
        }
    }

    pub fn unresolved_reference(collection: Collection, name: impl Into<String>) -> Self {
        ProducerError::UnresolvedReference {
            collection,
            name: name.into(),
        }
    }
}

/// Manifest collection a name belongs to, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    VirtualNetwork,
    Subnet,
    LoadBalancer,
    NetworkSecurityGroup,
    StorageAccount,
    VmGroup,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::VirtualNetwork => "virtual network",
            Collection::Subnet => "subnet",
            Collection::LoadBalancer => "load balancer",
            Collection::NetworkSecurityGroup => "network security group",
            Collection::StorageAccount => "storage account",
            Collection::VmGroup => "VM group",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_offender() {
        let err = ProducerError::duplicate_name(Collection::Subnet, "snet-1");
        assert_eq!(err.to_string(), "Duplicate subnet name: snet-1");

        let err = ProducerError::unresolved_reference(Collection::LoadBalancer, "lb-x");
        assert_eq!(err.to_string(), "Unresolved load balancer reference: lb-x");

        let err = ProducerError::UnsupportedSchema("v9".to_string());
        assert_eq!(err.to_string(), "Unsupported manifest schema: v9");
    }
}
