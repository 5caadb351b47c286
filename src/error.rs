//! Error types for the string finder

use std::path::PathBuf;

use kube::config::KubeconfigError;
use thiserror::Error;

use crate::scanner::ResourceKind;

/// Result type for the string finder
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the string finder
#[derive(Debug, Error)]
pub enum Error {
    /// Neither HOME nor USERPROFILE is set
    #[error("Could not determine home directory: HOME and USERPROFILE are unset")]
    HomeDirNotFound,

    /// Kubeconfig file could not be read or parsed
    #[error("Error reading kubeconfig {}: {source}", path.display())]
    Kubeconfig {
        path: PathBuf,
        #[source]
        source: KubeconfigError,
    },

    /// Kubeconfig could not be turned into a client configuration
    #[error("Error building kubeconfig: {0}")]
    ClientConfig(#[source] KubeconfigError),

    /// Kubernetes client could not be created
    #[error("Error creating Kubernetes client: {0}")]
    Client(#[source] kube::Error),

    /// Listing resources failed
    #[error("Failed to list {kind}s: {source}")]
    List {
        kind: ResourceKind,
        #[source]
        source: kube::Error,
    },
}
