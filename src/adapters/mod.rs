//! Adapters between the scanner and the Kubernetes API

pub mod kubeconfig;
pub mod resources;
