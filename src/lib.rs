//! Kubernetes string finder
//!
//! Searches every Secret and ConfigMap in a cluster for a string, in
//! resource names, data keys and decoded data values.

pub mod adapters;
pub mod cli;
pub mod error;
pub mod matcher;
pub mod scanner;

pub use error::{Error, Result};
