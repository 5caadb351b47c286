//! Kubeconfig discovery and client construction

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use tracing::debug;

use crate::{Error, Result};

/// Pick the home directory from HOME, falling back to USERPROFILE (Windows)
pub fn resolve_home(home: Option<OsString>, user_profile: Option<OsString>) -> Option<PathBuf> {
    home.filter(|h| !h.is_empty())
        .or(user_profile.filter(|h| !h.is_empty()))
        .map(PathBuf::from)
}

/// Home directory of the current user
pub fn home_dir() -> Result<PathBuf> {
    resolve_home(std::env::var_os("HOME"), std::env::var_os("USERPROFILE"))
        .ok_or(Error::HomeDirNotFound)
}

/// `<home>/.kube/config`
pub fn kubeconfig_path(home: &Path) -> PathBuf {
    home.join(".kube").join("config")
}

/// Kubeconfig location for the current user
pub fn default_kubeconfig_path() -> Result<PathBuf> {
    Ok(kubeconfig_path(&home_dir()?))
}

/// Load a client configuration from the kubeconfig at `path`, using its current context
pub async fn load_config(path: &Path) -> Result<Config> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|source| Error::Kubeconfig {
        path: path.to_path_buf(),
        source,
    })?;

    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(Error::ClientConfig)
}

/// Build a Kubernetes client from the kubeconfig at `path`
pub async fn build_client(path: &Path) -> Result<Client> {
    let config = load_config(path).await?;
    debug!("Using cluster {}", config.cluster_url);

    Client::try_from(config).map_err(Error::Client)
}
