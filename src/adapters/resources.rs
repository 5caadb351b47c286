//! Cluster-wide listing of Secrets and ConfigMaps

use std::fmt::Debug;

use k8s_openapi::api::core::v1::{ConfigMap, Secret};
use kube::api::ListParams;
use kube::{Api, Client, Resource};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::scanner::ResourceKind;
use crate::{Error, Result};

/// List all Secrets in all namespaces
pub async fn list_secrets(client: &Client) -> Result<Vec<Secret>> {
    list_all(client, ResourceKind::Secret).await
}

/// List all ConfigMaps in all namespaces
pub async fn list_config_maps(client: &Client) -> Result<Vec<ConfigMap>> {
    list_all(client, ResourceKind::ConfigMap).await
}

async fn list_all<K>(client: &Client, kind: ResourceKind) -> Result<Vec<K>>
where
    K: Resource<DynamicType = ()> + Clone + DeserializeOwned + Debug,
{
    let api: Api<K> = Api::all(client.clone());
    let list = api
        .list(&ListParams::default())
        .await
        .map_err(|source| Error::List { kind, source })?;

    debug!("Listed {} {}s", list.items.len(), kind);
    Ok(list.items)
}
