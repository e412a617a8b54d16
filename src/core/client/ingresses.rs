use async_trait::async_trait;
use kube::api::ListParams;
use kube::{Api, Client};
use thiserror::Error;
use tracing::debug;

use crate::core::client::kube_resources::Ingress;

#[derive(Debug, Error)]
pub enum ClusterError {
    /// Transport, authorization or API failure while talking to the cluster
    #[error("{0}")]
    Unavailable(String),
}

impl From<kube::Error> for ClusterError {
    fn from(err: kube::Error) -> Self {
        ClusterError::Unavailable(err.to_string())
    }
}

/// Read access to the cluster's Ingress objects
#[async_trait]
pub trait IngressLister: Send + Sync {
    /// One list call across all namespaces. Never retried, never cached.
    async fn list_all_ingresses(&self) -> Result<Vec<Ingress>, ClusterError>;
}

pub struct KubeIngressLister {
    client: Client,
}

impl KubeIngressLister {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IngressLister for KubeIngressLister {
    async fn list_all_ingresses(&self) -> Result<Vec<Ingress>, ClusterError> {
        fetch_ingresses(&self.client).await
    }
}

/// Fetch all ingresses in the cluster
pub async fn fetch_ingresses(client: &Client) -> Result<Vec<Ingress>, ClusterError> {
    let ingresses: Api<Ingress> = Api::all(client.clone());
    let ingress_list = ingresses.list(&ListParams::default()).await?;

    debug!("Discovered {} ingress(es)", ingress_list.items.len());
    Ok(ingress_list.items)
}
