use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::client::kube_resources::Time;

/// Load-balancer readiness derived from the Ingress status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum IngressStatus {
    Ready,
    Pending,
    Unknown,
}

/// One reachable URL derived from a (host, path, backend) triple
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrlEntry {
    pub url: String,
    pub path: String,
    pub service_name: Option<String>,
    pub service_port: Option<String>,
}

/// Dashboard view of a single Ingress, built fresh for every response
#[derive(Debug, Clone, Serialize)]
pub struct IngressRecord {
    pub name: String,
    pub namespace: String,
    pub status: IngressStatus,
    pub labels: BTreeMap<String, String>,
    pub annotations: BTreeMap<String, String>,
    pub urls: Vec<UrlEntry>,
    /// Title override from annotations
    pub display_title: Option<String>,
    /// Card image (URL or data URL) from annotations
    pub image: Option<String>,
    pub creation_timestamp: Option<Time>,
}
