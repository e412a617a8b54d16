//! System API DTOs
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub k8s_client_available: bool,
    pub client_source: &'static str,
}
