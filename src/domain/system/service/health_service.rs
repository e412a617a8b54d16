use std::sync::Arc;

use crate::api::dto::system_dto::HealthResponse;
use crate::domain::ingress::service::IngressService;

/// Reports whether the cluster client came up at startup. Fixed for the process lifetime.
#[derive(Clone)]
pub struct SystemService {
    ingress_service: Arc<IngressService>,
    client_source: &'static str,
}

impl SystemService {
    pub fn new(ingress_service: Arc<IngressService>, client_source: &'static str) -> Self {
        Self {
            ingress_service,
            client_source,
        }
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy",
            k8s_client_available: self.ingress_service.is_available(),
            client_source: self.client_source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ingress::service::tests::StaticLister;

    #[test]
    fn missing_client_reports_unavailable() {
        let svc = SystemService::new(Arc::new(IngressService::new(None, true)), "unresolved");

        assert_eq!(
            svc.health(),
            HealthResponse {
                status: "healthy",
                k8s_client_available: false,
                client_source: "unresolved",
            }
        );
    }

    #[test]
    fn injected_client_reports_available() {
        let ingress_service = IngressService::new(
            Some(Arc::new(StaticLister(Err("unreachable".into())))),
            true,
        );
        let svc = SystemService::new(Arc::new(ingress_service), "in-cluster");

        let health = svc.health();
        assert!(health.k8s_client_available);
        assert_eq!(health.client_source, "in-cluster");
    }
}
