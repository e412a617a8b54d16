use std::sync::Arc;

use crate::core::client::ingresses::{IngressLister, KubeIngressLister};
use crate::core::client::kube_client::ClientResolution;
use crate::core::config::AppConfig;
use crate::domain::ingress::service::IngressService;
use crate::domain::system::service::health_service::SystemService;

#[derive(Clone)]
pub struct AppState {
    pub ingress_service: Arc<IngressService>,
    pub system_service: Arc<SystemService>,
}

/// Wires the startup client resolution into the services shared by every request
pub fn build_app_state(resolution: &ClientResolution, config: &AppConfig) -> AppState {
    let lister = resolution
        .client()
        .map(|client| Arc::new(KubeIngressLister::new(client.clone())) as Arc<dyn IngressLister>);

    let ingress_service = Arc::new(IngressService::new(lister, config.default_enabled));

    AppState {
        system_service: Arc::new(SystemService::new(ingress_service.clone(), resolution.source())),
        ingress_service,
    }
}
