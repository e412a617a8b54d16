/// Maps kube-rs / k8s-openapi types → dashboard records
use std::collections::HashSet;

use crate::core::client::kube_resources::{Ingress, IngressBackend, IngressStatus as K8sIngressStatus};
use crate::domain::ingress::annotations;
use crate::domain::ingress::model::{IngressRecord, IngressStatus, UrlEntry};

/// Converts a k8s-openapi Ingress into an IngressRecord.
/// Fields that cannot be interpreted are left out rather than reported.
pub fn map_ingress_to_record(ingress: &Ingress) -> IngressRecord {
    let metadata = &ingress.metadata;
    let annotations = metadata.annotations.clone().unwrap_or_default();

    IngressRecord {
        name: metadata.name.clone().unwrap_or_default(),
        namespace: metadata.namespace.clone().unwrap_or_default(),
        status: derive_status(ingress.status.as_ref()),
        labels: metadata.labels.clone().unwrap_or_default(),
        display_title: annotations::display_title(&annotations),
        image: annotations::image_src(&annotations),
        annotations,
        urls: map_ingress_urls(ingress),
        creation_timestamp: metadata.creation_timestamp.clone(),
    }
}

/// One entry per rule path, in rule order. The default backend never produces a URL.
pub fn map_ingress_urls(ingress: &Ingress) -> Vec<UrlEntry> {
    let Some(spec) = ingress.spec.as_ref() else {
        return Vec::new();
    };

    let tls_hosts: HashSet<&str> = spec
        .tls
        .iter()
        .flatten()
        .flat_map(|tls| tls.hosts.iter().flatten())
        .map(String::as_str)
        .collect();

    let mut urls = Vec::new();
    for rule in spec.rules.iter().flatten() {
        // Empty host means "any host"
        let host = rule.host.as_deref().unwrap_or("");
        let scheme = if tls_hosts.contains(host) { "https" } else { "http" };

        let paths = rule.http.iter().flat_map(|http| http.paths.iter());
        for http_path in paths {
            let path = match http_path.path.as_deref() {
                Some(p) if !p.is_empty() => p.to_string(),
                _ => "/".to_string(),
            };
            let (service_name, service_port) = service_backend(&http_path.backend);

            urls.push(UrlEntry {
                url: format!("{}://{}{}", scheme, host, path),
                path,
                service_name,
                service_port,
            });
        }
    }
    urls
}

/// Name and port of a Service backend; resource backends carry neither
fn service_backend(backend: &IngressBackend) -> (Option<String>, Option<String>) {
    let Some(service) = backend.service.as_ref() else {
        return (None, None);
    };

    let port = service.port.as_ref().and_then(|port| {
        port.number
            .map(|n| n.to_string())
            .or_else(|| port.name.clone())
    });

    (Some(service.name.clone()), port)
}

fn derive_status(status: Option<&K8sIngressStatus>) -> IngressStatus {
    let Some(load_balancer) = status.and_then(|s| s.load_balancer.as_ref()) else {
        return IngressStatus::Unknown;
    };

    let assigned = load_balancer.ingress.iter().flatten().any(|point| {
        point.ip.as_deref().is_some_and(|ip| !ip.is_empty())
            || point.hostname.as_deref().is_some_and(|h| !h.is_empty())
    });

    if assigned {
        IngressStatus::Ready
    } else {
        IngressStatus::Pending
    }
}
