/// Re-export the Kubernetes resource types the dashboard reads from k8s-openapi
/// This module is the single place the rest of the crate imports them from

pub use k8s_openapi::api::networking::v1::{
    Ingress,
    IngressBackend,
    IngressStatus,
};

pub use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
