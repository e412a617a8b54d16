use std::future::Future;
use std::time::Duration;

use kube::config::KubeConfigOptions;
use kube::{Client, Config};
use tracing::{debug, info, warn};

/// Outcome of looking for cluster credentials
pub enum ConfigResolution {
    InCluster(Config),
    Local(Config),
    Unresolved(String),
}

/// Outcome of building the process-wide Kubernetes client
pub enum ClientResolution {
    InCluster(Client),
    Local(Client),
    Unresolved(String),
}

impl ClientResolution {
    pub fn client(&self) -> Option<&Client> {
        match self {
            ClientResolution::InCluster(client) | ClientResolution::Local(client) => Some(client),
            ClientResolution::Unresolved(_) => None,
        }
    }

    /// Label reported by the health endpoint
    pub fn source(&self) -> &'static str {
        match self {
            ClientResolution::InCluster(_) => "in-cluster",
            ClientResolution::Local(_) => "kubeconfig",
            ClientResolution::Unresolved(_) => "unresolved",
        }
    }
}

/// Picks the in-cluster config when available, otherwise asks `local` for a kubeconfig.
/// `local` is only awaited when the in-cluster attempt failed.
pub async fn resolve_config<F, Fut>(in_cluster: Result<Config, String>, local: F) -> ConfigResolution
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Config, String>>,
{
    let in_cluster_err = match in_cluster {
        Ok(config) => return ConfigResolution::InCluster(config),
        Err(e) => e,
    };
    debug!("In-cluster configuration unavailable: {}", in_cluster_err);

    match local().await {
        Ok(config) => ConfigResolution::Local(config),
        Err(local_err) => ConfigResolution::Unresolved(format!(
            "in-cluster config: {}; kubeconfig: {}",
            in_cluster_err, local_err
        )),
    }
}

/// Bounds every cluster call; there is no other circuit breaker
pub fn apply_timeouts(mut config: Config, timeout: Duration) -> Config {
    config.connect_timeout = Some(timeout);
    config.read_timeout = Some(timeout);
    config.write_timeout = Some(timeout);
    config
}

/// Turns a resolved config into a client, applying the request timeout
pub fn build_client(resolution: ConfigResolution, timeout: Duration) -> ClientResolution {
    let with_timeout = |config: Config| Client::try_from(apply_timeouts(config, timeout));

    match resolution {
        ConfigResolution::InCluster(config) => match with_timeout(config) {
            Ok(client) => ClientResolution::InCluster(client),
            Err(e) => ClientResolution::Unresolved(format!("in-cluster client: {}", e)),
        },
        ConfigResolution::Local(config) => match with_timeout(config) {
            Ok(client) => ClientResolution::Local(client),
            Err(e) => ClientResolution::Unresolved(format!("kubeconfig client: {}", e)),
        },
        ConfigResolution::Unresolved(reason) => ClientResolution::Unresolved(reason),
    }
}

/// Creates a Kubernetes client from the pod service account, falling back to the local kubeconfig
pub async fn build_kube_client(timeout: Duration) -> ClientResolution {
    let in_cluster = Config::incluster().map_err(|e| e.to_string());
    let config = resolve_config(in_cluster, || async {
        Config::from_kubeconfig(&KubeConfigOptions::default())
            .await
            .map_err(|e| e.to_string())
    })
    .await;

    let resolution = build_client(config, timeout);
    match &resolution {
        ClientResolution::InCluster(_) => info!("Using in-cluster Kubernetes configuration"),
        ClientResolution::Local(_) => info!("Using local kubeconfig configuration"),
        ClientResolution::Unresolved(reason) => {
            warn!("Kubernetes client unavailable, running degraded: {}", reason)
        }
    }
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn config(url: &str) -> Config {
        Config::new(url.parse::<http::Uri>().unwrap())
    }

    #[tokio::test]
    async fn in_cluster_wins_without_touching_kubeconfig() {
        let kubeconfig_read = AtomicBool::new(false);
        let resolution = resolve_config(Ok(config("https://10.0.0.1")), || async {
            kubeconfig_read.store(true, Ordering::SeqCst);
            Err("unused".to_string())
        })
        .await;

        assert!(!kubeconfig_read.load(Ordering::SeqCst));
        match resolution {
            ConfigResolution::InCluster(c) => {
                assert_eq!(c.cluster_url.host(), Some("10.0.0.1"))
            }
            _ => panic!("expected in-cluster resolution"),
        }
    }

    #[tokio::test]
    async fn falls_back_to_kubeconfig() {
        let resolution = resolve_config(Err("no service account".into()), || async {
            Ok(config("https://127.0.0.1:6443"))
        })
        .await;

        assert!(matches!(resolution, ConfigResolution::Local(_)));
    }

    #[tokio::test]
    async fn unresolved_keeps_both_causes() {
        let resolution = resolve_config(Err("no service account".into()), || async {
            Err("no kubeconfig found".to_string())
        })
        .await;

        match resolution {
            ConfigResolution::Unresolved(reason) => {
                assert!(reason.contains("no service account"));
                assert!(reason.contains("no kubeconfig found"));
            }
            _ => panic!("expected unresolved"),
        }
    }

    #[test]
    fn timeouts_cover_connect_read_and_write() {
        let timeout = Duration::from_secs(7);
        let cfg = apply_timeouts(config("https://127.0.0.1:6443"), timeout);

        assert_eq!(cfg.connect_timeout, Some(timeout));
        assert_eq!(cfg.read_timeout, Some(timeout));
        assert_eq!(cfg.write_timeout, Some(timeout));
    }

    #[tokio::test]
    async fn local_config_builds_a_kubeconfig_client() {
        let resolution = build_client(
            ConfigResolution::Local(config("https://127.0.0.1:6443")),
            Duration::from_secs(5),
        );

        assert!(matches!(resolution, ClientResolution::Local(_)));
        assert_eq!(resolution.source(), "kubeconfig");
        assert!(resolution.client().is_some());
    }

    #[test]
    fn unresolved_config_yields_no_client() {
        let resolution = build_client(
            ConfigResolution::Unresolved("nothing found".into()),
            Duration::from_secs(5),
        );

        assert_eq!(resolution.source(), "unresolved");
        assert!(resolution.client().is_none());
        assert!(matches!(resolution, ClientResolution::Unresolved(r) if r == "nothing found"));
    }
}
