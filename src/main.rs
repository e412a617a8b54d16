mod api;
mod app_state;
mod core;
mod domain;
mod errors;
mod routes;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::app_state::build_app_state;
use crate::core::client::kube_client::build_kube_client;
use crate::core::config::AppConfig;
use crate::core::logging::init_tracing;
use crate::routes::app_router;

#[tokio::main]
async fn main() -> Result<()> {
    let _log_guard = init_tracing();

    let config = AppConfig::from_env()?;

    // Cluster problems leave the server in degraded mode instead of aborting
    let resolution = build_kube_client(config.k8s_timeout).await;
    let state = build_app_state(&resolution, &config);

    let app = app_router().with_state(state);

    let (host, port) = config.bind_target();
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    let addr = listener.local_addr()?;

    info!("🚀 Starting Kubernetes Ingress Viewer on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on unix, SIGTERM from the kubelet
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
