use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_K8S_TIMEOUT_SECS: u64 = 10;

/// Process configuration, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// IP literal or hostname, resolved when binding
    pub host: String,
    pub port: u16,
    /// Visibility of ingresses without an explicit `enabled` annotation
    pub default_enabled: bool,
    /// Connect/read/write timeout for cluster calls
    pub k8s_timeout: Duration,
}

impl AppConfig {
    /// Loads `.env` (if any) and reads the process environment
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(v) => v.trim().parse::<u16>().with_context(|| format!("Invalid PORT '{}'", v))?,
            None => DEFAULT_PORT,
        };

        // Anything but "true" disables, matching the annotation semantics
        let default_enabled = lookup("KAVORITES_DEFAULT_ENABLED")
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        let timeout_secs = match lookup("KAVORITES_K8S_TIMEOUT_SECS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("Invalid KAVORITES_K8S_TIMEOUT_SECS '{}'", v))?,
            None => DEFAULT_K8S_TIMEOUT_SECS,
        };

        Ok(Self {
            host,
            port,
            default_enabled,
            k8s_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Host/port pair for `TcpListener::bind`, which resolves hostnames
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}
