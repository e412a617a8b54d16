use std::sync::Arc;

use tracing::{debug, error};

use crate::core::client::ingresses::IngressLister;
use crate::core::client::mappers::map_ingress_to_record;
use crate::domain::ingress::annotations;
use crate::domain::ingress::model::IngressRecord;
use crate::errors::AppError;

/// Lists ingresses on demand. Holds no state besides the injected cluster access.
pub struct IngressService {
    lister: Option<Arc<dyn IngressLister>>,
    default_enabled: bool,
}

impl IngressService {
    /// `lister` is `None` when no cluster configuration could be resolved at startup
    pub fn new(lister: Option<Arc<dyn IngressLister>>, default_enabled: bool) -> Self {
        Self {
            lister,
            default_enabled,
        }
    }

    pub fn is_available(&self) -> bool {
        self.lister.is_some()
    }

    /// One fresh cluster read per call, mapped and filtered for the dashboard
    pub async fn list_ingresses(&self) -> Result<Vec<IngressRecord>, AppError> {
        let lister = self.lister.as_ref().ok_or_else(|| {
            AppError::ClientUnavailable("Kubernetes client not available".to_string())
        })?;

        let raw = lister.list_all_ingresses().await.map_err(|e| {
            error!("Failed to retrieve ingress objects: {}", e);
            AppError::ClusterUnavailable(e.to_string())
        })?;

        let total = raw.len();
        let records: Vec<IngressRecord> = raw
            .iter()
            .map(map_ingress_to_record)
            .filter(|record| annotations::is_enabled(&record.annotations, self.default_enabled))
            .collect();

        debug!("Serving {} of {} ingress(es)", records.len(), total);
        Ok(records)
    }
}
