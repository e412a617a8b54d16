//! Ingress API DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::ingress::model::IngressRecord;

#[derive(Serialize)]
pub struct IngressListResponse {
    pub ingresses: Vec<IngressRecord>,
    pub count: usize,
    pub fetched_at: DateTime<Utc>,
}

impl IngressListResponse {
    pub fn new(ingresses: Vec<IngressRecord>) -> Self {
        Self {
            count: ingresses.len(),
            ingresses,
            fetched_at: Utc::now(),
        }
    }
}
