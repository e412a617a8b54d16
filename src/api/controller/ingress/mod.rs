//! Ingress controller: connects routes to the ingress listing usecase

use axum::extract::State;
use axum::Json;

use crate::api::dto::ingress_dto::IngressListResponse;
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct IngressController;

impl IngressController {
    pub async fn get_ingresses(
        State(state): State<AppState>,
    ) -> Result<Json<IngressListResponse>, AppError> {
        let ingresses = state.ingress_service.list_ingresses().await?;
        Ok(Json(IngressListResponse::new(ingresses)))
    }
}
