//! System controller: connects routes to system usecases

use axum::extract::State;
use axum::Json;

use crate::api::dto::system_dto::HealthResponse;
use crate::app_state::AppState;

pub struct SystemController;

impl SystemController {
    /// Always 200; cluster problems are reported in the body only
    pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
        Json(state.system_service.health())
    }
}
