use axum::{
    extract::OriginalUri,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::errors::AppError;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    let api = Router::new()
        .merge(crate::api::routes::ingress_routes::ingress_routes())
        .merge(crate::api::routes::system_routes::system_routes());

    Router::new()
        // Single-page UI
        .route("/", get(index))
        .nest("/api", api)
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

// Handler for 404 Not Found
async fn handler_404(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    AppError::NotFound(uri.path().to_string())
}
