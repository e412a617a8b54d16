use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// No cluster configuration could be resolved at startup
    #[error("{0}")]
    ClientUnavailable(String),

    /// The cluster call failed at request time
    #[error("Failed to list ingresses: {0}")]
    ClusterUnavailable(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::ClientUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ClusterUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        // String provided by thiserror → safe JSON message
        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_status_codes() {
        let cases = [
            (AppError::ClientUnavailable("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (AppError::ClusterUnavailable("x".into()), StatusCode::BAD_GATEWAY),
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn cluster_message_includes_cause() {
        let err = AppError::ClusterUnavailable("403 Forbidden".into());
        assert_eq!(err.to_string(), "Failed to list ingresses: 403 Forbidden");
    }
}
