use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Request-level failures, rendered as the `{"error": <message>}` body the
/// storefront client expects.
#[derive(Debug, Clone, PartialEq)]
pub enum APIErrors {
    BadRequest(String),
    Unauthorized,
    InvalidCredentials,
    NotFound(String),
    Internal(String),
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            APIErrors::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            APIErrors::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Unauthorized access".to_string())
            }
            APIErrors::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Invalid username or password".to_string(),
            ),
            APIErrors::NotFound(message) => (StatusCode::NOT_FOUND, message),
            APIErrors::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
