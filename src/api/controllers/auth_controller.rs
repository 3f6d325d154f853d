use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use crate::api::errors::APIErrors;
use crate::api::extractors::AdminContext;
use crate::api::request::LoginRequest;
use crate::api::response::{LoginResponse, MessageResponse, VerifyResponse};
use crate::services::errors::SessionServiceError;
use crate::services::session_service::SessionService;

/// Log an admin in and mint a session token
pub async fn login(Json(payload): Json<LoginRequest>) -> impl IntoResponse {
    let service = SessionService::new();
    let username = payload.username.unwrap_or_default();
    let password = payload.password.unwrap_or_default();

    match service.login(&username, &password).await {
        Ok(outcome) => (StatusCode::OK, Json(LoginResponse::from(outcome))).into_response(),
        Err(SessionServiceError::MissingCredentials) => {
            APIErrors::BadRequest(SessionServiceError::MissingCredentials.to_string())
                .into_response()
        }
        Err(SessionServiceError::InvalidCredentials) => {
            APIErrors::InvalidCredentials.into_response()
        }
        Err(e) => {
            tracing::error!("Login failed: {e}");
            APIErrors::Internal("Login failed".to_string()).into_response()
        }
    }
}

/// Invalidate the caller's session token, if one was sent
pub async fn logout(bearer: Option<TypedHeader<Authorization<Bearer>>>) -> impl IntoResponse {
    if let Some(TypedHeader(Authorization(bearer))) = bearer {
        if let Err(e) = SessionService::new().logout(bearer.token()).await {
            tracing::error!("Logout failed: {e}");
            return APIErrors::Internal("Logout failed".to_string()).into_response();
        }
    }

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Logout successful".to_string(),
        }),
    )
        .into_response()
}

/// Confirm the caller's session token is still valid
pub async fn verify(admin: AdminContext) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(VerifyResponse {
            valid: true,
            username: admin.username,
            role: admin.role,
        }),
    )
        .into_response()
}
