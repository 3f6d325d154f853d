use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use crate::api::errors::APIErrors;
use crate::services::session_service::SessionService;

/// The admin behind the request's bearer session token.
///
/// Extraction rejects with a 401 when the `Authorization` header is missing
/// or the session is unknown, expired or belongs to a deactivated account.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminContext {
    pub admin_id: i64,
    pub username: String,
    pub role: String,
}

impl<S> FromRequestParts<S> for AdminContext
where
    S: Send + Sync,
{
    type Rejection = APIErrors;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                tracing::error!("Invalid authorization header");
                APIErrors::Unauthorized
            })?;

        let identity = SessionService::new()
            .verify(bearer.token())
            .await
            .map_err(|e| {
                tracing::error!("Session verification failed: {e}");
                APIErrors::Unauthorized
            })?;

        Ok(AdminContext {
            admin_id: identity.admin_id,
            username: identity.username,
            role: identity.role,
        })
    }
}
