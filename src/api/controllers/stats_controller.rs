use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::api::errors::APIErrors;
use crate::api::extractors::AdminContext;
use crate::api::response::StatsResponse;
use crate::services::stats_service::StatsService;

/// Get the dashboard counters
pub async fn get_stats(_admin: AdminContext) -> impl IntoResponse {
    let service = StatsService::new();

    match service.get_stats().await {
        Ok(stats) => (StatusCode::OK, Json(StatsResponse::from(stats))).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch stats: {e}");
            APIErrors::Internal("Failed to fetch stats".to_string()).into_response()
        }
    }
}
