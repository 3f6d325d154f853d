use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::api::errors::APIErrors;
use crate::api::response::{CategoryListResponse, CategoryResponse};
use crate::services::category_service::CategoryService;

/// Get all categories
pub async fn get_categories() -> impl IntoResponse {
    let service = CategoryService::new();

    match service.get_categories().await {
        Ok(categories) => {
            let categories: Vec<CategoryResponse> = categories
                .unwrap_or_default()
                .into_iter()
                .map(CategoryResponse::from)
                .collect();

            (StatusCode::OK, Json(CategoryListResponse { categories })).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch categories: {e}");
            APIErrors::Internal("Failed to fetch categories".to_string()).into_response()
        }
    }
}
