use axum::Json;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::api::errors::APIErrors;
use crate::api::extractors::AdminContext;
use crate::api::request::{ProductListQuery, ProductPayload};
use crate::api::response::{
    MessageResponse, ProductDetailResponse, ProductListResponse, ProductMutationResponse,
    ProductResponse,
};
use crate::services::errors::ProductServiceError;
use crate::services::product_service::ProductService;

/// Get the catalog, optionally narrowed by category, featured flag or search term
pub async fn get_products(Query(params): Query<ProductListQuery>) -> impl IntoResponse {
    let service = ProductService::new();
    let featured_only = params.featured.as_deref() == Some("true");

    match service
        .get_products(
            params.category.as_deref(),
            featured_only,
            params.search.as_deref(),
        )
        .await
    {
        Ok(products) => {
            let products: Vec<ProductResponse> = products
                .unwrap_or_default()
                .into_iter()
                .map(ProductResponse::from)
                .collect();

            (StatusCode::OK, Json(ProductListResponse { products })).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            APIErrors::Internal("Failed to fetch products".to_string()).into_response()
        }
    }
}

/// Get a single product by ID
pub async fn get_product_by_id(Path(product_id): Path<i64>) -> impl IntoResponse {
    let service = ProductService::new();

    match service.get_product_by_id(product_id).await {
        Ok(Some(product)) => (
            StatusCode::OK,
            Json(ProductDetailResponse {
                product: ProductResponse::from(product),
            }),
        )
            .into_response(),
        Ok(None) => APIErrors::NotFound("Product not found".to_string()).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch product {product_id}: {e}");
            APIErrors::Internal("Failed to fetch product".to_string()).into_response()
        }
    }
}

/// Create a new product
pub async fn create_product(
    admin: AdminContext,
    Json(payload): Json<ProductPayload>,
) -> impl IntoResponse {
    let service = ProductService::new();

    match service.create_product(payload.into()).await {
        Ok(id) => {
            tracing::info!("Product {id} created by {}", admin.username);
            (
                StatusCode::CREATED,
                Json(ProductMutationResponse {
                    id,
                    message: "Product created successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(
            e @ (ProductServiceError::MissingRequiredFields | ProductServiceError::InvalidPrice),
        ) => APIErrors::BadRequest(e.to_string()).into_response(),
        Err(e) => {
            tracing::error!("Failed to create product: {e}");
            APIErrors::Internal("Failed to create product".to_string()).into_response()
        }
    }
}

/// Update an existing product
pub async fn update_product(
    admin: AdminContext,
    Path(product_id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> impl IntoResponse {
    let service = ProductService::new();

    match service.update_product(product_id, payload.into()).await {
        Ok(_) => {
            tracing::info!("Product {product_id} updated by {}", admin.username);
            (
                StatusCode::OK,
                Json(ProductMutationResponse {
                    id: product_id,
                    message: "Product updated successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(ProductServiceError::ProductNotFound) => {
            APIErrors::NotFound("Product not found".to_string()).into_response()
        }
        Err(
            e @ (ProductServiceError::MissingRequiredFields | ProductServiceError::InvalidPrice),
        ) => APIErrors::BadRequest(e.to_string()).into_response(),
        Err(e) => {
            tracing::error!("Failed to update product {product_id}: {e}");
            APIErrors::Internal("Failed to update product".to_string()).into_response()
        }
    }
}

/// Delete a product
pub async fn delete_product(
    admin: AdminContext,
    Path(product_id): Path<i64>,
) -> impl IntoResponse {
    let service = ProductService::new();

    match service.delete_product(product_id).await {
        Ok(_) => {
            tracing::info!("Product {product_id} deleted by {}", admin.username);
            (
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Product deleted successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(ProductServiceError::ProductNotFound) => {
            APIErrors::NotFound("Product not found".to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to delete product {product_id}: {e}");
            APIErrors::Internal("Failed to delete product".to_string()).into_response()
        }
    }
}
