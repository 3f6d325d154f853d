use axum::Json;
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::api::errors::APIErrors;
use crate::api::extractors::AdminContext;
use crate::api::request::{CreateOrderRequest, OrderListQuery, UpdateOrderStatusRequest};
use crate::api::response::{
    OrderCreatedResponse, OrderDetailResponse, OrderListResponse, OrderResponse,
    OrderStatusResponse,
};
use crate::services::errors::OrderServiceError;
use crate::services::order_service::OrderService;

/// Create a new order with its line items
pub async fn create_order(Json(payload): Json<CreateOrderRequest>) -> impl IntoResponse {
    let service = OrderService::new();

    match service.create_order(payload.into()).await {
        Ok(order_id) => (
            StatusCode::CREATED,
            Json(OrderCreatedResponse {
                order_id,
                message: "Order created successfully".to_string(),
            }),
        )
            .into_response(),
        Err(
            e @ (OrderServiceError::EmptyOrder
            | OrderServiceError::InvalidItem
            | OrderServiceError::InvalidTotal),
        ) => APIErrors::BadRequest(e.to_string()).into_response(),
        Err(e) => {
            tracing::error!("Failed to create order: {e}");
            APIErrors::Internal("Failed to create order".to_string()).into_response()
        }
    }
}

/// Get a page of orders, optionally filtered by status
pub async fn get_orders(
    _admin: AdminContext,
    Query(params): Query<OrderListQuery>,
) -> impl IntoResponse {
    let service = OrderService::new();
    let limit = params.limit.unwrap_or(100);
    let offset = params.offset.unwrap_or(0);

    match service
        .list_orders(params.status.as_deref(), limit, offset)
        .await
    {
        Ok((orders, total)) => {
            let orders: Vec<OrderResponse> =
                orders.into_iter().map(OrderResponse::from).collect();

            (
                StatusCode::OK,
                Json(OrderListResponse {
                    orders,
                    total,
                    limit,
                    offset,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch orders: {e}");
            APIErrors::Internal("Failed to fetch orders".to_string()).into_response()
        }
    }
}

/// Get a single order with its line items
pub async fn get_order_by_id(Path(order_id): Path<i64>) -> impl IntoResponse {
    let service = OrderService::new();

    match service.get_order_by_id(order_id).await {
        Ok(Some((order, items))) => (
            StatusCode::OK,
            Json(OrderDetailResponse {
                order: OrderResponse::from((order, items)),
            }),
        )
            .into_response(),
        Ok(None) => APIErrors::NotFound("Order not found".to_string()).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch order {order_id}: {e}");
            APIErrors::Internal("Failed to fetch order".to_string()).into_response()
        }
    }
}

/// Update an order's status
pub async fn update_order_status(
    admin: AdminContext,
    Path(order_id): Path<i64>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> impl IntoResponse {
    let service = OrderService::new();
    let status = payload.status.unwrap_or_default();

    match service.update_order_status(order_id, &status).await {
        Ok(new_status) => {
            tracing::info!(
                "Order {order_id} set to {} by {}",
                new_status.as_str(),
                admin.username
            );
            (
                StatusCode::OK,
                Json(OrderStatusResponse {
                    id: order_id,
                    status: new_status.as_str().to_string(),
                    message: "Order status updated successfully".to_string(),
                }),
            )
                .into_response()
        }
        Err(OrderServiceError::OrderNotFound) => {
            APIErrors::NotFound("Order not found".to_string()).into_response()
        }
        Err(OrderServiceError::InvalidStatus) => {
            APIErrors::BadRequest(OrderServiceError::InvalidStatus.to_string()).into_response()
        }
        Err(e) => {
            tracing::error!("Failed to update order {order_id}: {e}");
            APIErrors::Internal("Failed to update order".to_string()).into_response()
        }
    }
}
