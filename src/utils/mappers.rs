use chrono::SecondsFormat;

use crate::api::request::{CreateOrderRequest, ProductPayload};
use crate::api::response::{
    CategoryResponse, LoginResponse, OrderItemResponse, OrderResponse, ProductResponse,
    StatsResponse,
};
use crate::data::models::category::Category;
use crate::data::models::order::Order;
use crate::data::models::order_item::OrderItem;
use crate::data::models::product::Product;
use crate::services::order_service::{OrderDraft, OrderLineDraft};
use crate::services::product_service::ProductDraft;
use crate::services::session_service::LoginOutcome;
use crate::services::stats_service::StoreStats;

impl From<ProductPayload> for ProductDraft {
    fn from(payload: ProductPayload) -> Self {
        ProductDraft {
            name: payload.name.unwrap_or_default(),
            category: payload.category.unwrap_or_default(),
            price: payload.price,
            original_price: payload.original_price,
            image: payload.image.unwrap_or_default(),
            images: payload.images,
            description: payload.description.unwrap_or_default(),
            material: payload.material.unwrap_or_default(),
            stone: payload.stone.unwrap_or_default(),
            size: payload.size.unwrap_or_default(),
            in_stock: payload.in_stock.unwrap_or(true),
            featured: payload.featured.unwrap_or(false),
        }
    }
}

impl From<CreateOrderRequest> for OrderDraft {
    fn from(request: CreateOrderRequest) -> Self {
        OrderDraft {
            items: request
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|item| OrderLineDraft {
                    product_id: item.id,
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
            total: request.total,
            customer_name: request.customer_name,
            customer_phone: request.customer_phone,
            customer_address: request.customer_address,
            customer_email: request.customer_email,
        }
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        // The images column holds a JSON array; fall back to the cover image
        // when it is absent or unreadable.
        let images = product
            .images
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok())
            .unwrap_or_else(|| vec![product.image.clone()]);

        ProductResponse {
            id: product.id,
            name: product.name,
            category: product.category,
            price: product.price,
            original_price: product.original_price,
            image: product.image,
            images,
            description: product.description,
            material: product.material,
            stone: product.stone,
            size: product.size,
            in_stock: product.in_stock,
            featured: product.featured,
        }
    }
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        CategoryResponse {
            id: category.id,
            name: category.name,
            icon: category.icon,
        }
    }
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        OrderItemResponse {
            id: item.id,
            order_id: item.order_id,
            product_id: item.product_id,
            product_name: item.product_name,
            price: item.price,
            quantity: item.quantity,
            subtotal: item.subtotal,
        }
    }
}

impl From<(Order, Vec<OrderItem>)> for OrderResponse {
    fn from((order, items): (Order, Vec<OrderItem>)) -> Self {
        OrderResponse {
            id: order.id,
            total: order.total,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_address: order.customer_address,
            customer_email: order.customer_email,
            status: order.status,
            created_at: order.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            updated_at: order
                .updated_at
                .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string()),
            items: items.into_iter().map(OrderItemResponse::from).collect(),
        }
    }
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        LoginResponse {
            token: outcome.token,
            username: outcome.username,
            role: outcome.role,
            expires_at: outcome
                .expires_at
                .and_utc()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
            message: "Login successful".to_string(),
        }
    }
}

impl From<StoreStats> for StatsResponse {
    fn from(stats: StoreStats) -> Self {
        StatsResponse {
            total_products: stats.total_products,
            total_orders: stats.total_orders,
            total_revenue: stats.total_revenue,
            pending_orders: stats.pending_orders,
        }
    }
}
