use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub original_price: Option<f64>,
    pub image: String,
    pub images: Vec<String>,
    pub description: String,
    pub material: String,
    pub stone: String,
    pub size: String,
    pub in_stock: bool,
    pub featured: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub subtotal: f64,
}

/// Customer fields the shopper left blank are omitted rather than sent as
/// nulls.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub total: f64,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub customer_email: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub items: Vec<OrderItemResponse>,
}

#[derive(Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
}

#[derive(Serialize, Deserialize)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
}

#[derive(Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryResponse>,
}

#[derive(Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<OrderResponse>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Serialize, Deserialize)]
pub struct OrderDetailResponse {
    pub order: OrderResponse,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: String,
    pub expires_at: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VerifyResponse {
    pub valid: bool,
    pub username: String,
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_products: i64,
    pub total_orders: i64,
    pub total_revenue: f64,
    pub pending_orders: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProductMutationResponse {
    pub id: i64,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreatedResponse {
    pub order_id: i64,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OrderStatusResponse {
    pub id: i64,
    pub status: String,
    pub message: String,
}
