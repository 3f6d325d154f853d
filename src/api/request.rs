use serde::Deserialize;

/// Body for creating or fully replacing a product. Required fields are
/// optional here so the service can answer missing ones with a 400 instead
/// of a deserialization rejection.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub image: Option<String>,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub material: Option<String>,
    pub stone: Option<String>,
    pub size: Option<String>,
    pub in_stock: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Deserialize)]
pub struct OrderItemRequest {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Option<Vec<OrderItemRequest>>,
    pub total: Option<f64>,
    pub customer_name: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub customer_email: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: Option<String>,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Catalog filters. `featured` carries the raw query value; only the literal
/// string `true` switches the filter on.
#[derive(Deserialize)]
pub struct ProductListQuery {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
