pub mod admin_routes;
pub mod category_routes;
pub mod order_routes;
pub mod product_routes;
