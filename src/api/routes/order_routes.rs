use axum::Router;
use axum::routing::{get, post, put};
use crate::api::controllers::order_controller;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(order_controller::get_orders))
        .route("/", post(order_controller::create_order))
        .route("/{id}", get(order_controller::get_order_by_id))
        .route("/{id}", put(order_controller::update_order_status))
}
