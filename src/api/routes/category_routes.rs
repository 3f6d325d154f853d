use crate::api::controllers::category_controller;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router {
    Router::new().route("/", get(category_controller::get_categories))
}
