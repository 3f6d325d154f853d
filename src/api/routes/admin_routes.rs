use crate::api::controllers::{auth_controller, stats_controller};
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router {
    Router::new()
        .route("/auth/login", post(auth_controller::login))
        .route("/auth/logout", post(auth_controller::logout))
        .route("/auth/verify", get(auth_controller::verify))
        .route("/stats", get(stats_controller::get_stats))
}
