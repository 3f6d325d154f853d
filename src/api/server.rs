use axum::Json;
use axum::Router;
use axum::http::{Method, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::get;
use chrono::SecondsFormat;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::api::config::Config;
use crate::api::errors::APIErrors;
use crate::api::response::HealthResponse;
use crate::api::routes::{admin_routes, category_routes, order_routes, product_routes};

/// Assemble the full API router. Kept separate from `start` so tests can
/// drive the app through `tower::ServiceExt` without binding a socket.
pub fn build_router() -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/health", get(health))
        .nest("/api/products", product_routes::routes())
        .nest("/api/categories", category_routes::routes())
        .nest("/api/orders", order_routes::routes())
        .nest("/api/admin", admin_routes::routes())
        .fallback(not_found)
        .layer(cors_layer)
}

pub async fn start() {
    let config = Config::new();

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, build_router())
        .await
        .expect("Failed to start the server");
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }),
    )
}

async fn not_found() -> impl IntoResponse {
    APIErrors::NotFound("Not Found".to_string())
}
