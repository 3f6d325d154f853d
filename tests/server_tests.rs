use joya_server_lib::api::response::HealthResponse;
use joya_server_lib::api::server::build_router;
use joya_server_lib::data::database::Database;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use diesel::result;
use diesel_async::RunQueryDsl;
use http_body_util::BodyExt;

use tower::ServiceExt;

async fn setup() -> Result<(), result::Error> {
    let mut db_path = std::env::temp_dir();
    db_path.push("joya_server_tests.db");
    std::env::set_var("DATABASE_URL", &db_path);

    let db = Database::new().await;
    db.run_migrations().await?;

    let mut conn = db
        .get_connection()
        .await
        .expect("Failed to get a database connection");

    use joya_server_lib::data::models::schema::admin_sessions::dsl::admin_sessions;
    use joya_server_lib::data::models::schema::admin_users::dsl::admin_users;
    use joya_server_lib::data::models::schema::order_items::dsl::order_items;
    use joya_server_lib::data::models::schema::orders::dsl::orders;
    use joya_server_lib::data::models::schema::products::dsl::products;

    diesel::delete(order_items).execute(&mut conn).await?;
    diesel::delete(orders).execute(&mut conn).await?;
    diesel::delete(products).execute(&mut conn).await?;
    diesel::delete(admin_sessions).execute(&mut conn).await?;
    diesel::delete(admin_users).execute(&mut conn).await?;

    Ok(())
}

#[tokio::test]
#[serial_test::serial]
async fn test_health_endpoint() {
    setup().await.expect("Setup failed");

    let response = build_router()
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let health: HealthResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert!(
        chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok(),
        "timestamp should be an RFC 3339 timestamp"
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_unknown_route_returns_json_not_found() {
    setup().await.expect("Setup failed");

    let response = build_router()
        .oneshot(
            Request::builder()
                .uri("/api/no-such-endpoint")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(error["error"], "Not Found");
}

#[tokio::test]
#[serial_test::serial]
async fn test_cors_preflight() {
    setup().await.expect("Setup failed");

    let response = build_router()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/products")
                .header("Origin", "https://joya.example")
                .header("Access-Control-Request-Method", "POST")
                .header("Access-Control-Request-Headers", "content-type,authorization")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_router_serves_nested_resources() {
    setup().await.expect("Setup failed");

    let response = build_router()
        .oneshot(
            Request::builder()
                .uri("/api/categories")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let response = build_router()
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
