use joya_server_lib::data::database::Database;
use joya_server_lib::services::errors::OrderServiceError;
use joya_server_lib::services::order_service::{
    OrderDraft, OrderLineDraft, OrderService, OrderStatus,
};
use diesel::result;
use diesel_async::RunQueryDsl;

async fn setup() -> Result<(), result::Error> {
    let mut db_path = std::env::temp_dir();
    db_path.push("joya_order_service_tests.db");
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

fn line(product_id: i64, name: &str, price: f64, quantity: i64) -> OrderLineDraft {
    OrderLineDraft {
        product_id,
        name: name.to_string(),
        price,
        quantity,
    }
}

fn draft(items: Vec<OrderLineDraft>, total: Option<f64>) -> OrderDraft {
    OrderDraft {
        items,
        total,
        customer_name: Some("Ana".to_string()),
        customer_phone: Some("+573001112233".to_string()),
        customer_address: None,
        customer_email: None,
    }
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_success() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service
        .create_order(draft(
            vec![
                line(1, "Anillo de plata", 45.0, 2),
                line(2, "Collar de perlas", 120.0, 1),
            ],
            Some(210.0),
        ))
        .await;

    assert!(result.is_ok(), "Should create a valid order");
    assert!(result.unwrap() > 0);
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_rejects_empty_items() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service.create_order(draft(vec![], Some(0.0))).await;

    assert_eq!(result.err(), Some(OrderServiceError::EmptyOrder));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_rejects_zero_quantity() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 0)], Some(0.0)))
        .await;

    assert_eq!(result.err(), Some(OrderServiceError::InvalidItem));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_rejects_negative_item_price() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service
        .create_order(draft(vec![line(1, "Anillo", -45.0, 1)], Some(45.0)))
        .await;

    assert_eq!(result.err(), Some(OrderServiceError::InvalidItem));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_rejects_missing_total() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], None))
        .await;

    assert_eq!(result.err(), Some(OrderServiceError::InvalidTotal));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_rejects_negative_total() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], Some(-45.0)))
        .await;

    assert_eq!(result.err(), Some(OrderServiceError::InvalidTotal));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_order_rejects_non_finite_total() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], Some(f64::NAN)))
        .await;

    assert_eq!(result.err(), Some(OrderServiceError::InvalidTotal));
}

#[tokio::test]
#[serial_test::serial]
async fn test_new_orders_start_pending() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let order_id = service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], Some(45.0)))
        .await
        .expect("Failed to create order");

    let (order, _) = service
        .get_order_by_id(order_id)
        .await
        .expect("Failed to query order")
        .expect("Order not found");

    assert_eq!(order.status, "pending");
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_order_by_id_with_items() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let order_id = service
        .create_order(draft(
            vec![
                line(1, "Anillo de plata", 45.0, 2),
                line(2, "Collar de perlas", 120.0, 1),
            ],
            Some(210.0),
        ))
        .await
        .expect("Failed to create order");

    let (order, items) = service
        .get_order_by_id(order_id)
        .await
        .expect("Failed to query order")
        .expect("Order not found");

    assert_eq!(order.total, 210.0);
    assert_eq!(order.customer_name.as_deref(), Some("Ana"));
    assert_eq!(items.len(), 2);

    let ring = items
        .iter()
        .find(|i| i.product_name == "Anillo de plata")
        .expect("Missing line item");
    assert_eq!(ring.subtotal, 90.0);
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_order_by_id_unknown() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service.get_order_by_id(9999).await;

    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
#[serial_test::serial]
async fn test_list_orders_returns_page_and_total() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    for total in [45.0, 120.0, 210.0] {
        service
            .create_order(draft(vec![line(1, "Anillo", total, 1)], Some(total)))
            .await
            .expect("Failed to create order");
    }

    let (page, total) = service
        .list_orders(None, 2, 0)
        .await
        .expect("Failed to list orders");

    assert_eq!(page.len(), 2);
    assert_eq!(total, 3);

    // Every order on the page carries its items
    assert!(page.iter().all(|(_, items)| items.len() == 1));
}

#[tokio::test]
#[serial_test::serial]
async fn test_list_orders_unknown_status_matches_nothing() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], Some(45.0)))
        .await
        .expect("Failed to create order");

    let (page, total) = service
        .list_orders(Some("misplaced"), 10, 0)
        .await
        .expect("Failed to list orders");

    assert!(page.is_empty());
    assert_eq!(total, 0);
}

#[tokio::test]
#[serial_test::serial]
async fn test_list_orders_clamps_negative_paging() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], Some(45.0)))
        .await
        .expect("Failed to create order");

    let (page, total) = service
        .list_orders(None, -5, -10)
        .await
        .expect("Failed to list orders");

    assert!(page.is_empty());
    assert_eq!(total, 1);
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_order_status_success() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let order_id = service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], Some(45.0)))
        .await
        .expect("Failed to create order");

    let result = service.update_order_status(order_id, "confirmed").await;
    assert_eq!(result, Ok(OrderStatus::Confirmed));

    let (order, _) = service
        .get_order_by_id(order_id)
        .await
        .expect("Failed to query order")
        .expect("Order not found");
    assert_eq!(order.status, "confirmed");
    assert!(order.updated_at.is_some());
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_order_status_is_case_insensitive() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let order_id = service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], Some(45.0)))
        .await
        .expect("Failed to create order");

    let result = service.update_order_status(order_id, "SHIPPED").await;
    assert_eq!(result, Ok(OrderStatus::Shipped));
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_order_status_rejects_unknown_status() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let order_id = service
        .create_order(draft(vec![line(1, "Anillo", 45.0, 1)], Some(45.0)))
        .await
        .expect("Failed to create order");

    let result = service.update_order_status(order_id, "teleported").await;
    assert_eq!(result.err(), Some(OrderServiceError::InvalidStatus));
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_order_status_unknown_order() {
    setup().await.expect("Setup failed");

    let service = OrderService::new();

    let result = service.update_order_status(9999, "confirmed").await;
    assert_eq!(result.err(), Some(OrderServiceError::OrderNotFound));
}

#[test]
fn test_order_status_round_trip() {
    for status in [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ] {
        assert_eq!(status.as_str().parse::<OrderStatus>(), Ok(status));
    }

    assert!("teleported".parse::<OrderStatus>().is_err());
    assert!("".parse::<OrderStatus>().is_err());
}
