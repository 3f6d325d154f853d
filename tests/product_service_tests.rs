use joya_server_lib::data::database::Database;
use joya_server_lib::services::errors::ProductServiceError;
use joya_server_lib::services::product_service::{ProductDraft, ProductService};
use diesel::result;
use diesel_async::RunQueryDsl;

async fn setup() -> Result<(), result::Error> {
    let mut db_path = std::env::temp_dir();
    db_path.push("joya_product_service_tests.db");
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

fn draft(name: &str, category: &str, price: Option<f64>) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: category.to_string(),
        price,
        original_price: None,
        image: "/images/test.jpg".to_string(),
        images: None,
        description: "Test description".to_string(),
        material: "Plata 925".to_string(),
        stone: "Perla".to_string(),
        size: "7".to_string(),
        in_stock: true,
        featured: false,
    }
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_success() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service
        .create_product(draft("Anillo de plata", "rings", Some(45.0)))
        .await;

    assert!(result.is_ok(), "Should create a valid product");

    let product = service
        .get_product_by_id(result.unwrap())
        .await
        .expect("Failed to query product")
        .expect("Product not found");
    assert_eq!(product.name, "Anillo de plata");
    assert_eq!(product.price, 45.0);
    assert_eq!(product.material, "Plata 925");
    assert!(product.in_stock);
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_trims_name_and_category() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let product_id = service
        .create_product(draft("  Anillo de plata  ", "  rings ", Some(45.0)))
        .await
        .expect("Failed to create product");

    let product = service
        .get_product_by_id(product_id)
        .await
        .expect("Failed to query product")
        .expect("Product not found");
    assert_eq!(product.name, "Anillo de plata");
    assert_eq!(product.category, "rings");
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_rejects_blank_name() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service.create_product(draft("   ", "rings", Some(45.0))).await;

    assert_eq!(
        result.err(),
        Some(ProductServiceError::MissingRequiredFields)
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_rejects_blank_category() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service.create_product(draft("Anillo", "", Some(45.0))).await;

    assert_eq!(
        result.err(),
        Some(ProductServiceError::MissingRequiredFields)
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_rejects_missing_image() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let mut no_image = draft("Anillo", "rings", Some(45.0));
    no_image.image = String::new();

    let result = service.create_product(no_image).await;

    assert_eq!(
        result.err(),
        Some(ProductServiceError::MissingRequiredFields)
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_rejects_missing_price() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service.create_product(draft("Anillo", "rings", None)).await;

    assert_eq!(
        result.err(),
        Some(ProductServiceError::MissingRequiredFields)
    );
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_rejects_negative_price() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service
        .create_product(draft("Anillo", "rings", Some(-1.0)))
        .await;

    assert_eq!(result.err(), Some(ProductServiceError::InvalidPrice));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_rejects_non_finite_price() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service
        .create_product(draft("Anillo", "rings", Some(f64::INFINITY)))
        .await;

    assert_eq!(result.err(), Some(ProductServiceError::InvalidPrice));
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_defaults_gallery_to_cover_image() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let product_id = service
        .create_product(draft("Anillo", "rings", Some(45.0)))
        .await
        .expect("Failed to create product");

    let product = service
        .get_product_by_id(product_id)
        .await
        .expect("Failed to query product")
        .expect("Product not found");

    let gallery: Vec<String> =
        serde_json::from_str(product.images.as_deref().expect("Gallery not stored")).unwrap();
    assert_eq!(gallery, vec!["/images/test.jpg"]);
}

#[tokio::test]
#[serial_test::serial]
async fn test_create_product_keeps_explicit_gallery() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let mut with_gallery = draft("Anillo", "rings", Some(45.0));
    with_gallery.images = Some(vec![
        "/images/anillo-1.jpg".to_string(),
        "/images/anillo-2.jpg".to_string(),
    ]);

    let product_id = service
        .create_product(with_gallery)
        .await
        .expect("Failed to create product");

    let product = service
        .get_product_by_id(product_id)
        .await
        .expect("Failed to query product")
        .expect("Product not found");

    let gallery: Vec<String> =
        serde_json::from_str(product.images.as_deref().expect("Gallery not stored")).unwrap();
    assert_eq!(gallery.len(), 2);
    assert_eq!(gallery[0], "/images/anillo-1.jpg");
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_products_empty_catalog() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service.get_products(None, false, None).await;

    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_products_narrows_by_filters() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    service
        .create_product(draft("Anillo de plata", "rings", Some(45.0)))
        .await
        .expect("Failed to create product");

    let mut featured = draft("Collar de perlas", "necklaces", Some(120.0));
    featured.featured = true;
    service
        .create_product(featured)
        .await
        .expect("Failed to create product");

    let by_category = service
        .get_products(Some("rings"), false, None)
        .await
        .expect("Query failed")
        .expect("No products found");
    assert_eq!(by_category.len(), 1);
    assert_eq!(by_category[0].category, "rings");

    let by_featured = service
        .get_products(None, true, None)
        .await
        .expect("Query failed")
        .expect("No products found");
    assert_eq!(by_featured.len(), 1);
    assert!(by_featured[0].featured);

    let by_term = service
        .get_products(None, false, Some("perla"))
        .await
        .expect("Query failed")
        .expect("No products found");
    assert_eq!(by_term.len(), 1);
    assert_eq!(by_term[0].name, "Collar de perlas");
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_products_search_matches_material() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let mut gold = draft("Anillo clásico", "rings", Some(350.0));
    gold.material = "Oro 18k".to_string();
    service
        .create_product(gold)
        .await
        .expect("Failed to create product");

    service
        .create_product(draft("Anillo de plata", "rings", Some(45.0)))
        .await
        .expect("Failed to create product");

    let hits = service
        .get_products(None, false, Some("oro"))
        .await
        .expect("Query failed")
        .expect("No products found");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Anillo clásico");
}

#[tokio::test]
#[serial_test::serial]
async fn test_get_product_by_id_unknown() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service.get_product_by_id(9999).await;

    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_product_replaces_all_fields() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let mut original = draft("Anillo de plata", "rings", Some(45.0));
    original.original_price = Some(60.0);
    let product_id = service
        .create_product(original)
        .await
        .expect("Failed to create product");

    // The update omits originalPrice, which clears it
    let mut replacement = draft("Anillo de plata 925", "rings", Some(55.0));
    replacement.in_stock = false;
    service
        .update_product(product_id, replacement)
        .await
        .expect("Failed to update product");

    let product = service
        .get_product_by_id(product_id)
        .await
        .expect("Failed to query product")
        .expect("Product not found");
    assert_eq!(product.name, "Anillo de plata 925");
    assert_eq!(product.price, 55.0);
    assert_eq!(product.original_price, None);
    assert!(!product.in_stock);
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_product_unknown() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service
        .update_product(9999, draft("Anillo", "rings", Some(45.0)))
        .await;

    assert_eq!(result.err(), Some(ProductServiceError::ProductNotFound));
}

#[tokio::test]
#[serial_test::serial]
async fn test_update_product_rejects_invalid_price() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let product_id = service
        .create_product(draft("Anillo", "rings", Some(45.0)))
        .await
        .expect("Failed to create product");

    let result = service
        .update_product(product_id, draft("Anillo", "rings", Some(-5.0)))
        .await;

    assert_eq!(result.err(), Some(ProductServiceError::InvalidPrice));
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_product_success() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let product_id = service
        .create_product(draft("Anillo", "rings", Some(45.0)))
        .await
        .expect("Failed to create product");

    service
        .delete_product(product_id)
        .await
        .expect("Failed to delete product");

    let gone = service
        .get_product_by_id(product_id)
        .await
        .expect("Failed to query product");
    assert!(gone.is_none());
}

#[tokio::test]
#[serial_test::serial]
async fn test_delete_product_unknown() {
    setup().await.expect("Setup failed");

    let service = ProductService::new();

    let result = service.delete_product(9999).await;

    assert_eq!(result.err(), Some(ProductServiceError::ProductNotFound));
}
