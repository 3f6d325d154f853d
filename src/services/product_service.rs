use crate::data::models::product::{NewProduct, Product, UpdateProduct};
use crate::data::repos::implementors::product_repo::ProductRepo;
use crate::data::repos::traits::repository::Repository;
use crate::services::errors::ProductServiceError;

/// Incoming product payload, shared by create and full-replace update.
/// `price` stays optional until validation so a missing field reads as
/// "missing", not as zero. `images: None` falls back to the primary image.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: Option<f64>,
    pub original_price: Option<f64>,
    pub image: String,
    pub images: Option<Vec<String>>,
    pub description: String,
    pub material: String,
    pub stone: String,
    pub size: String,
    pub in_stock: bool,
    pub featured: bool,
}

pub struct ProductService;

impl ProductService {
    pub fn new() -> Self {
        ProductService
    }

    /// Catalog listing with the optional narrowing filters.
    pub async fn get_products(
        &self,
        category: Option<&str>,
        featured_only: bool,
        search: Option<&str>,
    ) -> Result<Option<Vec<Product>>, ProductServiceError> {
        let repo = ProductRepo::new();
        repo.search(category, featured_only, search)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)
    }

    pub async fn get_product_by_id(
        &self,
        product_id: i64,
    ) -> Result<Option<Product>, ProductServiceError> {
        let repo = ProductRepo::new();
        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)
    }

    /// Validates the draft and inserts it, returning the new product id.
    pub async fn create_product(&self, draft: ProductDraft) -> Result<i64, ProductServiceError> {
        let price = Self::validate(&draft)?;
        let images_json = Self::encode_images(&draft);

        let repo = ProductRepo::new();
        let new_product = NewProduct {
            name: draft.name.trim(),
            category: draft.category.trim(),
            price,
            original_price: draft.original_price,
            image: &draft.image,
            images: images_json.as_deref(),
            description: &draft.description,
            material: &draft.material,
            stone: &draft.stone,
            size: &draft.size,
            in_stock: draft.in_stock,
            featured: draft.featured,
        };

        repo.add(new_product)
            .await
            .map_err(|_| ProductServiceError::ProductCreationFailed)
    }

    /// Full replace of an existing product.
    pub async fn update_product(
        &self,
        product_id: i64,
        draft: ProductDraft,
    ) -> Result<(), ProductServiceError> {
        let price = Self::validate(&draft)?;

        let repo = ProductRepo::new();

        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)?;

        let images_json = Self::encode_images(&draft);
        let update = UpdateProduct {
            name: draft.name.trim(),
            category: draft.category.trim(),
            price,
            original_price: draft.original_price,
            image: &draft.image,
            images: images_json.as_deref(),
            description: &draft.description,
            material: &draft.material,
            stone: &draft.stone,
            size: &draft.size,
            in_stock: draft.in_stock,
            featured: draft.featured,
        };

        repo.update(product_id, update)
            .await
            .map_err(|_| ProductServiceError::ProductUpdateFailed)
    }

    pub async fn delete_product(&self, product_id: i64) -> Result<(), ProductServiceError> {
        let repo = ProductRepo::new();

        repo.get_by_id(product_id)
            .await
            .map_err(|_| ProductServiceError::DatabaseError)?
            .ok_or(ProductServiceError::ProductNotFound)?;

        repo.delete(product_id)
            .await
            .map_err(|_| ProductServiceError::ProductDeletionFailed)
    }

    fn validate(draft: &ProductDraft) -> Result<f64, ProductServiceError> {
        if draft.name.trim().is_empty()
            || draft.category.trim().is_empty()
            || draft.image.is_empty()
        {
            return Err(ProductServiceError::MissingRequiredFields);
        }

        let price = draft
            .price
            .ok_or(ProductServiceError::MissingRequiredFields)?;

        if !price.is_finite() || price < 0.0 {
            return Err(ProductServiceError::InvalidPrice);
        }

        Ok(price)
    }

    fn encode_images(draft: &ProductDraft) -> Option<String> {
        let gallery = draft
            .images
            .clone()
            .unwrap_or_else(|| vec![draft.image.clone()]);

        serde_json::to_string(&gallery).ok()
    }
}

impl Default for ProductService {
    fn default() -> Self {
        Self::new()
    }
}
