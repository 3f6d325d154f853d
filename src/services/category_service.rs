use crate::data::models::category::Category;
use crate::data::repos::implementors::category_repo::CategoryRepo;
use crate::services::errors::CategoryServiceError;

pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        CategoryService
    }

    pub async fn get_categories(&self) -> Result<Option<Vec<Category>>, CategoryServiceError> {
        let repo = CategoryRepo::new();
        repo.get_all()
            .await
            .map_err(|_| CategoryServiceError::DatabaseError)
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}
