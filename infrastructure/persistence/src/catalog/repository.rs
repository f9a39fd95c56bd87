use async_trait::async_trait;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{CatalogFilter, Category, Product};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::shared::value_objects::ProductId;

use super::seed;

/// Static in-memory catalog store. Lookup and filtering only; products are
/// immutable within a session.
pub struct CatalogRepositoryStatic {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogRepositoryStatic {
    pub fn new() -> Result<Self, CatalogError> {
        Ok(Self {
            products: seed::products()?,
            categories: seed::categories()?,
        })
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryStatic {
    async fn get_all(&self, filter: &CatalogFilter) -> Result<Vec<Product>, CatalogError> {
        Ok(self
            .products
            .iter()
            .filter(|product| filter.matches(product))
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.id == *id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    async fn get_categories(&self) -> Result<Vec<Category>, CatalogError> {
        Ok(self.categories.clone())
    }
}
