use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

use super::errors::CatalogError;
use super::model::{CatalogFilter, Category, Product};

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_all(&self, filter: &CatalogFilter) -> Result<Vec<Product>, CatalogError>;
    async fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError>;
    async fn get_categories(&self) -> Result<Vec<Category>, CatalogError>;
}
