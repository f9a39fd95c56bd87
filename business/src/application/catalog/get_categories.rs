use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CatalogError> {
        self.repository.get_categories().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{CatalogFilter, Product};
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self, filter: &CatalogFilter) -> Result<Vec<Product>, CatalogError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError>;
            async fn get_categories(&self) -> Result<Vec<Category>, CatalogError>;
        }
    }

    #[tokio::test]
    async fn should_return_categories() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo.expect_get_categories().returning(|| {
            Ok(vec![
                Category::new("1".to_string(), "Electronics".to_string(), "electronics".to_string()).unwrap(),
                Category::new("2".to_string(), "Fashion".to_string(), "fashion".to_string()).unwrap(),
            ])
        });

        let use_case = GetCategoriesUseCaseImpl {
            repository: Arc::new(mock_repo),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap().len(), 2);
    }
}
