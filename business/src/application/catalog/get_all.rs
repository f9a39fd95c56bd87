use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_all::{GetProductsParams, GetProductsUseCase};
use crate::domain::logger::Logger;

pub struct GetProductsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductsUseCase for GetProductsUseCaseImpl {
    async fn execute(&self, params: GetProductsParams) -> Result<Vec<Product>, CatalogError> {
        let products = self.repository.get_all(&params.filter).await?;
        self.logger
            .debug(&format!("Listed {} catalog products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::model::{CatalogFilter, Category, NewProductProps};
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub CatalogRepo {}

        #[async_trait]
        impl CatalogRepository for CatalogRepo {
            async fn get_all(&self, filter: &CatalogFilter) -> Result<Vec<Product>, CatalogError>;
            async fn get_by_id(&self, id: &ProductId) -> Result<Product, CatalogError>;
            async fn get_categories(&self) -> Result<Vec<Category>, CatalogError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_product(id: &str) -> Product {
        Product::new(NewProductProps {
            id: ProductId::new(id),
            name: "Quantum-Core Laptop".to_string(),
            description: "Next-generation laptop".to_string(),
            price: Decimal::new(149999, 2),
            category: "electronics".to_string(),
            images: vec![],
            rating: Decimal::new(48, 1),
            reviews: vec![],
            stock: 50,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_products_from_repository() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|_| Ok(vec![sample_product("prod_001"), sample_product("prod_002")]));

        let use_case = GetProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsParams {
                filter: CatalogFilter::none(),
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_pass_filter_through_to_repository() {
        let mut mock_repo = MockCatalogRepo::new();
        mock_repo
            .expect_get_all()
            .withf(|filter| filter.category.as_deref() == Some("electronics"))
            .returning(|_| Ok(vec![sample_product("prod_001")]));

        let use_case = GetProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductsParams {
                filter: CatalogFilter {
                    category: Some("electronics".to_string()),
                    query: None,
                },
            })
            .await;

        assert!(result.is_ok());
    }
}
