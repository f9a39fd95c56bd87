use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_items::GetCartItemsUseCase;

pub struct GetCartItemsUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
}

#[async_trait]
impl GetCartItemsUseCase for GetCartItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<CartItem>, CartError> {
        Ok(self.repository.load().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::shared::value_objects::ProductId;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Vec<CartItem>, StorageError>;
            async fn save(&self, items: &[CartItem]) -> Result<(), StorageError>;
        }
    }

    #[tokio::test]
    async fn should_return_persisted_items() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| {
            Ok(vec![CartItem {
                product_id: ProductId::new("prod_001"),
                quantity: 2,
            }])
        });

        let use_case = GetCartItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
        };

        let items = use_case.execute().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }
}
