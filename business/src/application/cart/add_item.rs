use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Vec<CartItem>, CartError> {
        let mut cart = Cart::from_items(self.repository.load().await?);
        cart.add(params.product_id.clone(), params.quantity);

        // Persistence is best-effort: the in-memory list stays the source of
        // truth for the rest of the session.
        if self.repository.save(cart.items()).await.is_err() {
            self.logger
                .warn(&format!("Failed to persist cart after adding {}", params.product_id));
        }

        self.notifier.toast(
            "Added to cart!",
            "The item has been successfully added to your cart.",
        );

        Ok(cart.into_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::notifier::NavigationTarget;
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

    mock! {
        pub Notify {}

        impl Notifier for Notify {
            fn toast(&self, title: &str, description: &str);
            fn navigate(&self, target: NavigationTarget);
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

    fn toasting_notifier() -> Arc<dyn Notifier> {
        let mut notifier = MockNotify::new();
        notifier.expect_toast().returning(|_, _| ());
        notifier.expect_navigate().returning(|_| ());
        Arc::new(notifier)
    }

    fn item(id: &str, quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new(id),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_append_new_line_and_persist_full_list() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(vec![item("prod_002", 2)]));
        mock_repo
            .expect_save()
            .withf(|items| items.len() == 2 && items[1] == item("prod_001", 1))
            .returning(|_| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: toasting_notifier(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                product_id: ProductId::new("prod_001"),
                quantity: 1,
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_increment_existing_line() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(vec![item("prod_001", 2)]));
        mock_repo
            .expect_save()
            .withf(|items| items.len() == 1 && items[0].quantity == 5)
            .returning(|_| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: toasting_notifier(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                product_id: ProductId::new("prod_001"),
                quantity: 3,
            })
            .await;

        assert_eq!(result.unwrap()[0].quantity, 5);
    }

    #[tokio::test]
    async fn should_fire_added_toast() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(vec![]));
        mock_repo.expect_save().returning(|_| Ok(()));

        let mut notifier = MockNotify::new();
        notifier
            .expect_toast()
            .withf(|title, _| title == "Added to cart!")
            .times(1)
            .returning(|_, _| ());

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: Arc::new(notifier),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                product_id: ProductId::new("prod_001"),
                quantity: 1,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_even_when_persistence_write_fails() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(vec![]));
        mock_repo
            .expect_save()
            .returning(|_| Err(StorageError::WriteFailed));

        let use_case = AddCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            notifier: toasting_notifier(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                product_id: ProductId::new("prod_001"),
                quantity: 1,
            })
            .await;

        assert_eq!(result.unwrap().len(), 1);
    }
}
