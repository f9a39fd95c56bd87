use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_orders::{GetOrdersParams, GetOrdersUseCase};

pub struct GetOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrdersUseCase for GetOrdersUseCaseImpl {
    async fn execute(&self, params: GetOrdersParams) -> Result<Vec<Order>, OrderError> {
        let orders = self.repository.get_by_user(&params.user_id).await?;
        self.logger.debug(&format!(
            "Retrieved {} orders for user {}",
            orders.len(),
            params.user_id
        ));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::StorageError;
    use crate::domain::order::model::{OrderItem, ShippingAddress};
    use crate::domain::shared::value_objects::{ProductId, UserId};
    use mockall::mock;
    use rust_decimal::Decimal;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, StorageError>;
            async fn append(&self, order: &Order) -> Result<(), StorageError>;
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

    fn sample_order(user: &str) -> Order {
        Order::new(
            "abc123".to_string(),
            UserId::new(user),
            vec![OrderItem {
                product_id: ProductId::new("prod_005"),
                name: "AeroPress Coffee Maker".to_string(),
                quantity: 1,
                price: Decimal::new(3999, 2),
            }],
            ShippingAddress {
                name: "John Doe".to_string(),
                address: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                zip: "12345".to_string(),
            },
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_orders_for_user() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_user()
            .withf(|user_id| user_id.as_str() == "u1")
            .returning(|_| Ok(vec![sample_order("u1")]));

        let use_case = GetOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(GetOrdersParams {
                user_id: UserId::new("u1"),
            })
            .await
            .unwrap();

        assert_eq!(orders.len(), 1);
    }

    #[tokio::test]
    async fn should_return_empty_when_no_orders() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_get_by_user().returning(|_| Ok(vec![]));

        let use_case = GetOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(GetOrdersParams {
                user_id: UserId::new("u1"),
            })
            .await
            .unwrap();

        assert!(orders.is_empty());
    }
}
