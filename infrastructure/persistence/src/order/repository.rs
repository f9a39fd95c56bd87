use async_trait::async_trait;
use tracing::warn;

use business::domain::errors::StorageError;
use business::domain::order::model::Order;
use business::domain::order::repository::OrderRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::OrderEntity;
use crate::local_store::LocalStore;

pub const ORDERS_KEY: &str = "shopwave-orders";

pub struct OrderRepositoryLocal {
    store: LocalStore,
}

impl OrderRepositoryLocal {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    fn load_all(&self) -> Vec<OrderEntity> {
        let Some(value) = self.store.get(ORDERS_KEY) else {
            return vec![];
        };

        match serde_json::from_value::<Vec<OrderEntity>>(value) {
            Ok(entities) => entities,
            Err(err) => {
                warn!("Discarding corrupt persisted orders: {err}");
                self.store.remove(ORDERS_KEY);
                vec![]
            }
        }
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryLocal {
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, StorageError> {
        Ok(self
            .load_all()
            .into_iter()
            .filter(|entity| entity.user_id == user_id.as_str())
            .map(|entity| entity.into_domain())
            .collect())
    }

    async fn append(&self, order: &Order) -> Result<(), StorageError> {
        let mut entities = self.load_all();
        entities.push(OrderEntity::from_domain(order));
        let value = serde_json::to_value(entities).map_err(|_| StorageError::WriteFailed)?;
        self.store.set(ORDERS_KEY, value);
        Ok(())
    }
}
