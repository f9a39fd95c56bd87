use async_trait::async_trait;
use tracing::warn;

use business::domain::cart::model::CartItem;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::StorageError;

use super::entity::CartItemEntity;
use crate::local_store::LocalStore;

pub const CART_KEY: &str = "shopwave-cart";

pub struct CartRepositoryLocal {
    store: LocalStore,
}

impl CartRepositoryLocal {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryLocal {
    async fn load(&self) -> Result<Vec<CartItem>, StorageError> {
        let Some(value) = self.store.get(CART_KEY) else {
            return Ok(vec![]);
        };

        match serde_json::from_value::<Vec<CartItemEntity>>(value) {
            Ok(entities) => Ok(entities.into_iter().map(|e| e.into_domain()).collect()),
            Err(err) => {
                // Corrupt persisted cart: reset to empty, never surface.
                warn!("Discarding corrupt persisted cart: {err}");
                self.store.remove(CART_KEY);
                Ok(vec![])
            }
        }
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        let entities: Vec<CartItemEntity> = items.iter().map(CartItemEntity::from_domain).collect();
        let value = serde_json::to_value(entities).map_err(|_| StorageError::WriteFailed)?;
        self.store.set(CART_KEY, value);
        Ok(())
    }
}
