use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::CartItem;

/// Session-store access for the cart list. Mutations always write the full
/// resulting list; a corrupt persisted value loads as an empty cart.
#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn load(&self) -> Result<Vec<CartItem>, StorageError>;
    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError>;
}
