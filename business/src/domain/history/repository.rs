use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::ProductId;

/// Session-store access for the browsing history. A corrupt persisted value
/// loads as an empty history.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn load(&self) -> Result<Vec<ProductId>, StorageError>;
    async fn save(&self, entries: &[ProductId]) -> Result<(), StorageError>;
}
