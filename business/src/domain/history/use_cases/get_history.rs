use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::ProductId;

/// Read-only accessor; callers receive their own copy of the ordered
/// sequence and cannot mutate the tracked state.
#[async_trait]
pub trait GetHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProductId>, StorageError>;
}
