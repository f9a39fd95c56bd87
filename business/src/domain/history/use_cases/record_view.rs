use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::ProductId;

pub struct RecordViewParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RecordViewUseCase: Send + Sync {
    async fn execute(&self, params: RecordViewParams) -> Result<(), StorageError>;
}
