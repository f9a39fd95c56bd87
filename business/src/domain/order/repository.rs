use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;

/// Session-store access for placed orders. Append-only from the client's
/// perspective; a corrupt persisted list loads as empty.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn get_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, StorageError>;
    async fn append(&self, order: &Order) -> Result<(), StorageError>;
}
