use async_trait::async_trait;

use crate::domain::errors::StorageError;

use super::model::User;

/// Session-store access for the current user. A malformed persisted session
/// loads as `None` rather than an error.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn load(&self) -> Result<Option<User>, StorageError>;
    async fn save(&self, user: &User) -> Result<(), StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
}
