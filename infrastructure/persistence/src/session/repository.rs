use async_trait::async_trait;
use tracing::warn;

use business::domain::auth::model::User;
use business::domain::auth::repository::SessionRepository;
use business::domain::errors::StorageError;

use super::entity::UserEntity;
use crate::local_store::LocalStore;

pub const SESSION_KEY: &str = "shopwave-user";

pub struct SessionRepositoryLocal {
    store: LocalStore,
}

impl SessionRepositoryLocal {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryLocal {
    async fn load(&self) -> Result<Option<User>, StorageError> {
        let Some(value) = self.store.get(SESSION_KEY) else {
            return Ok(None);
        };

        match serde_json::from_value::<UserEntity>(value) {
            Ok(entity) => Ok(Some(entity.into_domain())),
            Err(err) => {
                // Malformed persisted session means "no session".
                warn!("Discarding corrupt persisted session: {err}");
                self.store.remove(SESSION_KEY);
                Ok(None)
            }
        }
    }

    async fn save(&self, user: &User) -> Result<(), StorageError> {
        let value =
            serde_json::to_value(UserEntity::from_domain(user)).map_err(|_| StorageError::WriteFailed)?;
        self.store.set(SESSION_KEY, value);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(SESSION_KEY);
        Ok(())
    }
}
