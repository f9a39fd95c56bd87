use async_trait::async_trait;
use tracing::warn;

use business::domain::errors::StorageError;
use business::domain::history::repository::HistoryRepository;
use business::domain::shared::value_objects::ProductId;

use crate::local_store::LocalStore;

pub const HISTORY_KEY: &str = "shopwave-browsing-history";

/// Browsing history persists as a bare JSON array of product-id strings; no
/// entity mapping needed.
pub struct HistoryRepositoryLocal {
    store: LocalStore,
}

impl HistoryRepositoryLocal {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl HistoryRepository for HistoryRepositoryLocal {
    async fn load(&self) -> Result<Vec<ProductId>, StorageError> {
        let Some(value) = self.store.get(HISTORY_KEY) else {
            return Ok(vec![]);
        };

        match serde_json::from_value::<Vec<String>>(value) {
            Ok(ids) => Ok(ids.into_iter().map(ProductId::new).collect()),
            Err(err) => {
                warn!("Discarding corrupt browsing history: {err}");
                self.store.remove(HISTORY_KEY);
                Ok(vec![])
            }
        }
    }

    async fn save(&self, entries: &[ProductId]) -> Result<(), StorageError> {
        let ids: Vec<&str> = entries.iter().map(|id| id.as_str()).collect();
        let value = serde_json::to_value(ids).map_err(|_| StorageError::WriteFailed)?;
        self.store.set(HISTORY_KEY, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn should_round_trip_ordered_ids() {
        let repo = HistoryRepositoryLocal::new(LocalStore::in_memory());
        repo.save(&[ProductId::new("prod_002"), ProductId::new("prod_001")])
            .await
            .unwrap();

        let loaded = repo.load().await.unwrap();
        assert_eq!(loaded[0].as_str(), "prod_002");
        assert_eq!(loaded[1].as_str(), "prod_001");
    }

    #[tokio::test]
    async fn should_persist_as_plain_string_array() {
        let store = LocalStore::in_memory();
        let repo = HistoryRepositoryLocal::new(store.clone());
        repo.save(&[ProductId::new("prod_001")]).await.unwrap();

        assert_eq!(store.get(HISTORY_KEY).unwrap(), json!(["prod_001"]));
    }

    #[tokio::test]
    async fn should_reset_corrupt_history_to_empty() {
        let store = LocalStore::in_memory();
        store.set(HISTORY_KEY, json!("not-a-list"));

        let repo = HistoryRepositoryLocal::new(store.clone());
        assert!(repo.load().await.unwrap().is_empty());
        assert!(store.get(HISTORY_KEY).is_none());
    }
}
