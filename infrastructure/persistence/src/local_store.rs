use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use serde_json::Value;
use tracing::warn;

/// Client-local key-value store, the browser-localStorage analogue.
///
/// The in-memory map is the source of truth for the session; the optional
/// backing file is hydrated once at open and flushed best-effort on every
/// mutation. A corrupt backing file is discarded and the store starts empty.
#[derive(Clone)]
pub struct LocalStore {
    values: Arc<RwLock<HashMap<String, Value>>>,
    path: Option<PathBuf>,
}

impl LocalStore {
    /// A store with no backing file; state lives for the process only.
    pub fn in_memory() -> Self {
        Self {
            values: Arc::new(RwLock::new(HashMap::new())),
            path: None,
        }
    }

    /// Opens a file-backed store. A missing file starts empty; an unreadable
    /// or corrupt one is discarded with a warning.
    pub fn open(path: PathBuf) -> Self {
        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<HashMap<String, Value>>(&contents) {
                Ok(values) => values,
                Err(err) => {
                    warn!("Discarding corrupt store file {}: {err}", path.display());
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self {
            values: Arc::new(RwLock::new(values)),
            path: Some(path),
        }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned())
    }

    pub fn set(&self, key: &str, value: Value) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value);
            self.flush(&values);
        }
    }

    pub fn remove(&self, key: &str) {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
            self.flush(&values);
        }
    }

    fn flush(&self, values: &HashMap<String, Value>) {
        let Some(path) = &self.path else {
            return;
        };

        let serialized = match serde_json::to_string_pretty(values) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!("Failed to serialize store: {err}");
                return;
            }
        };

        if let Err(err) = std::fs::write(path, serialized) {
            warn!("Failed to flush store to {}: {err}", path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("shopwave-store-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn should_start_empty_in_memory() {
        let store = LocalStore::in_memory();
        assert!(store.get("shopwave-cart").is_none());
    }

    #[test]
    fn should_round_trip_values() {
        let store = LocalStore::in_memory();
        store.set("shopwave-cart", json!([{"productId": "prod_001", "quantity": 1}]));

        let value = store.get("shopwave-cart").unwrap();
        assert_eq!(value[0]["productId"], "prod_001");
    }

    #[test]
    fn should_remove_values() {
        let store = LocalStore::in_memory();
        store.set("shopwave-user", json!({"id": "u1", "email": "a@b.com"}));
        store.remove("shopwave-user");

        assert!(store.get("shopwave-user").is_none());
    }

    #[test]
    fn should_hydrate_from_backing_file() {
        let path = temp_path();
        {
            let store = LocalStore::open(path.clone());
            store.set("shopwave-browsing-history", json!(["prod_001"]));
        }

        let reopened = LocalStore::open(path.clone());
        let value = reopened.get("shopwave-browsing-history").unwrap();
        assert_eq!(value[0], "prod_001");

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn should_discard_corrupt_backing_file() {
        let path = temp_path();
        std::fs::write(&path, "not json{{{").unwrap();

        let store = LocalStore::open(path.clone());
        assert!(store.get("shopwave-cart").is_none());

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn should_start_empty_when_file_missing() {
        let store = LocalStore::open(temp_path());
        assert!(store.get("shopwave-orders").is_none());
    }
}
