//! Хранилище ключ-значение для настроек таблиц
//!
//! Движок не обращается к localStorage напрямую: хранилище передаётся
//! через [`KeyValueStore`], в тестах используется [`MemoryStore`].

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::error::DataTableError;

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DataTableError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DataTableError>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// localStorage браузера
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, DataTableError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(DataTableError::StorageUnavailable)
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, DataTableError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| DataTableError::StorageUnavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DataTableError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| DataTableError::StorageWrite {
                key: key.to_string(),
            })
    }
}

/// Хранилище в памяти
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, DataTableError> {
        let items = self
            .items
            .lock()
            .map_err(|_| DataTableError::StorageUnavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DataTableError> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| DataTableError::StorageWrite {
                key: key.to_string(),
            })?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "[1,2]").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("[1,2]"));
    }
}
