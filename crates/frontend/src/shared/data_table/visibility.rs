//! Видимость колонок с сохранением по имени таблицы
//!
//! Хранится JSON-массив индексов видимых колонок под ключом
//! `"datatable_visible_columns_" + имя таблицы`. Таблица без имени
//! запоминает видимость только на время жизни компонента.

use std::collections::BTreeSet;

use super::error::DataTableError;
use super::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnVisibility {
    storage_key: Option<String>,
    column_count: usize,
    visible: BTreeSet<usize>,
}

impl ColumnVisibility {
    /// Все колонки видимы, без сохранения
    pub fn all(column_count: usize) -> Self {
        Self {
            storage_key: None,
            column_count,
            visible: (0..column_count).collect(),
        }
    }

    /// Читает сохранённую видимость. Любая ошибка чтения или разбора даёт
    /// "все колонки видимы".
    pub fn load(store: &dyn KeyValueStore, storage_key: Option<String>, column_count: usize) -> Self {
        let Some(key) = storage_key.filter(|k| !k.is_empty()) else {
            return Self::all(column_count);
        };

        let mut visibility = Self::all(column_count);
        match read_indices(store, &key) {
            Ok(Some(indices)) => {
                let restored: BTreeSet<usize> =
                    indices.into_iter().filter(|&i| i < column_count).collect();
                // Пустой набор после фильтрации не восстанавливаем
                if !restored.is_empty() {
                    visibility.visible = restored;
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("{}; showing all columns", e),
        }
        visibility.storage_key = Some(key);
        visibility
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.contains(&index)
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible.iter().copied().collect()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Переключает колонку и сохраняет результат.
    ///
    /// Последнюю видимую колонку скрыть нельзя; возвращает `false`, если
    /// ничего не изменилось.
    pub fn toggle(&mut self, index: usize, store: &dyn KeyValueStore) -> bool {
        if index >= self.column_count {
            return false;
        }
        if self.visible.contains(&index) {
            if self.visible.len() == 1 {
                return false;
            }
            self.visible.remove(&index);
        } else {
            self.visible.insert(index);
        }
        log::debug!("column {} visible={}", index, self.visible.contains(&index));
        self.persist(store);
        true
    }

    /// Приводит набор к новому числу колонок, если вызывающий код сменил описания
    pub fn resize(&mut self, column_count: usize) {
        if column_count == self.column_count {
            return;
        }
        if column_count > self.column_count {
            self.visible.extend(self.column_count..column_count);
        } else {
            self.visible.retain(|&i| i < column_count);
            if self.visible.is_empty() {
                self.visible = (0..column_count).collect();
            }
        }
        self.column_count = column_count;
    }

    fn persist(&self, store: &dyn KeyValueStore) {
        let Some(key) = &self.storage_key else {
            return;
        };
        let indices = self.visible_indices();
        let json = match serde_json::to_string(&indices) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("failed to encode visible columns: {}", e);
                return;
            }
        };
        if let Err(e) = store.set(key, &json) {
            log::warn!("{}", e);
        }
    }
}

fn read_indices(store: &dyn KeyValueStore, key: &str) -> Result<Option<Vec<usize>>, DataTableError> {
    let Some(json) = store.get(key)? else {
        return Ok(None);
    };
    serde_json::from_str::<Vec<usize>>(&json)
        .map(Some)
        .map_err(|source| DataTableError::VisibilityDecode {
            key: key.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::storage::MemoryStore;

    const KEY: &str = "datatable_visible_columns_Suppliers";

    #[test]
    fn test_defaults_to_all_columns() {
        let store = MemoryStore::new();
        let v = ColumnVisibility::load(&store, Some(KEY.to_string()), 4);
        assert_eq!(v.visible_indices(), vec![0, 1, 2, 3]);

        let v = ColumnVisibility::load(&store, None, 3);
        assert_eq!(v.visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_round_trip_for_named_table() {
        let store = MemoryStore::new();
        let mut v = ColumnVisibility::load(&store, Some(KEY.to_string()), 5);
        assert!(v.toggle(2, &store));
        assert_eq!(store.get(KEY).unwrap().as_deref(), Some("[0,1,3,4]"));

        let restored = ColumnVisibility::load(&store, Some(KEY.to_string()), 5);
        assert_eq!(restored.visible_indices(), vec![0, 1, 3, 4]);
        assert!(!restored.is_visible(2));
    }

    #[test]
    fn test_unnamed_table_is_not_persisted() {
        let store = MemoryStore::new();
        let mut v = ColumnVisibility::load(&store, None, 3);
        assert!(v.toggle(0, &store));
        assert!(!v.is_visible(0));
        assert_eq!(store.get(KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_value_shows_all() {
        let store = MemoryStore::new();
        store.set(KEY, "{oops").unwrap();
        let v = ColumnVisibility::load(&store, Some(KEY.to_string()), 3);
        assert_eq!(v.visible_indices(), vec![0, 1, 2]);

        store.set(KEY, r#"["a", "b"]"#).unwrap();
        let v = ColumnVisibility::load(&store, Some(KEY.to_string()), 3);
        assert_eq!(v.visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_out_of_range_indices_are_dropped() {
        let store = MemoryStore::new();
        store.set(KEY, "[1, 7, 9]").unwrap();
        let v = ColumnVisibility::load(&store, Some(KEY.to_string()), 3);
        assert_eq!(v.visible_indices(), vec![1]);

        store.set(KEY, "[7, 9]").unwrap();
        let v = ColumnVisibility::load(&store, Some(KEY.to_string()), 3);
        assert_eq!(v.visible_indices(), vec![0, 1, 2]);
    }

    #[test]
    fn test_last_visible_column_stays() {
        let store = MemoryStore::new();
        let mut v = ColumnVisibility::all(2);
        assert!(v.toggle(0, &store));
        assert!(!v.toggle(1, &store));
        assert_eq!(v.visible_indices(), vec![1]);
        assert!(!v.toggle(5, &store));
    }

    #[test]
    fn test_resize() {
        let mut v = ColumnVisibility::all(3);
        v.toggle(1, &MemoryStore::new());
        v.resize(5);
        assert_eq!(v.visible_indices(), vec![0, 2, 3, 4]);
        v.resize(1);
        assert_eq!(v.visible_indices(), vec![0]);
    }
}
