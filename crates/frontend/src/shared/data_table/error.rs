use thiserror::Error;

/// Сбои движка таблицы. Наружу не выходят: вызывающий код пишет
/// предупреждение в лог и откатывается к значению по умолчанию.
#[derive(Debug, Error)]
pub enum DataTableError {
    #[error("key-value storage is not available")]
    StorageUnavailable,

    #[error("failed to write key `{key}`")]
    StorageWrite { key: String },

    #[error("corrupt visible columns for `{key}`: {source}")]
    VisibilityDecode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
