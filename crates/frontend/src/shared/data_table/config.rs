use serde::Deserialize;

use crate::shared::components::table::NumberLocale;

/// Настройки таблиц приложения
///
/// Кладётся в контекст в `App`; таблица без контекста берёт значения по умолчанию.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataTableConfig {
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
    /// Префикс ключа видимых колонок, к нему добавляется имя таблицы
    pub storage_key_prefix: String,
    pub currency_marker: String,
    pub locale: NumberLocale,
    pub summary_label: String,
    pub empty_text: String,
    pub loading_text: String,
    pub search_placeholder: String,
}

impl Default for DataTableConfig {
    fn default() -> Self {
        Self {
            page_size_options: vec![10, 20, 50, 100],
            default_page_size: 20,
            storage_key_prefix: "datatable_visible_columns_".to_string(),
            currency_marker: "₫".to_string(),
            locale: NumberLocale::VI,
            summary_label: "Tổng cộng".to_string(),
            empty_text: "Không có dữ liệu".to_string(),
            loading_text: "Đang tải...".to_string(),
            search_placeholder: "Tìm kiếm...".to_string(),
        }
    }
}

impl DataTableConfig {
    /// Частичный JSON поверх значений по умолчанию; битый JSON — значения по умолчанию
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Self>(json) {
            Ok(mut config) => {
                if config.page_size_options.is_empty() {
                    config.page_size_options = Self::default().page_size_options;
                }
                if config.default_page_size == 0 {
                    config.default_page_size = config.page_size_options[0];
                }
                config
            }
            Err(e) => {
                log::warn!("invalid data table config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn storage_key(&self, table_name: &str) -> String {
        format!("{}{}", self.storage_key_prefix, table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DataTableConfig::from_json(r#"{"currency_marker": "VND", "page_size_options": []}"#);
        assert_eq!(config.currency_marker, "VND");
        assert_eq!(config.page_size_options, vec![10, 20, 50, 100]);
        assert_eq!(config.summary_label, "Tổng cộng");
    }

    #[test]
    fn test_locale_override() {
        let config = DataTableConfig::from_json(
            r#"{"locale": {"group_separator": " ", "decimal_separator": "."}}"#,
        );
        assert_eq!(config.locale.group_separator, ' ');
    }

    #[test]
    fn test_broken_json_falls_back() {
        assert_eq!(DataTableConfig::from_json("{not json"), DataTableConfig::default());
    }

    #[test]
    fn test_storage_key() {
        let config = DataTableConfig::default();
        assert_eq!(config.storage_key("Suppliers"), "datatable_visible_columns_Suppliers");
    }
}
