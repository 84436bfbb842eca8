//! Контракт постраничной выборки списков
//!
//! Пагинация серверная: фронтенд передаёт номер страницы (с 1) и размер,
//! бэкенд возвращает одну страницу и метаданные.

use serde::{Deserialize, Serialize};

/// Параметры запроса страницы списка
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Номер страницы, начиная с 1
    pub page: usize,
    pub page_size: usize,
    /// Строка поиска; пустая строка не отправляется
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

impl PageQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            keyword: None,
        }
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        let trimmed = keyword.trim();
        self.keyword = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }
}

/// Одна страница списка
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub page_count: usize,
    pub total_count: usize,
}

/// Количество страниц для `total_count` записей. Пустой список — одна страница.
pub fn page_count(total_count: usize, page_size: usize) -> usize {
    if total_count == 0 || page_size == 0 {
        1
    } else {
        total_count.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_blank_keyword_is_dropped() {
        let query = PageQuery::new(0, 20).with_keyword("   ");
        assert_eq!(query.page, 1);
        assert_eq!(query.keyword, None);

        let query = PageQuery::new(2, 20).with_keyword(" abc ");
        assert_eq!(query.keyword.as_deref(), Some("abc"));
    }

    #[test]
    fn test_page_response_decodes_from_backend_json() {
        let json = r#"{"items":[1,2,3],"current_page":2,"page_count":4,"total_count":31}"#;
        let page: PageResponse<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.page_count, 4);
    }
}
