//! Запросы списков к REST-бэкенду

use contracts::shared::paging::PageQuery;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

const BACKEND_PORT: u16 = 3000;

/// Адрес бэкенда: хост страницы, порт 3000.
/// Без `window` — пустая строка, пути остаются относительными.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// URL страницы списка: `path?page=..&page_size=..&keyword=..`
pub fn page_url(path: &str, query: &PageQuery) -> Result<String, String> {
    let qs = serde_qs::to_string(query).map_err(|e| format!("Failed to encode query: {}", e))?;
    Ok(format!("{}?{}", api_url(path), qs))
}

/// GET одной страницы списка
pub async fn fetch_page<R: DeserializeOwned>(path: &str, query: &PageQuery) -> Result<R, String> {
    let url = page_url(path, query)?;
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", path, response.status()));
    }

    response
        .json::<R>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
