use contracts::domain::a002_product::aggregate::Product;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Все товары; справочник небольшой, страницы режутся на клиенте
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = Request::get(&api_url("/api/products"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch products: {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
