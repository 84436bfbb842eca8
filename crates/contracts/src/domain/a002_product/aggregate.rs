use serde::{Deserialize, Serialize};

/// Товар в списке
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub image_url: Option<String>,
    pub category_name: Option<String>,
    /// Цена продажи, в донгах
    pub price: i64,
    pub stock: i64,
}
