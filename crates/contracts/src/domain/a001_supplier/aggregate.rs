use serde::{Deserialize, Serialize};

use crate::shared::paging::PageResponse;

/// Поставщик в списке
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    /// Текущий долг перед поставщиком, в донгах
    pub debt: i64,
    pub is_active: bool,
}

/// Итоги по всей выборке поставщиков, считаются на сервере
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierTotals {
    pub debt: i64,
}

/// Страница поставщиков вместе с итогами по всей выборке
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierPage {
    #[serde(flatten)]
    pub page: PageResponse<Supplier>,
    #[serde(default)]
    pub totals: Option<SupplierTotals>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_page_with_totals() {
        let json = r#"{
            "items": [{
                "id": 7,
                "code": "NCC007",
                "name": "Công ty Minh Phát",
                "phone": null,
                "email": null,
                "address": null,
                "debt": 1200000,
                "is_active": true
            }],
            "current_page": 2,
            "page_count": 3,
            "total_count": 21,
            "totals": {"debt": 15400000}
        }"#;
        let page: SupplierPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page.current_page, 2);
        assert_eq!(page.totals.map(|t| t.debt), Some(15_400_000));
    }
}
