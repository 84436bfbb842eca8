use contracts::domain::a001_supplier::aggregate::SupplierPage;
use contracts::shared::paging::PageQuery;

use crate::shared::api_utils::fetch_page;

/// Страница поставщиков с итогами по всей выборке
pub async fn fetch_suppliers(query: &PageQuery) -> Result<SupplierPage, String> {
    fetch_page("/api/suppliers", query).await
}
