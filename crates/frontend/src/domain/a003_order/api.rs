use contracts::domain::a003_order::aggregate::OrderPage;
use contracts::shared::paging::PageQuery;

use crate::shared::api_utils::fetch_page;

/// Страница заказов с итогами по всей выборке
pub async fn fetch_orders(query: &PageQuery) -> Result<OrderPage, String> {
    fetch_page("/api/orders", query).await
}
