use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::paging::PageResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pending => "Chờ xử lý",
            Self::Confirmed => "Đã xác nhận",
            Self::Shipping => "Đang giao",
            Self::Completed => "Hoàn thành",
            Self::Cancelled => "Đã hủy",
        }
    }
}

/// Заказ в списке
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub code: String,
    pub customer_name: String,
    pub branch_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    pub item_count: i64,
    /// Сумма заказа, в донгах
    pub total: i64,
}

/// Итоги по всей выборке, считаются на сервере
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderTotals {
    pub item_count: i64,
    pub total: i64,
}

/// Страница заказов вместе с итогами по всей выборке
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPage {
    #[serde(flatten)]
    pub page: PageResponse<Order>,
    #[serde(default)]
    pub totals: Option<OrderTotals>,
}
