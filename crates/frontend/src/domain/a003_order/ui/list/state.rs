use contracts::domain::a003_order::aggregate::{Order, OrderTotals};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub items: Vec<Order>,
    pub totals: Option<OrderTotals>,
    pub keyword: String,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_count: usize,
    /// Выбранные заказы; переживают смену страницы
    pub selected_ids: Vec<String>,
}

impl OrdersListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            totals: None,
            keyword: String::new(),
            page: 1,
            page_size,
            page_count: 1,
            total_count: 0,
            selected_ids: Vec::new(),
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::new(page_size))
}
