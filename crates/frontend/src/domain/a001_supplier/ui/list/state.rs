use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierTotals};
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct SuppliersListState {
    pub items: Vec<Supplier>,
    /// Итоги сервера; без них строку итогов не показываем
    pub totals: Option<SupplierTotals>,
    pub keyword: String,
    /// Номер страницы, с 1
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub total_count: usize,
}

impl SuppliersListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            totals: None,
            keyword: String::new(),
            page: 1,
            page_size,
            page_count: 1,
            total_count: 0,
        }
    }
}

pub fn create_state(page_size: usize) -> RwSignal<SuppliersListState> {
    RwSignal::new(SuppliersListState::new(page_size))
}
