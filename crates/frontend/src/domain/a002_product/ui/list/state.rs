use contracts::domain::a002_product::aggregate::Product;
use contracts::shared::paging::page_count;
use leptos::prelude::*;

#[derive(Clone, Debug)]
pub struct ProductsListState {
    /// Отфильтрованная выборка целиком; по ней считаются итоги
    pub filtered: Vec<Product>,
    /// Текущая страница выборки
    pub items: Vec<Product>,
    pub keyword: String,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
}

impl ProductsListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filtered: Vec::new(),
            items: Vec::new(),
            keyword: String::new(),
            page: 1,
            page_size,
            page_count: 1,
        }
    }

    /// Фильтрует `all` по строке поиска и вырезает текущую страницу
    pub fn refresh(&mut self, all: &[Product]) {
        let keyword = self.keyword.trim().to_lowercase();
        self.filtered = all
            .iter()
            .filter(|p| {
                keyword.is_empty()
                    || p.name.to_lowercase().contains(&keyword)
                    || p.sku.to_lowercase().contains(&keyword)
            })
            .cloned()
            .collect();

        self.page_count = page_count(self.filtered.len(), self.page_size);
        self.page = self.page.clamp(1, self.page_count);
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(self.filtered.len());
        self.items = self.filtered.get(start..end).unwrap_or(&[]).to_vec();
    }
}

pub fn create_state(page_size: usize) -> RwSignal<ProductsListState> {
    RwSignal::new(ProductsListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: usize, name: &str) -> Product {
        Product {
            id: id.to_string(),
            sku: format!("SP{:04}", id),
            name: name.to_string(),
            image_url: None,
            category_name: None,
            price: 10_000,
            stock: 1,
        }
    }

    #[test]
    fn test_refresh_pages_and_filters() {
        let all: Vec<Product> = (1..=25).map(|i| product(i, "Áo thun")).collect();
        let mut state = ProductsListState::new(10);
        state.page = 3;
        state.refresh(&all);
        assert_eq!(state.page_count, 3);
        assert_eq!(state.items.len(), 5);
        assert_eq!(state.filtered.len(), 25);

        state.keyword = "sp0001".to_string();
        state.refresh(&all);
        // SP0001, SP0010..SP0019
        assert_eq!(state.filtered.len(), 11);
        assert_eq!(state.page, 2);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_refresh_on_empty_list() {
        let mut state = ProductsListState::new(10);
        state.refresh(&[]);
        assert_eq!(state.page, 1);
        assert!(state.items.is_empty());
    }
}
