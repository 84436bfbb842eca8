//! Модель представления таблицы
//!
//! Пересчитывается целиком на каждое изменение входных данных: видимые
//! колонки с ширинами, строки, итоги и полоса страниц.

use super::column::{ColumnDescriptor, DisplayValue, TableRow};
use super::config::DataTableConfig;
use super::render_state::{PageStrip, RenderState};
use super::summary::{summarize, SummaryOverride, SummaryStyle};
use super::visibility::ColumnVisibility;
use super::width::allocate_widths;

/// Входные данные одной отрисовки
pub struct ViewInputs<'a, T> {
    pub columns: &'a [ColumnDescriptor<T>],
    /// Строки текущей страницы
    pub rows: &'a [T],
    /// Строки для итогов; обычно вся выборка
    pub summary_rows: &'a [T],
    pub loading: bool,
    pub current_page: usize,
    pub page_count: usize,
    pub summary_override: Option<&'a SummaryOverride>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleColumn {
    pub index: usize,
    pub title: String,
    pub width: Option<String>,
    pub fixed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    /// Ключ для отрисовки; у строк без id — `row-{позиция}`
    pub key: String,
    pub id: Option<String>,
    pub cells: Vec<DisplayValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableViewModel {
    pub state: RenderState,
    pub columns: Vec<VisibleColumn>,
    pub rows: Vec<RowModel>,
    /// По ячейке на видимую колонку
    pub summary: Option<Vec<Option<String>>>,
    pub pages: Option<PageStrip>,
}

impl TableViewModel {
    pub fn derive<T: TableRow>(
        inputs: &ViewInputs<'_, T>,
        visibility: &ColumnVisibility,
        config: &DataTableConfig,
    ) -> Self {
        let state = RenderState::derive(inputs.loading, inputs.rows.len());

        let columns: Vec<VisibleColumn> = allocate_widths(inputs.columns, visibility)
            .into_iter()
            .map(|allocated| VisibleColumn {
                index: allocated.index,
                title: inputs.columns[allocated.index].title_text(),
                width: allocated.css(),
                fixed: allocated.fixed,
            })
            .collect();

        if state != RenderState::Populated {
            return Self {
                state,
                columns,
                rows: Vec::new(),
                summary: None,
                pages: None,
            };
        }

        let rows = inputs
            .rows
            .iter()
            .enumerate()
            .map(|(position, row)| {
                let id = row.row_id().filter(|id| !id.is_empty());
                RowModel {
                    key: id.clone().unwrap_or_else(|| format!("row-{}", position)),
                    id,
                    cells: columns
                        .iter()
                        .map(|c| inputs.columns[c.index].value(row))
                        .collect(),
                }
            })
            .collect();

        let visible_indices: Vec<usize> = columns.iter().map(|c| c.index).collect();
        let style = SummaryStyle {
            currency_marker: &config.currency_marker,
            locale: config.locale,
        };
        let summary = summarize(
            inputs.columns,
            &visible_indices,
            inputs.summary_rows,
            &style,
            inputs.summary_override,
        )
        .map(|mut cells| {
            if let Some(first) = cells.first_mut() {
                if first.is_none() {
                    *first = Some(config.summary_label.clone());
                }
            }
            cells
        });

        Self {
            state,
            columns,
            rows,
            summary,
            pages: PageStrip::build(inputs.current_page, inputs.page_count),
        }
    }

    pub fn shows_header(&self) -> bool {
        self.state.shows_header()
    }

    /// id строк, загруженных в таблицу сейчас
    pub fn loaded_ids(&self) -> Vec<String> {
        self.rows.iter().filter_map(|r| r.id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::storage::MemoryStore;

    #[derive(Clone)]
    struct Order {
        id: Option<u32>,
        customer: &'static str,
        total: &'static str,
    }

    impl TableRow for Order {
        fn row_id(&self) -> Option<String> {
            self.id.map(|id| id.to_string())
        }
    }

    fn columns() -> Vec<ColumnDescriptor<Order>> {
        vec![
            ColumnDescriptor::new("Khách hàng", |o: &Order| o.customer.into()).width("60%"),
            ColumnDescriptor::new("Tổng tiền", |o: &Order| o.total.into())
                .width("40%")
                .summarizable(),
        ]
    }

    fn orders() -> Vec<Order> {
        vec![
            Order { id: Some(1), customer: "An", total: "1.200 ₫" },
            Order { id: Some(2), customer: "Bình", total: "800 ₫" },
            Order { id: None, customer: "Chi", total: "-" },
        ]
    }

    fn inputs<'a>(
        columns: &'a [ColumnDescriptor<Order>],
        rows: &'a [Order],
        loading: bool,
    ) -> ViewInputs<'a, Order> {
        ViewInputs {
            columns,
            rows,
            summary_rows: rows,
            loading,
            current_page: 1,
            page_count: 5,
            summary_override: None,
        }
    }

    #[test]
    fn test_empty_dataset_has_no_header_or_summary() {
        let cols = columns();
        let vm = TableViewModel::derive(&inputs(&cols, &[], false), &ColumnVisibility::all(2), &DataTableConfig::default());
        assert_eq!(vm.state, RenderState::Empty);
        assert!(!vm.shows_header());
        assert!(vm.summary.is_none());
        assert!(vm.pages.is_none());
    }

    #[test]
    fn test_loading_hides_everything_but_columns() {
        let cols = columns();
        let rows = orders();
        let vm = TableViewModel::derive(&inputs(&cols, &rows, true), &ColumnVisibility::all(2), &DataTableConfig::default());
        assert_eq!(vm.state, RenderState::Loading);
        assert!(vm.rows.is_empty());
        assert!(vm.summary.is_none());
        assert!(vm.pages.is_none());
    }

    #[test]
    fn test_populated_view() {
        let cols = columns();
        let rows = orders();
        let vm = TableViewModel::derive(&inputs(&cols, &rows, false), &ColumnVisibility::all(2), &DataTableConfig::default());
        assert!(vm.shows_header());
        assert_eq!(vm.columns[1].width.as_deref(), Some("40%"));
        assert_eq!(vm.rows[2].key, "row-2");
        assert_eq!(vm.rows[2].id, None);
        assert_eq!(vm.loaded_ids(), vec!["1".to_string(), "2".to_string()]);
        assert_eq!(
            vm.summary,
            Some(vec![Some("Tổng cộng".to_string()), Some("2.000 ₫".to_string())])
        );
        assert_eq!(vm.pages.as_ref().map(|p| p.links.len()), Some(5));
    }

    #[test]
    fn test_summary_uses_all_rows_not_page() {
        let cols = columns();
        let all = orders();
        let page = &all[..1];
        let mut i = inputs(&cols, page, false);
        i.summary_rows = &all;
        let vm = TableViewModel::derive(&i, &ColumnVisibility::all(2), &DataTableConfig::default());
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.summary.unwrap()[1].as_deref(), Some("2.000 ₫"));
    }

    #[test]
    fn test_server_totals_replace_page_sum() {
        let cols = columns();
        let all = orders();
        let page = &all[..1];
        let mut precomputed = SummaryOverride::new();
        precomputed.insert(1, "2.000 ₫".to_string());
        let mut i = inputs(&cols, page, false);
        i.summary_override = Some(&precomputed);
        let vm = TableViewModel::derive(&i, &ColumnVisibility::all(2), &DataTableConfig::default());
        let summary = vm.summary.unwrap();
        assert_eq!(summary[0].as_deref(), Some("Tổng cộng"));
        assert_eq!(summary[1].as_deref(), Some("2.000 ₫"));
        assert_ne!(summary[1].as_deref(), Some("1.200 ₫"));
    }

    #[test]
    fn test_empty_override_hides_summary() {
        let cols = columns();
        let rows = orders();
        let precomputed = SummaryOverride::new();
        let mut i = inputs(&cols, &rows[..1], false);
        i.summary_override = Some(&precomputed);
        let vm = TableViewModel::derive(&i, &ColumnVisibility::all(2), &DataTableConfig::default());
        assert!(vm.summary.is_none());
        assert_eq!(vm.rows.len(), 1);
    }

    #[test]
    fn test_hidden_column_widths_flow_to_visible() {
        let cols = columns();
        let rows = orders();
        let store = MemoryStore::new();
        let mut visibility = ColumnVisibility::load(&store, Some("k".to_string()), 2);
        visibility.toggle(1, &store);
        let vm = TableViewModel::derive(&inputs(&cols, &rows, false), &visibility, &DataTableConfig::default());
        assert_eq!(vm.columns.len(), 1);
        assert_eq!(vm.columns[0].width.as_deref(), Some("100%"));
        assert!(vm.summary.is_none());
        assert_eq!(vm.rows[0].cells.len(), 1);
    }
}
