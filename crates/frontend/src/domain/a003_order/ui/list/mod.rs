mod state;

use contracts::domain::a003_order::aggregate::{Order, OrderStatus, OrderTotals};
use contracts::shared::paging::PageQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a003_order::api;
use crate::shared::components::table::{format_currency, format_number_int, NumberLocale};
use crate::shared::data_table::{
    BadgeTone, ColumnDescriptor, DataTable, DataTableConfig, DisplayValue, SummaryFormat,
    SummaryOverride, TableRow,
};
use crate::shared::icons::icon;
use state::create_state;

const TABLE_NAME: &str = "Orders";

const COLUMN_ITEM_COUNT: usize = 5;
const COLUMN_TOTAL: usize = 6;

impl TableRow for Order {
    fn row_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

fn status_tone(status: OrderStatus) -> BadgeTone {
    match status {
        OrderStatus::Pending => BadgeTone::Warning,
        OrderStatus::Confirmed => BadgeTone::Brand,
        OrderStatus::Shipping => BadgeTone::Brand,
        OrderStatus::Completed => BadgeTone::Success,
        OrderStatus::Cancelled => BadgeTone::Danger,
    }
}

fn order_columns(config: &DataTableConfig) -> Vec<ColumnDescriptor<Order>> {
    let marker = config.currency_marker.clone();
    let locale = config.locale;
    vec![
        ColumnDescriptor::new("Mã đơn", |o: &Order| o.code.clone().into()).width("12%"),
        ColumnDescriptor::new("Thời gian", |o: &Order| {
            o.created_at.format("%d/%m/%Y %H:%M").to_string().into()
        })
        .width("14%"),
        ColumnDescriptor::new("Khách hàng", |o: &Order| o.customer_name.clone().into()).width("22%"),
        ColumnDescriptor::new("Chi nhánh", |o: &Order| o.branch_name.clone().into()).width("14%"),
        ColumnDescriptor::new("Trạng thái", |o: &Order| {
            DisplayValue::badge(o.status.display_name(), status_tone(o.status))
        })
        .width("12%"),
        ColumnDescriptor::new("SL hàng", move |o: &Order| {
            format_number_int(o.item_count as f64, locale).into()
        })
        .width("10%")
        .numeric(|o: &Order| Some(o.item_count as f64))
        .summarizable()
        .summary_format(SummaryFormat::Integer),
        ColumnDescriptor::new("Tổng tiền", move |o: &Order| {
            format_currency(o.total as f64, &marker, locale).into()
        })
        .width("16%")
        .numeric(|o: &Order| Some(o.total as f64))
        .summarizable()
        .summary_format(SummaryFormat::Currency),
    ]
}

/// Итоги сервера по всей выборке, по индексам колонок; без них строка итогов скрыта
fn totals_override(
    totals: Option<&OrderTotals>,
    marker: &str,
    locale: NumberLocale,
) -> SummaryOverride {
    let mut cells = SummaryOverride::new();
    if let Some(totals) = totals {
        cells.insert(COLUMN_ITEM_COUNT, format_number_int(totals.item_count as f64, locale));
        cells.insert(COLUMN_TOTAL, format_currency(totals.total as f64, marker, locale));
    }
    cells
}

/// Список заказов
///
/// Выбор хранит страница: он нужен для массовых действий и не сбрасывается
/// при переходе между страницами.
#[component]
pub fn OrdersList() -> impl IntoView {
    let config = use_context::<DataTableConfig>().unwrap_or_default();
    let state = create_state(config.default_page_size);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let columns = order_columns(&config);
    let marker = config.currency_marker.clone();
    let locale = config.locale;

    let load_data = move || {
        let query = state.with_untracked(|s| {
            PageQuery::new(s.page, s.page_size).with_keyword(&s.keyword)
        });
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_orders(&query).await {
                Ok(result) => {
                    state.update(|s| {
                        s.items = result.page.items;
                        s.page = result.page.current_page;
                        s.page_count = result.page.page_count;
                        s.total_count = result.page.total_count;
                        s.totals = result.totals;
                    });
                }
                Err(e) => {
                    log::error!("orders: {}", e);
                    set_error.set(Some(format!("Không tải được danh sách đơn hàng: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    Effect::new(move |_| load_data());

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        load_data();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 1;
        });
        load_data();
    };

    let apply_search = move |keyword: String| {
        state.update(|s| {
            s.keyword = keyword;
            s.page = 1;
        });
        load_data();
    };

    let selected = Signal::derive(move || state.with(|s| s.selected_ids.clone()));
    let selected_count = move || state.with(|s| s.selected_ids.len());

    let summary_override = Signal::derive(move || {
        state.with(|s| Some(totals_override(s.totals.as_ref(), &marker, locale)))
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("orders")}
                    <h1 class="page__title">"Đơn hàng"</h1>
                    <span class="page__counter">{move || state.with(|s| s.total_count)}</span>
                </div>
                <div class="page__header-right">
                    <Show when=move || { selected_count() > 0 }>
                        <span class="page__selection">
                            {move || format!("Đã chọn {}", selected_count())}
                        </span>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| state.update(|s| s.selected_ids.clear())
                        >
                            {icon("x")}
                            " Bỏ chọn"
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        " Làm mới"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <DataTable
                name=TABLE_NAME
                columns=Signal::derive(move || columns.clone())
                rows=Signal::derive(move || state.with(|s| s.items.clone()))
                summary_override=summary_override
                loading=loading
                current_page=Signal::derive(move || state.with(|s| s.page))
                page_count=Signal::derive(move || state.with(|s| s.page_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(go_to_page)
                on_page_size_change=Callback::new(change_page_size)
                on_search=Callback::new(apply_search)
                selected=selected
                on_selection_change=Callback::new(move |ids: Vec<String>| {
                    state.update(|s| s.selected_ids = ids)
                })
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_override_targets_numeric_columns() {
        let config = DataTableConfig::default();
        let columns = order_columns(&config);
        assert_eq!(columns[COLUMN_ITEM_COUNT].title_text(), "SL hàng");
        assert_eq!(columns[COLUMN_TOTAL].title_text(), "Tổng tiền");

        let totals = OrderTotals {
            item_count: 1234,
            total: 2_500_000,
        };
        let cells = totals_override(Some(&totals), "₫", NumberLocale::VI);
        assert_eq!(cells.get(&COLUMN_ITEM_COUNT).map(String::as_str), Some("1.234"));
        assert_eq!(cells.get(&COLUMN_TOTAL).map(String::as_str), Some("2.500.000 ₫"));
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn test_missing_server_totals_hide_summary() {
        assert!(totals_override(None, "₫", NumberLocale::VI).is_empty());
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(status_tone(OrderStatus::Cancelled), BadgeTone::Danger);
        assert_eq!(status_tone(OrderStatus::Completed), BadgeTone::Success);
    }
}
