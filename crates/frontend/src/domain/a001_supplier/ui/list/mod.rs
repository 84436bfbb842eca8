mod state;

use contracts::domain::a001_supplier::aggregate::{Supplier, SupplierTotals};
use contracts::shared::paging::PageQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a001_supplier::api;
use crate::shared::components::table::{format_currency, NumberLocale};
use crate::shared::data_table::{
    BadgeTone, ColumnDescriptor, DataTable, DataTableConfig, DisplayValue, SummaryOverride,
    TableRow,
};
use crate::shared::icons::icon;
use state::create_state;

const TABLE_NAME: &str = "Suppliers";

const COLUMN_DEBT: usize = 4;

impl TableRow for Supplier {
    fn row_id(&self) -> Option<String> {
        Some(self.id.to_string())
    }
}

fn supplier_columns(config: &DataTableConfig) -> Vec<ColumnDescriptor<Supplier>> {
    let marker = config.currency_marker.clone();
    let locale = config.locale;
    vec![
        ColumnDescriptor::new("Mã NCC", |s: &Supplier| s.code.clone().into()).width("12%"),
        ColumnDescriptor::new("Tên nhà cung cấp", |s: &Supplier| s.name.clone().into()).width("26%"),
        ColumnDescriptor::new("Điện thoại", |s: &Supplier| s.phone.clone().into()).width("14%"),
        ColumnDescriptor::new("Email", |s: &Supplier| s.email.clone().into()).width("18%"),
        ColumnDescriptor::new("Công nợ", move |s: &Supplier| {
            format_currency(s.debt as f64, &marker, locale).into()
        })
        .width("18%")
        .numeric(|s: &Supplier| Some(s.debt as f64))
        .summarizable(),
        ColumnDescriptor::new("Trạng thái", |s: &Supplier| {
            if s.is_active {
                DisplayValue::badge("Hoạt động", BadgeTone::Success)
            } else {
                DisplayValue::badge("Ngừng", BadgeTone::Neutral)
            }
        })
        .width("12%"),
    ]
}

/// Итоги сервера по всей выборке; без них строка итогов скрыта
fn totals_override(
    totals: Option<&SupplierTotals>,
    marker: &str,
    locale: NumberLocale,
) -> SummaryOverride {
    let mut cells = SummaryOverride::new();
    if let Some(totals) = totals {
        cells.insert(COLUMN_DEBT, format_currency(totals.debt as f64, marker, locale));
    }
    cells
}

#[component]
pub fn SuppliersList() -> impl IntoView {
    let config = use_context::<DataTableConfig>().unwrap_or_default();
    let state = create_state(config.default_page_size);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);

    let columns = supplier_columns(&config);
    let marker = config.currency_marker.clone();
    let locale = config.locale;

    let load_data = move || {
        let query = state.with_untracked(|s| {
            PageQuery::new(s.page, s.page_size).with_keyword(&s.keyword)
        });
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_suppliers(&query).await {
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
                    log::error!("suppliers: {}", e);
                    set_error.set(Some(format!("Không tải được danh sách nhà cung cấp: {}", e)));
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

    let summary_override = Signal::derive(move || {
        state.with(|s| Some(totals_override(s.totals.as_ref(), &marker, locale)))
    });

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("suppliers")}
                    <h1 class="page__title">"Nhà cung cấp"</h1>
                    <span class="page__counter">{move || state.with(|s| s.total_count)}</span>
                </div>
                <div class="page__header-right">
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
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_total_comes_from_server() {
        let config = DataTableConfig::default();
        let columns = supplier_columns(&config);
        assert_eq!(columns[COLUMN_DEBT].title_text(), "Công nợ");

        let totals = SupplierTotals { debt: 15_400_000 };
        let cells = totals_override(Some(&totals), "₫", NumberLocale::VI);
        assert_eq!(cells.get(&COLUMN_DEBT).map(String::as_str), Some("15.400.000 ₫"));
    }

    #[test]
    fn test_missing_server_totals_hide_summary() {
        assert!(totals_override(None, "₫", NumberLocale::VI).is_empty());
    }
}
