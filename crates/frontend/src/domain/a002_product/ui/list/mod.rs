mod state;

use contracts::domain::a002_product::aggregate::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::{Button, ButtonAppearance};

use crate::domain::a002_product::api;
use crate::shared::components::table::{format_currency, format_number_int};
use crate::shared::data_table::{
    ColumnDescriptor, DataTable, DataTableConfig, DisplayValue, SummaryFormat, TableRow,
};
use crate::shared::icons::icon;
use state::create_state;

const TABLE_NAME: &str = "Products";

impl TableRow for Product {
    fn row_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

fn product_columns(config: &DataTableConfig) -> Vec<ColumnDescriptor<Product>> {
    let marker = config.currency_marker.clone();
    let locale = config.locale;
    vec![
        ColumnDescriptor::new("Ảnh", |p: &Product| match &p.image_url {
            Some(src) => DisplayValue::Image {
                src: src.clone(),
                alt: p.name.clone(),
            },
            None => DisplayValue::Empty,
        })
        .width("8%")
        .fixed(),
        ColumnDescriptor::new("Mã hàng", |p: &Product| p.sku.clone().into()).width("14%"),
        ColumnDescriptor::new("Tên hàng", |p: &Product| p.name.clone().into()).width("32%"),
        ColumnDescriptor::new("Nhóm hàng", |p: &Product| p.category_name.clone().into()).width("16%"),
        ColumnDescriptor::new("Giá bán", move |p: &Product| {
            format_currency(p.price as f64, &marker, locale).into()
        })
        .width("16%")
        .numeric(|p: &Product| Some(p.price as f64)),
        ColumnDescriptor::new("Tồn kho", move |p: &Product| {
            format_number_int(p.stock as f64, locale).into()
        })
        .width("14%")
        .numeric(|p: &Product| Some(p.stock as f64))
        .summarizable()
        .summary_format(SummaryFormat::Integer),
    ]
}

/// Список товаров: грузится целиком, поиск и страницы на клиенте
#[component]
pub fn ProductsList() -> impl IntoView {
    let config = use_context::<DataTableConfig>().unwrap_or_default();
    let state = create_state(config.default_page_size);
    let all_products = RwSignal::new(Vec::<Product>::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(false);
    let (selected_count, set_selected_count) = signal(0usize);
    let (clear_epoch, set_clear_epoch) = signal(0u64);

    let columns = product_columns(&config);

    let load_data = move || {
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::fetch_products().await {
                Ok(items) => {
                    log::debug!("products: loaded {}", items.len());
                    state.update(|s| s.refresh(&items));
                    all_products.set(items);
                }
                Err(e) => {
                    log::error!("products: {}", e);
                    set_error.set(Some(format!("Không tải được danh sách hàng hóa: {}", e)));
                }
            }
            set_loading.set(false);
        });
    };

    // Первая загрузка
    load_data();

    let refresh_view = move || all_products.with_untracked(|all| state.update(|s| s.refresh(all)));

    let go_to_page = move |page: usize| {
        state.update(|s| s.page = page);
        refresh_view();
    };

    let change_page_size = move |size: usize| {
        state.update(|s| {
            s.page_size = size;
            s.page = 1;
        });
        refresh_view();
    };

    let apply_search = move |keyword: String| {
        state.update(|s| {
            s.keyword = keyword;
            s.page = 1;
        });
        refresh_view();
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    {icon("products")}
                    <h1 class="page__title">"Hàng hóa"</h1>
                    <span class="page__counter">{move || state.with(|s| s.filtered.len())}</span>
                    <Show when=move || { selected_count.get() > 0 }>
                        <span class="page__selection">
                            {move || format!("Đã chọn {}", selected_count.get())}
                        </span>
                    </Show>
                </div>
                <div class="page__header-right">
                    <Show when=move || { selected_count.get() > 0 }>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| set_clear_epoch.update(|e| *e += 1)
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
                summary_rows=Signal::derive(move || state.with(|s| s.filtered.clone()))
                loading=loading
                current_page=Signal::derive(move || state.with(|s| s.page))
                page_count=Signal::derive(move || state.with(|s| s.page_count))
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(go_to_page)
                on_page_size_change=Callback::new(change_page_size)
                on_search=Callback::new(apply_search)
                selectable=true
                clear_selection=clear_epoch
                on_selection_change=Callback::new(move |ids: Vec<String>| set_selected_count.set(ids.len()))
            />
        </div>
    }
}
