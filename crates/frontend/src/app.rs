use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::path;
use thaw::ConfigProvider;

use crate::domain::a001_supplier::ui::list::SuppliersList;
use crate::domain::a002_product::ui::list::ProductsList;
use crate::domain::a003_order::ui::list::OrdersList;
use crate::shared::data_table::DataTableConfig;
use crate::shared::icons::icon;

/// Настройки таблиц можно переопределить JSON-ом в `<meta name="datatable-config">`
fn load_table_config() -> DataTableConfig {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name=datatable-config]").ok().flatten())
        .and_then(|meta| meta.get_attribute("content"));
    match content {
        Some(json) => DataTableConfig::from_json(&json),
        None => DataTableConfig::default(),
    }
}

#[component]
fn NavLink(href: &'static str, icon_name: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="nav__link">
            {icon(icon_name)}
            <span>{label}</span>
        </A>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(load_table_config());

    view! {
        <ConfigProvider>
            <Router>
                <div class="app">
                    <nav class="nav">
                        <NavLink href="/orders" icon_name="orders" label="Đơn hàng" />
                        <NavLink href="/products" icon_name="products" label="Hàng hóa" />
                        <NavLink href="/suppliers" icon_name="suppliers" label="Nhà cung cấp" />
                    </nav>
                    <main class="app__content">
                        <Routes fallback=|| view! { <div class="page page--empty">"Không tìm thấy trang"</div> }>
                            <Route path=path!("/") view=|| view! { <Redirect path="/orders" /> } />
                            <Route path=path!("/orders") view=OrdersList />
                            <Route path=path!("/products") view=ProductsList />
                            <Route path=path!("/suppliers") view=SuppliersList />
                        </Routes>
                    </main>
                </div>
            </Router>
        </ConfigProvider>
    }
}
