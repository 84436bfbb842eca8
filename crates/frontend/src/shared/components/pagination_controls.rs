use crate::shared::data_table::PageStrip;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Полоса страниц под таблицей
///
/// Ссылка на каждую страницу 1..=page_count и кнопки назад/вперёд,
/// выключенные на первой и последней странице.
#[component]
pub fn PaginationControls(
    strip: PageStrip,

    /// Callback when page changes (1-based)
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let prev = strip.prev_page();
    let next = strip.next_page();

    view! {
        <nav class="pagination-controls" aria-label="pagination">
            <button
                class="pagination-btn"
                disabled=strip.prev_disabled()
                on:click=move |_| {
                    if let Some(page) = prev {
                        on_page_change.run(page);
                    }
                }
                title="Trang trước"
            >
                {icon("chevron-left")}
            </button>
            {strip
                .links
                .iter()
                .map(|link| {
                    let number = link.number;
                    let class = if link.active {
                        "pagination-btn pagination-btn--active"
                    } else {
                        "pagination-btn"
                    };
                    view! {
                        <button
                            class=class
                            aria-current=link.active.then_some("page")
                            on:click=move |_| on_page_change.run(number)
                        >
                            {number.to_string()}
                        </button>
                    }
                })
                .collect_view()}
            <button
                class="pagination-btn"
                disabled=strip.next_disabled()
                on:click=move |_| {
                    if let Some(page) = next {
                        on_page_change.run(page);
                    }
                }
                title="Trang sau"
            >
                {icon("chevron-right")}
            </button>
        </nav>
    }
}

/// Выбор размера страницы
#[component]
pub fn PageSizeSelect(
    #[prop(into)]
    page_size: Signal<usize>,
    options: Vec<usize>,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <select
            class="page-size-select"
            on:change=move |ev| {
                if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                    on_change.run(size);
                }
            }
            prop:value=move || page_size.get().to_string()
        >
            {options
                .into_iter()
                .map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {format!("{} / trang", size)}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
