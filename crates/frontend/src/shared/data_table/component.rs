use std::sync::Arc;

use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

use super::column::{BadgeTone, ColumnDescriptor, DisplayValue, TableRow};
use super::column_picker::ColumnPicker;
use super::config::DataTableConfig;
use super::render_state::RenderState;
use super::selection::SelectionController;
use super::storage::{LocalStorageStore, SharedStore};
use super::summary::SummaryOverride;
use super::view_model::{TableViewModel, ViewInputs};
use super::visibility::ColumnVisibility;
use crate::shared::components::pagination_controls::{PageSizeSelect, PaginationControls};
use crate::shared::components::table::TableHeaderCheckbox;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::components::table_totals_row::TableTotalsRow;
use crate::shared::list_utils::SearchInput;

/// Универсальная таблица списков
///
/// Пагинация серверная: страница, число страниц и размер страницы приходят
/// от вызывающего кода, таблица сообщает о смене через колбэки.
///
/// Выбор строк:
/// - `selectable` без `selected` — выбор хранит таблица;
/// - `selected` — выбор хранит вызывающий код, таблица только сообщает
///   новый набор через `on_selection_change`.
///
/// # Пример
/// ```rust,ignore
/// <DataTable
///     name="Suppliers"
///     columns=columns
///     rows=Signal::derive(move || state.get().items)
///     loading=loading
///     current_page=Signal::derive(move || state.get().page)
///     page_count=Signal::derive(move || state.get().page_count)
///     page_size=Signal::derive(move || state.get().page_size)
///     on_page_change=Callback::new(move |page| go_to_page(page))
///     on_page_size_change=Callback::new(move |size| change_page_size(size))
///     on_search=Callback::new(move |text| apply_search(text))
/// />
/// ```
#[component]
pub fn DataTable<T>(
    /// Имя таблицы; по нему сохраняется видимость колонок
    #[prop(optional, into)]
    name: Option<String>,
    #[prop(into)]
    columns: Signal<Vec<ColumnDescriptor<T>>>,
    /// Строки текущей страницы
    #[prop(into)]
    rows: Signal<Vec<T>>,
    /// Вся выборка для строки итогов; по умолчанию `rows`
    #[prop(optional, into)]
    summary_rows: Option<Signal<Vec<T>>>,
    /// Готовые итоги, полностью заменяют вычисленные
    #[prop(optional, into)]
    summary_override: Option<Signal<Option<SummaryOverride>>>,
    #[prop(into)]
    loading: Signal<bool>,
    /// Текущая страница, с 1
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    page_count: Signal<usize>,
    #[prop(into)]
    page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,
    #[prop(optional)]
    selectable: bool,
    #[prop(optional, into)]
    selected: Option<Signal<Vec<String>>>,
    #[prop(optional)]
    on_selection_change: Option<Callback<Vec<String>>>,
    /// Каждая смена значения очищает выбор, который хранит таблица
    #[prop(optional, into)]
    clear_selection: Option<Signal<u64>>,
    #[prop(optional)]
    on_search: Option<Callback<String>>,
    #[prop(optional)]
    hide_search: bool,
    /// Хранилище видимости колонок; по умолчанию localStorage
    #[prop(optional)]
    store: Option<SharedStore>,
    /// Настройки этой таблицы; по умолчанию из контекста
    #[prop(optional)]
    config: Option<DataTableConfig>,
) -> impl IntoView
where
    T: TableRow + Clone + Send + Sync + 'static,
{
    let config = config
        .or_else(use_context::<DataTableConfig>)
        .unwrap_or_default();
    let store: SharedStore = store.unwrap_or_else(|| Arc::new(LocalStorageStore));

    let storage_key = name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .map(|n| config.storage_key(n));
    let column_count = columns.with_untracked(|c| c.len());
    let visibility = RwSignal::new(ColumnVisibility::load(&*store, storage_key, column_count));

    let store = StoredValue::new(store);
    let config = StoredValue::new(config);

    // Описания колонок приходят заново на каждую отрисовку, их число может смениться
    Effect::new(move |_| {
        let count = columns.with(|c| c.len());
        if visibility.with_untracked(|v| v.column_count()) != count {
            visibility.update(|v| v.resize(count));
        }
    });

    let selectable = selectable || selected.is_some();
    let external = selected.unwrap_or_else(|| Signal::derive(Vec::new));
    let controller = RwSignal::new(if selected.is_some() {
        SelectionController::controlled()
    } else {
        SelectionController::local()
    });
    let notify = move |change: Option<Vec<String>>| {
        if let (Some(ids), Some(callback)) = (change, on_selection_change) {
            callback.run(ids);
        }
    };

    let view_model = Memo::new(move |_| {
        let cols = columns.get();
        let totals_source = summary_rows.map(|s| s.get());
        let precomputed = summary_override.and_then(|s| s.get());
        rows.with(|rows| {
            let inputs = ViewInputs {
                columns: &cols,
                rows,
                summary_rows: totals_source.as_deref().unwrap_or(rows),
                loading: loading.get(),
                current_page: current_page.get(),
                page_count: page_count.get(),
                summary_override: precomputed.as_ref(),
            };
            visibility.with(|v| config.with_value(|c| TableViewModel::derive(&inputs, v, c)))
        })
    });

    // Локальный выбор не переживает смену данных
    Effect::new(move |_| {
        let (state, loaded) = view_model.with(|vm| (vm.state, vm.loaded_ids()));
        if state == RenderState::Loading {
            return;
        }
        let mut next = controller.get_untracked();
        let change = next.retain_loaded(&loaded);
        if change.is_some() {
            controller.set(next);
            notify(change);
        }
    });

    if let Some(epoch) = clear_selection {
        Effect::new(move |previous: Option<u64>| {
            let current = epoch.get();
            if epoch_changed(previous, current) {
                let mut next = controller.get_untracked();
                let change = next.clear();
                if change.is_some() {
                    log::debug!("selection cleared by caller");
                    controller.set(next);
                }
                notify(change);
            }
            current
        });
    }

    let toggle_row = move |id: String, checked: bool| {
        let ext = external.get_untracked();
        let mut next = controller.get_untracked();
        let change = next.toggle(&ext, &id, checked);
        if change.is_some() {
            controller.set(next);
        }
        notify(change);
    };

    let toggle_all = move |checked: bool| {
        let ext = external.get_untracked();
        let loaded = view_model.with_untracked(|vm| vm.loaded_ids());
        let mut next = controller.get_untracked();
        let change = next.select_all(&ext, &loaded, checked);
        if change.is_some() {
            controller.set(next);
        }
        notify(change);
    };

    let header_state = Signal::derive(move || {
        let loaded = view_model.with(|vm| vm.loaded_ids());
        controller.with(|c| external.with(|ext| c.header_state(ext, &loaded)))
    });

    let toggle_column = Callback::new(move |index: usize| {
        let changed = store.with_value(|s| {
            visibility
                .try_update(|v| v.toggle(index, &**s))
                .unwrap_or(false)
        });
        if !changed {
            log::debug!("column {} kept visible", index);
        }
    });

    let titles = Signal::derive(move || columns.with(|c| c.iter().map(|d| d.title_text()).collect::<Vec<_>>()));
    let visible = Signal::derive(move || visibility.with(|v| v.visible_indices()));

    let page_size_options = config.with_value(|c| c.page_size_options.clone());
    let search_placeholder = config.with_value(|c| c.search_placeholder.clone());

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                {on_page_size_change.map(|on_change| {
                    view! {
                        <PageSizeSelect
                            page_size=page_size
                            options=page_size_options
                            on_change=Callback::new(move |size: usize| {
                                log::debug!("page size -> {}", size);
                                on_change.run(size);
                            })
                        />
                    }
                })}
                {(!hide_search).then_some(on_search).flatten().map(|on_search| {
                    view! { <SearchInput on_change=on_search placeholder=search_placeholder /> }
                })}
                <ColumnPicker titles=titles visible=visible on_toggle=toggle_column />
            </div>

            <div class="data-table__scroll">
                <table class="table data-table__table">
                    <colgroup>
                        {selectable.then(|| view! { <col class="data-table__col--checkbox" /> })}
                        {move || {
                            view_model.with(|vm| {
                                vm.columns
                                    .iter()
                                    .map(|c| {
                                        let style = c.width.as_ref().map(|w| format!("width: {}", w));
                                        view! { <col style=style /> }
                                    })
                                    .collect_view()
                            })
                        }}
                    </colgroup>
                    {move || {
                        if !view_model.with(|vm| vm.shows_header()) {
                            return None;
                        }
                        let (titles, summary) = view_model.with(|vm| {
                            (
                                vm.columns.iter().map(|c| (c.title.clone(), c.fixed)).collect::<Vec<_>>(),
                                vm.summary.clone(),
                            )
                        });
                        Some(view! {
                            <thead>
                                <tr>
                                    {selectable.then(|| view! {
                                        <TableHeaderCheckbox
                                            state=header_state
                                            on_change=Callback::new(toggle_all)
                                        />
                                    })}
                                    {titles
                                        .into_iter()
                                        .map(|(title, fixed)| {
                                            let class = if fixed {
                                                "table__header-cell table__header-cell--fixed"
                                            } else {
                                                "table__header-cell"
                                            };
                                            view! { <th class=class>{title}</th> }
                                        })
                                        .collect_view()}
                                </tr>
                                {summary.map(|cells| view! {
                                    <TableTotalsRow cells=cells with_checkbox=selectable />
                                })}
                            </thead>
                        })
                    }}
                    <tbody>
                        {move || {
                            let (state, column_count) = view_model.with(|vm| (vm.state, vm.columns.len()));
                            let span = column_count + usize::from(selectable);
                            match state {
                                RenderState::Loading => view! {
                                    <tr class="data-table__placeholder">
                                        <td colspan=span>{config.with_value(|c| c.loading_text.clone())}</td>
                                    </tr>
                                }.into_any(),
                                RenderState::Empty => view! {
                                    <tr class="data-table__placeholder">
                                        <td colspan=span>{config.with_value(|c| c.empty_text.clone())}</td>
                                    </tr>
                                }.into_any(),
                                RenderState::Populated => view_model
                                    .with(|vm| vm.rows.clone())
                                    .into_iter()
                                    .map(|row| {
                                        let checkbox = selectable.then(|| {
                                            let disabled = row.id.is_none();
                                            let id = row.id.clone().unwrap_or_default();
                                            let id_for_checked = id.clone();
                                            let checked = Signal::derive(move || {
                                                controller.with(|c| {
                                                    external.with(|ext| c.is_selected(ext, &id_for_checked))
                                                })
                                            });
                                            view! {
                                                <TableCheckbox
                                                    checked=checked
                                                    disabled=disabled
                                                    on_change=Callback::new(move |on: bool| toggle_row(id.clone(), on))
                                                />
                                            }
                                        });
                                        view! {
                                            <tr class="table__row" data-key=row.key>
                                                {checkbox}
                                                {row.cells.into_iter().map(render_cell).collect_view()}
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any(),
                            }
                        }}
                    </tbody>
                </table>
            </div>

            {move || {
                view_model
                    .with(|vm| vm.pages.clone())
                    .map(|strip| view! { <PaginationControls strip=strip on_page_change=on_page_change /> })
            }}
        </div>
    }
}

/// Первый запуск эффекта только запоминает значение
fn epoch_changed(previous: Option<u64>, current: u64) -> bool {
    previous.is_some_and(|p| p != current)
}

fn render_cell(value: DisplayValue) -> AnyView {
    match value {
        DisplayValue::Text(text) => view! { <td class="table__cell">{text}</td> }.into_any(),
        DisplayValue::Number(n) => {
            view! { <td class="table__cell table__cell--right">{n.to_string()}</td> }.into_any()
        }
        DisplayValue::Badge { label, tone } => {
            let color = match tone {
                BadgeTone::Neutral => BadgeColor::Subtle,
                BadgeTone::Brand => BadgeColor::Brand,
                BadgeTone::Success => BadgeColor::Success,
                BadgeTone::Warning => BadgeColor::Warning,
                BadgeTone::Danger => BadgeColor::Danger,
            };
            view! {
                <td class="table__cell">
                    <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
                </td>
            }
            .into_any()
        }
        DisplayValue::Image { src, alt } => view! {
            <td class="table__cell table__cell--image">
                <img class="table__thumbnail" src=src alt=alt loading="lazy" />
            </td>
        }
        .into_any(),
        DisplayValue::Empty => view! { <td class="table__cell"></td> }.into_any(),
    }
}
