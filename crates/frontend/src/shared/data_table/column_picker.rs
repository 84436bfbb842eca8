use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::icons::icon;

/// Выпадающий список колонок с чекбоксами видимости
///
/// Закрывается кликом вне списка. Слушатель клика на window снимается
/// вместе с компонентом.
#[component]
pub fn ColumnPicker(
    #[prop(into)]
    titles: Signal<Vec<String>>,
    #[prop(into)]
    visible: Signal<Vec<usize>>,
    on_toggle: Callback<usize>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let container = NodeRef::<leptos::html::Div>::new();

    let handle = window_event_listener(leptos::ev::click, move |ev: leptos::ev::MouseEvent| {
        if !open.get_untracked() {
            return;
        }
        let Some(root) = container.get_untracked() else {
            return;
        };
        let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
        if !root.contains(target.as_ref()) {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="column-picker" node_ref=container>
            <button
                class="column-picker__trigger"
                on:click=move |_| open.update(|o| *o = !*o)
                title="Hiển thị cột"
            >
                {icon("columns")}
            </button>
            <Show when=move || open.get()>
                <div class="column-picker__menu">
                    {move || {
                        let shown = visible.get();
                        titles
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, title)| {
                                let checked = shown.contains(&index);
                                // последнюю видимую колонку не скрываем
                                let locked = checked && shown.len() == 1;
                                view! {
                                    <label class="column-picker__item">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            prop:disabled=locked
                                            on:change=move |_| on_toggle.run(index)
                                        />
                                        <span>{title}</span>
                                    </label>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
