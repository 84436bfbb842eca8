//! Чекбокс "выбрать все" в заголовке таблицы
//!
//! Состояние считает контроллер выбора по загруженным строкам; здесь
//! только отрисовка трёх состояний (unchecked, checked, indeterminate).

use leptos::prelude::*;

use crate::shared::data_table::HeaderCheckState;

#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    /// true = выбрать все загруженные, false = снять выбор
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        let is_indeterminate = matches!(state.get(), HeaderCheckState::Indeterminate);
        if let Some(input) = checkbox_ref.get() {
            input.set_indeterminate(is_indeterminate);
        }
    });

    view! {
        <th class="table__header-cell table__cell--checkbox">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(state.get(), HeaderCheckState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </th>
    }
}
