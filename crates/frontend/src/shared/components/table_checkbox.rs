use leptos::prelude::*;

/// Ячейка с чекбоксом выбора строки
///
/// Строку без id выбрать нельзя: чекбокс рисуется выключенным и изменений
/// не сообщает. Клик по ячейке не доходит до строки.
#[component]
pub fn TableCheckbox(
    #[prop(into)]
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    let class = if disabled {
        "table__cell table__cell--checkbox table__cell--disabled"
    } else {
        "table__cell table__cell--checkbox"
    };

    view! {
        <td class=class on:click=|ev| ev.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                aria-label="Chọn dòng"
                prop:checked=checked
                prop:disabled=disabled
                on:change=move |ev| {
                    if !disabled {
                        on_change.run(event_target_checked(&ev));
                    }
                }
            />
        </td>
    }
}
