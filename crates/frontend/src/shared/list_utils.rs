//! Поле поиска для списков

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::icons::icon;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Поиск с debounce и кнопкой очистки
///
/// `on_change` вызывается через 300 мс после последнего ввода,
/// очистка срабатывает сразу.
#[component]
pub fn SearchInput(
    /// Callback для обновления значения фильтра
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let (input_value, set_input_value) = signal(String::new());

    // Timeout отменяется при drop, поэтому замена таймера = сброс debounce
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value);
        });
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear title="Xóa">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
