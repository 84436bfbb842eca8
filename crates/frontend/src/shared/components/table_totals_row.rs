use leptos::prelude::*;

/// Строка итогов таблицы
///
/// По ячейке на видимую колонку; `None` — пустая ячейка.
/// Рисуется в <thead> сразу после заголовков.
///
/// # BEM классы
/// - `.table__totals-row` - строка итогов
/// - `.table__cell--total` - ячейка с итогом
#[component]
pub fn TableTotalsRow(
    cells: Vec<Option<String>>,
    /// Пустая ячейка под колонку чекбоксов
    #[prop(optional)]
    with_checkbox: bool,
) -> impl IntoView {
    view! {
        <tr class="table__totals-row">
            {with_checkbox.then(|| view! { <td class="table__cell table__cell--checkbox"></td> })}
            {cells
                .into_iter()
                .map(|cell| match cell {
                    Some(text) => view! { <td class="table__cell table__cell--total">{text}</td> }.into_any(),
                    None => view! { <td class="table__cell"></td> }.into_any(),
                })
                .collect_view()}
        </tr>
    }
}
