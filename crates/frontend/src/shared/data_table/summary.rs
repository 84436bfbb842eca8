//! Строка итогов
//!
//! Итоги считаются по всем строкам выборки, а не только по текущей странице.
//! Значение берётся из числового доступа колонки, затем из числовой ячейки,
//! а в остальных случаях из текста ячейки: все нецифровые символы
//! выбрасываются, остаток читается как целое. Ячейка без цифр даёт 0.

use std::collections::HashMap;

use super::column::{ColumnDescriptor, DisplayValue, SummaryFormat};
use crate::shared::components::table::{format_currency, format_grouped, format_number_int, NumberLocale};

/// Параметры форматирования итогов
#[derive(Debug, Clone, Copy)]
pub struct SummaryStyle<'a> {
    pub currency_marker: &'a str,
    pub locale: NumberLocale,
}

/// Итоги, переданные вызывающим кодом; полностью заменяют вычисленные.
/// Ключ — индекс колонки в полном списке описаний.
pub type SummaryOverride = HashMap<usize, String>;

/// Число из текста ячейки: `"1.200 ₫"` → 1200, `"-"` → None
pub fn parse_summable(text: &str) -> Option<i64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i64>().ok()
}

pub fn column_total<T>(column: &ColumnDescriptor<T>, rows: &[T]) -> f64 {
    rows.iter()
        .map(|row| match &column.numeric_value {
            Some(numeric) => numeric(row).filter(|v| v.is_finite()).unwrap_or(0.0),
            None => match column.value(row) {
                DisplayValue::Number(n) if n.is_finite() => n,
                DisplayValue::Number(_) => 0.0,
                other => parse_summable(&other.text()).unwrap_or(0) as f64,
            },
        })
        .sum()
}

pub fn format_total<T>(
    column: &ColumnDescriptor<T>,
    rows: &[T],
    total: f64,
    style: &SummaryStyle<'_>,
) -> String {
    match column.summary_format {
        SummaryFormat::Currency => format_currency(total, style.currency_marker, style.locale),
        SummaryFormat::Integer => format_number_int(total.round(), style.locale),
        SummaryFormat::Number => format_grouped(total, style.locale),
        SummaryFormat::Auto => {
            if has_currency_sample(column, rows, style.currency_marker) {
                format_currency(total, style.currency_marker, style.locale)
            } else {
                format_grouped(total, style.locale)
            }
        }
    }
}

/// Первая непустая ячейка колонки содержит знак валюты
fn has_currency_sample<T>(column: &ColumnDescriptor<T>, rows: &[T], marker: &str) -> bool {
    if marker.is_empty() {
        return false;
    }
    rows.iter()
        .map(|row| column.value(row).text())
        .find(|text| !text.trim().is_empty())
        .is_some_and(|text| text.contains(marker))
}

/// Итоги для видимых колонок, в порядке `visible_indices`.
///
/// `None` для всего результата — строку итогов не показывать.
pub fn summarize<T>(
    columns: &[ColumnDescriptor<T>],
    visible_indices: &[usize],
    rows: &[T],
    style: &SummaryStyle<'_>,
    summary_override: Option<&SummaryOverride>,
) -> Option<Vec<Option<String>>> {
    let cells: Vec<Option<String>> = match summary_override {
        Some(precomputed) => visible_indices
            .iter()
            .map(|index| precomputed.get(index).cloned())
            .collect(),
        None => visible_indices
            .iter()
            .map(|&index| {
                let column = columns.get(index)?;
                if !column.summarizable {
                    return None;
                }
                let total = column_total(column, rows);
                Some(format_total(column, rows, total, style))
            })
            .collect(),
    };

    if cells.iter().any(Option::is_some) {
        Some(cells)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::BadgeTone;

    struct Row {
        name: &'static str,
        total: &'static str,
        stock: i64,
    }

    fn style() -> SummaryStyle<'static> {
        SummaryStyle {
            currency_marker: "₫",
            locale: NumberLocale::VI,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "A", total: "1.200 ₫", stock: 3 },
            Row { name: "B", total: "800 ₫", stock: 4 },
            Row { name: "C", total: "-", stock: 5 },
        ]
    }

    fn columns() -> Vec<ColumnDescriptor<Row>> {
        vec![
            ColumnDescriptor::new("Tên", |r: &Row| r.name.into()),
            ColumnDescriptor::new("Tổng tiền", |r: &Row| r.total.into()).summarizable(),
            ColumnDescriptor::new("Tồn kho", |r: &Row| {
                DisplayValue::badge(r.stock.to_string(), BadgeTone::Neutral)
            })
                .summarizable()
                .summary_format(SummaryFormat::Integer),
        ]
    }

    #[test]
    fn test_parse_summable() {
        assert_eq!(parse_summable("1.200 ₫"), Some(1200));
        assert_eq!(parse_summable("800"), Some(800));
        assert_eq!(parse_summable("-"), None);
        assert_eq!(parse_summable(""), None);
        assert_eq!(parse_summable("99999999999999999999999"), None);
    }

    #[test]
    fn test_currency_total_over_all_rows() {
        let cols = columns();
        let data = rows();
        assert_eq!(column_total(&cols[1], &data), 2000.0);

        let summary = summarize(&cols, &[0, 1, 2], &data, &style(), None).unwrap();
        assert_eq!(summary[0], None);
        assert_eq!(summary[1].as_deref(), Some("2.000 ₫"));
        // текст бейджа тоже суммируется
        assert_eq!(summary[2].as_deref(), Some("12"));
    }

    #[test]
    fn test_hidden_columns_are_skipped() {
        let cols = columns();
        let summary = summarize(&cols, &[0, 2], &rows(), &style(), None).unwrap();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[1].as_deref(), Some("12"));

        assert!(summarize(&cols, &[0], &rows(), &style(), None).is_none());
    }

    #[test]
    fn test_explicit_currency_without_marker_in_cells() {
        let cols = vec![ColumnDescriptor::new("Giá", |r: &Row| r.stock.into())
            .summarizable()
            .summary_format(SummaryFormat::Currency)];
        let summary = summarize(&cols, &[0], &rows(), &style(), None).unwrap();
        assert_eq!(summary[0].as_deref(), Some("12 ₫"));
    }

    #[test]
    fn test_numeric_accessor_wins_over_text() {
        let cols = vec![ColumnDescriptor::new("Công nợ", |_: &Row| "n/a".into())
            .numeric(|r: &Row| Some(r.stock as f64 * 1000.5))
            .summarizable()];
        let summary = summarize(&cols, &[0], &rows(), &style(), None).unwrap();
        assert_eq!(summary[0].as_deref(), Some("12.006"));
    }

    #[test]
    fn test_number_cells_keep_sign_and_fraction() {
        let values = [-500.0, 1500.0, 2.5];
        let data: Vec<usize> = (0..values.len()).collect();
        let cols = vec![ColumnDescriptor::new("Chênh lệch", move |i: &usize| {
            DisplayValue::Number(values[*i])
        })
        .summarizable()];
        assert_eq!(column_total(&cols[0], &data), 1002.5);
        let summary = summarize(&cols, &[0], &data, &style(), None).unwrap();
        assert_eq!(summary[0].as_deref(), Some("1.002,5"));
    }

    #[test]
    fn test_override_replaces_everything() {
        let cols = columns();
        let mut precomputed = SummaryOverride::new();
        precomputed.insert(0, "3 đơn".to_string());
        let summary = summarize(&cols, &[0, 1], &rows(), &style(), Some(&precomputed)).unwrap();
        assert_eq!(summary[0].as_deref(), Some("3 đơn"));
        assert_eq!(summary[1], None);
    }

    #[test]
    fn test_no_rows() {
        let cols = columns();
        let summary = summarize(&cols, &[1], &[], &style(), None).unwrap();
        assert_eq!(summary[0].as_deref(), Some("0"));
    }
}
