//! Раскладка ширин видимых колонок
//!
//! Ширина скрытых гибких колонок делится поровну между видимыми гибкими.
//! Фиксированные колонки (картинки, иконки) всегда получают объявленную
//! ширину. Если видимых гибких колонок нет, освободившаяся ширина теряется.

use super::column::ColumnDescriptor;
use super::visibility::ColumnVisibility;

#[derive(Debug, Clone, PartialEq)]
pub struct AllocatedWidth {
    pub index: usize,
    /// Итоговая ширина в процентах
    pub percent: f64,
    pub fixed: bool,
}

impl AllocatedWidth {
    /// `None` — колонке не объявлена ширина и добавить ей нечего
    pub fn css(&self) -> Option<String> {
        if self.percent <= 0.0 {
            return None;
        }
        let rounded = (self.percent * 100.0).round() / 100.0;
        Some(format!("{}%", rounded))
    }
}

pub fn allocate_widths<T>(
    columns: &[ColumnDescriptor<T>],
    visibility: &ColumnVisibility,
) -> Vec<AllocatedWidth> {
    let mut freed = 0.0;
    let mut visible_flexible = 0usize;
    for (index, column) in columns.iter().enumerate() {
        if column.fixed_width {
            continue;
        }
        if visibility.is_visible(index) {
            visible_flexible += 1;
        } else {
            freed += column.declared_width();
        }
    }

    let share = if visible_flexible > 0 {
        freed / visible_flexible as f64
    } else {
        0.0
    };

    columns
        .iter()
        .enumerate()
        .filter(|(index, _)| visibility.is_visible(*index))
        .map(|(index, column)| {
            let declared = column.declared_width();
            let percent = if column.fixed_width {
                declared
            } else {
                declared + share
            };
            AllocatedWidth {
                index,
                percent,
                fixed: column.fixed_width,
            }
        })
        .collect()
}
