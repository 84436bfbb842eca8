//! Утилиты форматирования чисел для таблиц

use serde::Deserialize;

/// Разделители групп разрядов и дробной части
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NumberLocale {
    pub group_separator: char,
    pub decimal_separator: char,
}

impl NumberLocale {
    /// vi-VN: `1.234.567,89`
    pub const VI: Self = Self {
        group_separator: '.',
        decimal_separator: ',',
    };
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::VI
    }
}

/// Форматирует число с разделителем тысяч и указанным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::components::table::{format_number_with_decimals, NumberLocale};
/// let formatted = format_number_with_decimals(1234.567, 2, NumberLocale::VI);
/// assert_eq!(formatted, "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8, locale: NumberLocale) -> String {
    let formatted = format!("{:.*}", decimals.min(6) as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(locale.group_separator);
        }
        grouped.push(c);
    }

    // "-0" после округления выглядит странно
    let sign = if grouped.chars().all(|c| c == '0' || c == locale.group_separator)
        && decimal_part.map_or(true, |d| d.chars().all(|c| c == '0'))
    {
        ""
    } else {
        sign
    };

    match decimal_part {
        Some(d) => format!("{}{}{}{}", sign, grouped, locale.decimal_separator, d),
        None => format!("{}{}", sign, grouped),
    }
}

/// Целое число с разделителем тысяч
///
/// ```
/// use frontend::shared::components::table::{format_number_int, NumberLocale};
/// assert_eq!(format_number_int(1234567.0, NumberLocale::VI), "1.234.567");
/// ```
pub fn format_number_int(value: f64, locale: NumberLocale) -> String {
    format_number_with_decimals(value, 0, locale)
}

/// Число без лишних нулей в дробной части (не более 2 знаков)
pub fn format_grouped(value: f64, locale: NumberLocale) -> String {
    if value.fract() == 0.0 {
        return format_number_int(value, locale);
    }
    let formatted = format_number_with_decimals(value, 2, locale);
    formatted
        .trim_end_matches('0')
        .trim_end_matches(locale.decimal_separator)
        .to_string()
}

/// Денежная сумма: целое с разделителем тысяч и знаком валюты
///
/// ```
/// use frontend::shared::components::table::{format_currency, NumberLocale};
/// assert_eq!(format_currency(2000.0, "₫", NumberLocale::VI), "2.000 ₫");
/// ```
pub fn format_currency(value: f64, marker: &str, locale: NumberLocale) -> String {
    format!("{} {}", format_number_int(value, locale), marker)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACE: NumberLocale = NumberLocale {
        group_separator: ' ',
        decimal_separator: '.',
    };

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0, SPACE), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1, SPACE), "1 234.6");
        assert_eq!(format_number_with_decimals(1234.567, 2, SPACE), "1 234.57");
        assert_eq!(format_number_with_decimals(1234.567, 3, SPACE), "1 234.567");
        assert_eq!(format_number_with_decimals(-1234.56, 2, SPACE), "-1 234.56");
    }

    #[test]
    fn test_format_number_int() {
        assert_eq!(format_number_int(1234567.0, NumberLocale::VI), "1.234.567");
        assert_eq!(format_number_int(0.0, NumberLocale::VI), "0");
        assert_eq!(format_number_int(-1234.0, NumberLocale::VI), "-1.234");
        assert_eq!(format_number_int(123.0, NumberLocale::VI), "123");
        assert_eq!(format_number_int(-0.4, NumberLocale::VI), "0");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(1500.0, NumberLocale::VI), "1.500");
        assert_eq!(format_grouped(1500.5, NumberLocale::VI), "1.500,5");
        assert_eq!(format_grouped(0.25, NumberLocale::VI), "0,25");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2000.0, "₫", NumberLocale::VI), "2.000 ₫");
        assert_eq!(format_currency(1234567.0, "₫", NumberLocale::VI), "1.234.567 ₫");
    }
}
