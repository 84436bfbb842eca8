//! Описание колонок таблицы и значения ячеек

use std::fmt;
use std::sync::Arc;

/// Цвет бейджа в ячейке
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Neutral,
    Brand,
    Success,
    Warning,
    Danger,
}

/// Значение ячейки для отображения
///
/// Структурные значения (бейдж, картинка) умеют отдавать текст через
/// [`DisplayValue::text`], по которому считаются итоги.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    Text(String),
    Number(f64),
    Badge { label: String, tone: BadgeTone },
    Image { src: String, alt: String },
    Empty,
}

impl DisplayValue {
    pub fn text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Badge { label, .. } => label.clone(),
            Self::Image { alt, .. } => alt.clone(),
            Self::Empty => String::new(),
        }
    }

    pub fn badge(label: impl Into<String>, tone: BadgeTone) -> Self {
        Self::Badge {
            label: label.into(),
            tone,
        }
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for DisplayValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Option<String>> for DisplayValue {
    fn from(s: Option<String>) -> Self {
        s.map(Self::Text).unwrap_or(Self::Empty)
    }
}

impl From<i64> for DisplayValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<f64> for DisplayValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Объявленная ширина колонки, в процентах
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnWidth {
    Percent(f64),
    /// Строка вида `"15%"` или `"15"`; разбирается при раскладке
    Raw(String),
}

impl ColumnWidth {
    /// Ширина в процентах; нераспознанное значение даёт 0
    pub fn percent(&self) -> f64 {
        let value = match self {
            Self::Percent(p) => *p,
            Self::Raw(raw) => raw
                .trim()
                .trim_end_matches('%')
                .trim()
                .parse::<f64>()
                .unwrap_or(0.0),
        };
        if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        }
    }
}

impl From<f64> for ColumnWidth {
    fn from(p: f64) -> Self {
        Self::Percent(p)
    }
}

impl From<u32> for ColumnWidth {
    fn from(p: u32) -> Self {
        Self::Percent(p as f64)
    }
}

impl From<&str> for ColumnWidth {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

/// Как форматировать итог колонки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    /// Валюта, если в ячейках встречается знак валюты; иначе число
    #[default]
    Auto,
    Currency,
    Integer,
    Number,
}

type CellFn<T> = Arc<dyn Fn(&T) -> DisplayValue + Send + Sync>;
type NumericFn<T> = Arc<dyn Fn(&T) -> Option<f64> + Send + Sync>;

#[derive(Clone)]
pub enum ColumnTitle {
    Static(String),
    Computed(Arc<dyn Fn() -> String + Send + Sync>),
}

impl ColumnTitle {
    pub fn text(&self) -> String {
        match self {
            Self::Static(s) => s.clone(),
            Self::Computed(f) => f(),
        }
    }
}

impl fmt::Debug for ColumnTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ColumnTitle").field(&self.text()).finish()
    }
}

/// Описание одной колонки
///
/// # Пример
/// ```rust
/// use frontend::shared::data_table::ColumnDescriptor;
///
/// struct Row { name: String, debt: i64 }
///
/// let columns = vec![
///     ColumnDescriptor::new("Tên", |r: &Row| r.name.clone().into()).width(60.0),
///     ColumnDescriptor::new("Công nợ", |r: &Row| format!("{} ₫", r.debt).into())
///         .width(40.0)
///         .numeric(|r: &Row| Some(r.debt as f64))
///         .summarizable(),
/// ];
/// assert_eq!(columns.len(), 2);
/// ```
pub struct ColumnDescriptor<T> {
    pub title: ColumnTitle,
    pub cell_value: CellFn<T>,
    /// Необязательный числовой доступ для итогов вместо разбора текста
    pub numeric_value: Option<NumericFn<T>>,
    pub width: Option<ColumnWidth>,
    pub fixed_width: bool,
    pub summarizable: bool,
    pub summary_format: SummaryFormat,
}

impl<T> ColumnDescriptor<T> {
    pub fn new(
        title: impl Into<String>,
        cell_value: impl Fn(&T) -> DisplayValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            title: ColumnTitle::Static(title.into()),
            cell_value: Arc::new(cell_value),
            numeric_value: None,
            width: None,
            fixed_width: false,
            summarizable: false,
            summary_format: SummaryFormat::Auto,
        }
    }

    pub fn computed_title(mut self, title: impl Fn() -> String + Send + Sync + 'static) -> Self {
        self.title = ColumnTitle::Computed(Arc::new(title));
        self
    }

    pub fn width(mut self, width: impl Into<ColumnWidth>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn fixed(mut self) -> Self {
        self.fixed_width = true;
        self
    }

    pub fn summarizable(mut self) -> Self {
        self.summarizable = true;
        self
    }

    pub fn summary_format(mut self, format: SummaryFormat) -> Self {
        self.summary_format = format;
        self
    }

    pub fn numeric(mut self, value: impl Fn(&T) -> Option<f64> + Send + Sync + 'static) -> Self {
        self.numeric_value = Some(Arc::new(value));
        self
    }

    pub fn title_text(&self) -> String {
        self.title.text()
    }

    pub fn value(&self, row: &T) -> DisplayValue {
        (self.cell_value)(row)
    }

    pub fn declared_width(&self) -> f64 {
        self.width.as_ref().map(ColumnWidth::percent).unwrap_or(0.0)
    }
}

// Ручная реализация: derive потребовал бы T: Clone
impl<T> Clone for ColumnDescriptor<T> {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            cell_value: Arc::clone(&self.cell_value),
            numeric_value: self.numeric_value.clone(),
            width: self.width.clone(),
            fixed_width: self.fixed_width,
            summarizable: self.summarizable,
            summary_format: self.summary_format,
        }
    }
}

impl<T> fmt::Debug for ColumnDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("title", &self.title)
            .field("width", &self.width)
            .field("fixed_width", &self.fixed_width)
            .field("summarizable", &self.summarizable)
            .field("summary_format", &self.summary_format)
            .finish()
    }
}

/// Строка таблицы, у которой может быть идентификатор
pub trait TableRow {
    /// `None` — строку нельзя выбрать, ключ рендера берётся по позиции
    fn row_id(&self) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_parsing() {
        assert_eq!(ColumnWidth::from("15%").percent(), 15.0);
        assert_eq!(ColumnWidth::from(" 12.5 % ").percent(), 12.5);
        assert_eq!(ColumnWidth::from("20").percent(), 20.0);
        assert_eq!(ColumnWidth::from("auto").percent(), 0.0);
        assert_eq!(ColumnWidth::from(-5.0).percent(), 0.0);
        assert_eq!(ColumnWidth::Percent(f64::NAN).percent(), 0.0);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(DisplayValue::badge("Đang giao", BadgeTone::Brand).text(), "Đang giao");
        assert_eq!(DisplayValue::from(1500_i64).text(), "1500");
        assert_eq!(DisplayValue::from(None::<String>), DisplayValue::Empty);
    }

    #[test]
    fn test_computed_title() {
        let column = ColumnDescriptor::<()>::new("", |_| DisplayValue::Empty)
            .computed_title(|| "Tồn kho".to_string());
        assert_eq!(column.title_text(), "Tồn kho");
    }
}
