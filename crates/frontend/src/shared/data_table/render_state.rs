//! Состояние отрисовки и полоса страниц

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Loading,
    Empty,
    Populated,
}

impl RenderState {
    pub fn derive(loading: bool, row_count: usize) -> Self {
        if loading {
            Self::Loading
        } else if row_count == 0 {
            Self::Empty
        } else {
            Self::Populated
        }
    }

    /// Заголовок есть только у таблицы со строками
    pub fn shows_header(&self) -> bool {
        matches!(self, Self::Populated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

/// Полоса ссылок на страницы. Страницы нумеруются с 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStrip {
    pub current: usize,
    pub page_count: usize,
    pub links: Vec<PageLink>,
}

impl PageStrip {
    /// `None`, если страница одна
    pub fn build(current_page: usize, page_count: usize) -> Option<Self> {
        if page_count <= 1 {
            return None;
        }
        let current = current_page.clamp(1, page_count);
        let links = (1..=page_count)
            .map(|number| PageLink {
                number,
                active: number == current,
            })
            .collect();
        Some(Self {
            current,
            page_count,
            links,
        })
    }

    pub fn prev_disabled(&self) -> bool {
        self.current <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current >= self.page_count
    }

    pub fn prev_page(&self) -> Option<usize> {
        (!self.prev_disabled()).then(|| self.current - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        (!self.next_disabled()).then(|| self.current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state() {
        assert_eq!(RenderState::derive(true, 10), RenderState::Loading);
        assert_eq!(RenderState::derive(false, 0), RenderState::Empty);
        assert_eq!(RenderState::derive(false, 3), RenderState::Populated);
        assert!(!RenderState::Loading.shows_header());
        assert!(!RenderState::Empty.shows_header());
    }

    #[test]
    fn test_first_page() {
        let strip = PageStrip::build(1, 5).unwrap();
        assert!(strip.prev_disabled());
        assert!(!strip.next_disabled());
        assert_eq!(strip.links.len(), 5);
        assert_eq!(strip.prev_page(), None);
        assert_eq!(strip.next_page(), Some(2));
        assert!(strip.links[0].active);
    }

    #[test]
    fn test_last_page() {
        let strip = PageStrip::build(5, 5).unwrap();
        assert!(strip.next_disabled());
        assert!(!strip.prev_disabled());
        assert_eq!(strip.next_page(), None);
        assert_eq!(strip.prev_page(), Some(4));
    }

    #[test]
    fn test_single_page_has_no_strip() {
        assert_eq!(PageStrip::build(1, 1), None);
        assert_eq!(PageStrip::build(1, 0), None);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let strip = PageStrip::build(9, 3).unwrap();
        assert_eq!(strip.current, 3);
        let strip = PageStrip::build(0, 3).unwrap();
        assert_eq!(strip.current, 1);
    }
}
