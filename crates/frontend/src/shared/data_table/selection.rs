//! Выбор строк
//!
//! Владелец выбора задаётся явно:
//! - [`SelectionMode::Local`] — выбор хранит сама таблица;
//! - [`SelectionMode::Controlled`] — выбор хранит вызывающий код, таблица
//!   только читает его и сообщает, каким он должен стать.
//!
//! Любое изменение возвращается как `Some(новый набор)`, и только тогда
//! таблица вызывает колбэк. Передача внешнего значения колбэк не вызывает.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionMode {
    Local(Vec<String>),
    Controlled,
}

/// Состояние чекбокса "выбрать все"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Checked,
    Indeterminate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionController {
    mode: SelectionMode,
}

impl SelectionController {
    pub fn local() -> Self {
        Self {
            mode: SelectionMode::Local(Vec::new()),
        }
    }

    pub fn controlled() -> Self {
        Self {
            mode: SelectionMode::Controlled,
        }
    }

    /// Текущий выбор; `external` используется только в режиме Controlled
    pub fn selected<'a>(&'a self, external: &'a [String]) -> &'a [String] {
        match &self.mode {
            SelectionMode::Local(ids) => ids,
            SelectionMode::Controlled => external,
        }
    }

    pub fn is_selected(&self, external: &[String], id: &str) -> bool {
        self.selected(external).iter().any(|s| s == id)
    }

    pub fn toggle(&mut self, external: &[String], id: &str, checked: bool) -> Option<Vec<String>> {
        let current = self.selected(external);
        let present = current.iter().any(|s| s == id);
        if present == checked {
            return None;
        }
        let next: Vec<String> = if checked {
            current.iter().cloned().chain(std::iter::once(id.to_string())).collect()
        } else {
            current.iter().filter(|s| *s != id).cloned().collect()
        };
        Some(self.commit(next))
    }

    /// "Выбрать все" работает только по загруженным строкам:
    /// отмечает ровно их, снятие очищает выбор.
    pub fn select_all(
        &mut self,
        external: &[String],
        loaded_ids: &[String],
        checked: bool,
    ) -> Option<Vec<String>> {
        let next: Vec<String> = if checked {
            dedup(loaded_ids)
        } else {
            Vec::new()
        };
        if self.selected(external) == next.as_slice() {
            return None;
        }
        Some(self.commit(next))
    }

    /// Убирает из локального выбора строки, которых больше нет в данных.
    /// Выбор вызывающего кода не трогается.
    pub fn retain_loaded(&mut self, loaded_ids: &[String]) -> Option<Vec<String>> {
        let SelectionMode::Local(ids) = &self.mode else {
            return None;
        };
        let next: Vec<String> = ids
            .iter()
            .filter(|id| loaded_ids.contains(id))
            .cloned()
            .collect();
        if next.len() == ids.len() {
            return None;
        }
        Some(self.commit(next))
    }

    /// Локальный выбор очищает вызывающий код (например, после массового действия)
    pub fn clear(&mut self) -> Option<Vec<String>> {
        if !matches!(&self.mode, SelectionMode::Local(ids) if !ids.is_empty()) {
            return None;
        }
        Some(self.commit(Vec::new()))
    }

    pub fn header_state(&self, external: &[String], loaded_ids: &[String]) -> HeaderCheckState {
        if loaded_ids.is_empty() {
            return HeaderCheckState::Unchecked;
        }
        let selected = self.selected(external);
        let count = loaded_ids.iter().filter(|id| selected.contains(id)).count();
        if count == 0 {
            HeaderCheckState::Unchecked
        } else if count == loaded_ids.len() {
            HeaderCheckState::Checked
        } else {
            HeaderCheckState::Indeterminate
        }
    }

    fn commit(&mut self, next: Vec<String>) -> Vec<String> {
        if let SelectionMode::Local(ids) = &mut self.mode {
            ids.clone_from(&next);
        }
        next
    }
}

fn dedup(ids: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(ids.len());
    for id in ids {
        if !out.contains(id) {
            out.push(id.clone());
        }
    }
    out
}
