use crate::windows::{intersect, subtract, WindowList};

/// Критерии отбора окон из командной строки.
///
/// Незаданное значение хранится как пустая строка и не отличается от явно
/// переданного пустого фильтра.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    pub wmclass: String,
    pub title: String,
    pub exclude_title: String,
    pub run: String,
}

impl FilterArgs {
    pub fn wmclass(&self) -> Option<&str> {
        non_empty(&self.wmclass)
    }

    pub fn title(&self) -> Option<&str> {
        non_empty(&self.title)
    }

    pub fn exclude_title(&self) -> Option<&str> {
        non_empty(&self.exclude_title)
    }

    pub fn run(&self) -> Option<&str> {
        non_empty(&self.run)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Результаты поисковых запросов, из которых строится список кандидатов
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub all: WindowList,
    pub by_class: Option<WindowList>,
    pub by_title: Option<WindowList>,
    pub excluded: Option<WindowList>,
}

/// Сужает полный список окон фильтрами.
///
/// Класс и заголовок применяются последовательно (окно должно подходить под
/// оба), затем вычитаются исключённые. Порядок итогового списка совпадает с
/// порядком полного списка.
pub fn narrow(results: SearchResults) -> WindowList {
    let mut remaining = results.all;

    if let Some(by_class) = results.by_class {
        remaining = intersect(&by_class, &remaining);
    }

    if let Some(by_title) = results.by_title {
        remaining = intersect(&by_title, &remaining);
    }

    match results.excluded {
        Some(excluded) => subtract(&remaining, &excluded),
        None => remaining,
    }
}
