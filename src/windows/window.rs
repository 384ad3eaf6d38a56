use std::fmt;

/// Идентификатор окна в том виде, в котором его вернула утилита управления окнами.
///
/// Никогда не разбирается и не интерпретируется: сравнивается только на равенство.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Окна в порядке перечисления внешней утилиты
pub type WindowList = Vec<WindowId>;

/// Разбирает вывод утилиты: по одному идентификатору на строку.
///
/// Пустой вывод (или только пробельные символы) даёт пустой список, а не `[""]`.
pub fn parse_window_list(output: &str) -> WindowList {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed.split('\n').map(WindowId::from).collect()
}

/// Представление списка для журнала: `[a b c]`, пустой список даёт `[]`
pub fn format_window_list(windows: &[WindowId]) -> String {
    let joined = windows
        .iter()
        .map(WindowId::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", joined)
}
