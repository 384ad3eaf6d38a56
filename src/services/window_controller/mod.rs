//! WindowController: граница с внешней утилитой управления окнами.
//!
//! Модуль отвечает ТОЛЬКО за запросы к утилите (активное окно, поиск,
//! активация) и разбор её вывода. Отбор кандидатов и выбор окна для
//! активации живут в `filters` и `services::activation`.

mod dry_run;
mod kdotool;
#[cfg(test)]
pub mod scripted;
mod r#trait;

pub use self::r#trait::{create_window_controller, SearchFilter, WindowController};
