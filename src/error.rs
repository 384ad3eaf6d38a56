use crate::windows::WindowId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KraiseError {
    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Внешняя утилита `{command}` завершилась с ошибкой: {reason}")]
    ExternalTool { command: String, reason: String },

    #[error("Утилита не вернула идентификатор активного окна")]
    NoActiveWindow,

    #[error("Не удалось открыть журнал {path:?}: {source}")]
    LogOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Не удалось активировать окно {window}: {reason}")]
    Activation { window: WindowId, reason: String },

    #[error("Не удалось выполнить команду `{command}`: {reason}")]
    RunCommand { command: String, reason: String },
}

impl KraiseError {
    pub fn external_tool(command: impl Into<String>, reason: impl Into<String>) -> Self {
        KraiseError::ExternalTool {
            command: command.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, KraiseError>;

// Удобный макрос для создания ошибок
#[macro_export]
macro_rules! kraise_error {
    (run_command, $command:expr, $($arg:tt)*) => {
        $crate::error::KraiseError::RunCommand {
            command: $command.to_string(),
            reason: format!($($arg)*),
        }
    };
    (activation, $window:expr, $($arg:tt)*) => {
        $crate::error::KraiseError::Activation {
            window: $window.clone(),
            reason: format!($($arg)*),
        }
    };
}
