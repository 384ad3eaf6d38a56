use crate::error::{KraiseError, Result};
use crate::kraise_error;
use crate::windows::{parse_window_list, WindowId, WindowList};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

use super::r#trait::{SearchFilter, WindowController};

/// Контроллер поверх kdotool (или совместимой утилиты с теми же подкомандами)
pub struct KdotoolController {
    program: String,
}

impl KdotoolController {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn create_command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args).stdin(Stdio::null());
        cmd
    }

    fn command_line(&self, args: &[&str]) -> String {
        if args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, args.join(" "))
        }
    }

    /// Выполняет подкоманду и разбирает вывод как список окон
    pub async fn query(&self, args: &[&str]) -> Result<WindowList> {
        let command_line = self.command_line(args);
        debug!("Запрос к утилите: {}", command_line);

        let output = self.create_command(args).output().await.map_err(|e| {
            debug!("{} не найден или не запускается: {}", self.program, e);
            KraiseError::external_tool(&command_line, format!("не удалось запустить: {}", e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("{} вернул ошибку: {}", command_line, stderr.trim());
            return Err(KraiseError::external_tool(
                command_line,
                output.status.to_string(),
            ));
        }

        let windows = parse_window_list(&String::from_utf8_lossy(&output.stdout));
        debug!("{} вернул {} окон", command_line, windows.len());
        Ok(windows)
    }
}

#[async_trait::async_trait]
impl WindowController for KdotoolController {
    async fn active_window(&self) -> Result<WindowId> {
        let mut windows = self.query(&["getactivewindow"]).await?.into_iter();

        let active = windows.next().ok_or(KraiseError::NoActiveWindow)?;
        if windows.next().is_some() {
            warn!(
                "getactivewindow вернул несколько окон, используем первое: {}",
                active
            );
        }

        Ok(active)
    }

    async fn search(&self, filter: &SearchFilter) -> Result<WindowList> {
        self.query(&filter.to_args()).await
    }

    async fn activate(&self, window: &WindowId) -> Result<()> {
        let args = ["windowactivate", window.as_str()];
        debug!("Активация окна: {}", self.command_line(&args));

        let output = self
            .create_command(&args)
            .output()
            .await
            .map_err(|e| {
                kraise_error!(activation, window, "не удалось запустить {}: {}", self.program, e)
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!("windowactivate вернул ошибку: {}", stderr.trim());
            return Err(kraise_error!(activation, window, "{}", output.status));
        }

        Ok(())
    }
}
