use crate::error::Result;
use crate::kraise_error;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Что сделал запуск резервной команды
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// Команда не задана
    NotConfigured,
    /// Команда состоит только из пробелов
    Empty,
    /// Программа отработала успешно
    Completed { program: String, args: Vec<String> },
    /// Dry-run: команда только залогирована
    Simulated { program: String, args: Vec<String> },
}

/// Разбивает командную строку по ASCII-пробелам. Кавычки не поддерживаются.
pub fn split_command(command_line: &str) -> Vec<String> {
    command_line
        .split_ascii_whitespace()
        .map(str::to_string)
        .collect()
}

/// Запускает команду, если ни одно окно не подошло
pub struct FallbackRunner {
    dry_run: bool,
}

impl FallbackRunner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Выполняет команду и ждёт её завершения; stdout/stderr наследуются
    pub async fn run(&self, command_line: Option<&str>) -> Result<FallbackOutcome> {
        let Some(command_line) = command_line else {
            return Ok(FallbackOutcome::NotConfigured);
        };

        let mut tokens = split_command(command_line).into_iter();
        let Some(program) = tokens.next() else {
            debug!("Резервная команда пуста, запускать нечего");
            return Ok(FallbackOutcome::Empty);
        };
        let args: Vec<String> = tokens.collect();

        if self.dry_run {
            info!("Dry-run: была бы запущена команда {} {:?}", program, args);
            return Ok(FallbackOutcome::Simulated { program, args });
        }

        info!("Запуск резервной команды: {} {:?}", program, args);
        let status = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| kraise_error!(run_command, command_line, "{}", e))?;

        if !status.success() {
            return Err(kraise_error!(run_command, command_line, "{}", status));
        }

        Ok(FallbackOutcome::Completed { program, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KraiseError;

    #[test]
    fn test_split_command() {
        assert_eq!(split_command("alacritty -e top"), vec!["alacritty", "-e", "top"]);
        assert_eq!(split_command("  foot\t--title  x \n"), vec!["foot", "--title", "x"]);
        assert!(split_command("   ").is_empty());
    }

    #[test]
    fn test_split_ignores_quotes() {
        assert_eq!(
            split_command("sh -c \"echo hi\""),
            vec!["sh", "-c", "\"echo", "hi\""]
        );
    }

    #[tokio::test]
    async fn test_not_configured() {
        let outcome = FallbackRunner::new(false).run(None).await.unwrap();
        assert_eq!(outcome, FallbackOutcome::NotConfigured);
    }

    #[tokio::test]
    async fn test_whitespace_only_command() {
        let outcome = FallbackRunner::new(false).run(Some(" \t ")).await.unwrap();
        assert_eq!(outcome, FallbackOutcome::Empty);
    }

    #[tokio::test]
    async fn test_runs_program_with_args() {
        let outcome = FallbackRunner::new(false)
            .run(Some("true -e top"))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            FallbackOutcome::Completed {
                program: "true".to_string(),
                args: vec!["-e".to_string(), "top".to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_error() {
        let err = FallbackRunner::new(false).run(Some("false")).await.unwrap_err();
        assert!(matches!(err, KraiseError::RunCommand { .. }));
    }

    #[tokio::test]
    async fn test_missing_program_is_error() {
        let err = FallbackRunner::new(false)
            .run(Some("kraise-no-such-program --flag"))
            .await
            .unwrap_err();
        match err {
            KraiseError::RunCommand { command, .. } => {
                assert_eq!(command, "kraise-no-such-program --flag")
            }
            other => panic!("неожиданная ошибка: {other}"),
        }
    }

    #[tokio::test]
    async fn test_dry_run_does_not_execute() {
        let outcome = FallbackRunner::new(true)
            .run(Some("alacritty -e top"))
            .await
            .unwrap();
        assert_eq!(
            outcome,
            FallbackOutcome::Simulated {
                program: "alacritty".to_string(),
                args: vec!["-e".to_string(), "top".to_string()],
            }
        );
    }
}
