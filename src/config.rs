use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Имя файла журнала в домашнем каталоге
pub const DEFAULT_JOURNAL_FILE: &str = ".kraise.log";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub controller: ControllerConfig,
    pub journal: JournalConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    /// Утилита управления окнами (kdotool или совместимая, например xdotool)
    pub program: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JournalConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: "compact".to_string(),
            },
            controller: ControllerConfig {
                program: "kdotool".to_string(),
            },
            journal: JournalConfig::default(),
        }
    }
}

impl Config {
    /// Путь к конфигурации по умолчанию: `$XDG_CONFIG_HOME/kraise/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("kraise").join("config.toml"))
    }

    pub fn load<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path.as_ref()));
        }

        let config: Config = figment
            .merge(Env::prefixed("KRAISE_").split("__"))
            .extract()
            .context("Не удалось загрузить конфигурацию")?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "full" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        if self.controller.program.trim().is_empty() {
            anyhow::bail!("controller.program не может быть пустым");
        }

        Ok(())
    }

    /// Путь к журналу: из конфигурации или `~/.kraise.log`
    pub fn journal_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.journal.path {
            return Ok(path.clone());
        }

        let home = dirs::home_dir()
            .context("Не удалось определить домашний каталог для журнала")?;
        Ok(home.join(DEFAULT_JOURNAL_FILE))
    }
}
