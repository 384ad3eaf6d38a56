use crate::config::ControllerConfig;
use crate::error::Result;
use crate::windows::{WindowId, WindowList};
use std::fmt;

/// Параметры подкоманды `search`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Все окна
    All,
    /// `search --class <value>`
    Class(String),
    /// `search --name <value>`
    Name(String),
}

impl SearchFilter {
    /// Аргументы командной строки утилиты для этого запроса
    pub fn to_args(&self) -> Vec<&str> {
        match self {
            SearchFilter::All => vec!["search"],
            SearchFilter::Class(class) => vec!["search", "--class", class.as_str()],
            SearchFilter::Name(name) => vec!["search", "--name", name.as_str()],
        }
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_args().join(" "))
    }
}

/// Trait for window controllers: real utility, dry-run wrapper or scripted fake
#[async_trait::async_trait]
pub trait WindowController: Send + Sync {
    /// Identifier of the currently focused window
    async fn active_window(&self) -> Result<WindowId>;

    /// Windows matching the filter, in the utility's enumeration order
    async fn search(&self, filter: &SearchFilter) -> Result<WindowList>;

    /// Focus the given window
    async fn activate(&self, window: &WindowId) -> Result<()>;
}

/// Factory function to create an appropriate window controller based on the dry_run flag
pub fn create_window_controller(
    config: &ControllerConfig,
    dry_run: bool,
) -> Box<dyn WindowController> {
    let controller = super::kdotool::KdotoolController::new(config.program.clone());
    if dry_run {
        Box::new(super::dry_run::DryRunController::new(controller))
    } else {
        Box::new(controller)
    }
}
