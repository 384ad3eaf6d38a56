use crate::error::Result;
use crate::windows::{WindowId, WindowList};
use tracing::info;

use super::kdotool::KdotoolController;
use super::r#trait::{SearchFilter, WindowController};

/// Запросы уходят в настоящую утилиту, активация только логируется
pub struct DryRunController {
    inner: KdotoolController,
}

impl DryRunController {
    pub fn new(inner: KdotoolController) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl WindowController for DryRunController {
    async fn active_window(&self) -> Result<WindowId> {
        self.inner.active_window().await
    }

    async fn search(&self, filter: &SearchFilter) -> Result<WindowList> {
        self.inner.search(filter).await
    }

    async fn activate(&self, window: &WindowId) -> Result<()> {
        info!("Dry-run: окно {} было бы активировано", window);
        Ok(())
    }
}
