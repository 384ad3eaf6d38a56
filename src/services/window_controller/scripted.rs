//! Контроллер с заранее заданными ответами для тестов без kdotool.

use crate::error::{KraiseError, Result};
use crate::kraise_error;
use crate::windows::{WindowId, WindowList};
use std::collections::HashMap;
use std::sync::Mutex;

use super::r#trait::{SearchFilter, WindowController};

#[derive(Default)]
pub struct ScriptedController {
    active: Option<WindowId>,
    all: WindowList,
    by_class: HashMap<String, WindowList>,
    by_name: HashMap<String, WindowList>,
    failing_search: Option<SearchFilter>,
    fail_activation: bool,
    queries: Mutex<Vec<SearchFilter>>,
    activated: Mutex<Vec<WindowId>>,
}

pub fn ids(raw: &[&str]) -> WindowList {
    raw.iter().map(|id| WindowId::from(*id)).collect()
}

impl ScriptedController {
    pub fn new(active: Option<&str>, all: &[&str]) -> Self {
        Self {
            active: active.map(WindowId::from),
            all: ids(all),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: &str, windows: &[&str]) -> Self {
        self.by_class.insert(class.to_string(), ids(windows));
        self
    }

    pub fn with_name(mut self, name: &str, windows: &[&str]) -> Self {
        self.by_name.insert(name.to_string(), ids(windows));
        self
    }

    pub fn failing_search(mut self, filter: SearchFilter) -> Self {
        self.failing_search = Some(filter);
        self
    }

    pub fn failing_activation(mut self) -> Self {
        self.fail_activation = true;
        self
    }

    pub fn queries(&self) -> Vec<SearchFilter> {
        self.queries.lock().unwrap().clone()
    }

    pub fn activated(&self) -> Vec<WindowId> {
        self.activated.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl WindowController for ScriptedController {
    async fn active_window(&self) -> Result<WindowId> {
        self.active.clone().ok_or(KraiseError::NoActiveWindow)
    }

    async fn search(&self, filter: &SearchFilter) -> Result<WindowList> {
        self.queries.lock().unwrap().push(filter.clone());

        if self.failing_search.as_ref() == Some(filter) {
            return Err(KraiseError::external_tool(
                format!("kdotool {}", filter),
                "exit status: 1",
            ));
        }

        let windows = match filter {
            SearchFilter::All => self.all.clone(),
            SearchFilter::Class(class) => self.by_class.get(class).cloned().unwrap_or_default(),
            SearchFilter::Name(name) => self.by_name.get(name).cloned().unwrap_or_default(),
        };
        Ok(windows)
    }

    async fn activate(&self, window: &WindowId) -> Result<()> {
        if self.fail_activation {
            return Err(kraise_error!(activation, window, "exit status: 1"));
        }
        self.activated.lock().unwrap().push(window.clone());
        Ok(())
    }
}
