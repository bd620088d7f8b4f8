use std::path::PathBuf;
use std::sync::Arc;

use crate::core::{load_config, Confirmer, History, Services, UserEditView, UserListView};
use crate::error::UserDeskError;
use crate::models::{Config, Route};

/// Options shared by every command
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Explicit config file
    pub config: Option<PathBuf>,
    /// Backend URL override
    pub url: Option<String>,
    /// Timeout override
    pub timeout: Option<u64>,
}

/// Services and navigation state for one CLI invocation
pub struct Session {
    pub config: Config,
    pub services: Services,
    pub history: Arc<History>,
}

impl Session {
    /// Load configuration and connect to the backend
    pub fn open(options: &GlobalOptions) -> Result<Self, UserDeskError> {
        let cwd = std::env::current_dir()?;
        let config = load_config(
            &cwd,
            options.config.as_deref(),
            options.url.clone(),
            options.timeout,
        )?;
        let services = Services::connect(&config.backend)?;
        Ok(Self::with_services(config, services))
    }

    pub fn with_services(config: Config, services: Services) -> Self {
        Self {
            config,
            services,
            history: Arc::new(History::new()),
        }
    }

    pub fn list_view(&self, confirmer: Arc<dyn Confirmer>) -> UserListView {
        UserListView::new(
            &self.services,
            confirmer,
            self.history.clone(),
            &self.config.grid,
        )
    }

    pub fn edit_view(&self) -> UserEditView {
        UserEditView::new(&self.services, self.history.clone())
    }

    /// Route the last view navigated to, if any
    pub fn current_route(&self) -> Option<Route> {
        self.history.current()
    }
}
