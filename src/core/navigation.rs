use std::sync::Mutex;
use tracing::debug;

use crate::models::Route;

/// Navigation collaborator the views hand routes to
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Navigator that records every route it is sent, in order
#[derive(Debug, Default)]
pub struct History {
    routes: Mutex<Vec<Route>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent route, if any
    pub fn current(&self) -> Option<Route> {
        self.lock().last().cloned()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Route>> {
        // A poisoned history is still a valid list of routes
        self.routes.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Navigator for History {
    fn navigate(&self, route: Route) {
        debug!("Navigating to {}", route);
        self.lock().push(route);
    }
}
