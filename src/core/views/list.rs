use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::core::client::{Services, UserDirectory, UserListing};
use crate::core::dialog::{Confirmer, DELETE_CONFIRMATION};
use crate::core::grid::UserGrid;
use crate::core::navigation::Navigator;
use crate::core::scope::ViewScope;
use crate::error::Result;
use crate::models::{DeleteOutcome, GridConfig, LoadOutcome, Notice, Route, User};

struct ListState {
    grid: UserGrid,
    loaded_at: Option<DateTime<Utc>>,
    notice: Option<Notice>,
}

/// Point-in-time copy of what the list view shows
#[derive(Debug, Clone)]
pub struct ListSnapshot {
    pub rows: Vec<User>,
    pub page_index: usize,
    pub total_pages: usize,
    pub matching: usize,
    pub total: usize,
    pub loaded_at: Option<DateTime<Utc>>,
    pub notice: Option<Notice>,
}

/// User list view: the in-memory collection, its grid projection, and the
/// edit/add/delete flows started from it.
pub struct UserListView {
    listing: Arc<dyn UserListing>,
    directory: Arc<dyn UserDirectory>,
    confirmer: Arc<dyn Confirmer>,
    navigator: Arc<dyn Navigator>,
    scope: ViewScope,
    state: Mutex<ListState>,
}

impl UserListView {
    pub fn new(
        services: &Services,
        confirmer: Arc<dyn Confirmer>,
        navigator: Arc<dyn Navigator>,
        grid_config: &GridConfig,
    ) -> Self {
        let mut grid = UserGrid::new(grid_config.page_size);
        if let Some(field) = grid_config.sort {
            grid.sort_by(field, Default::default());
        }

        Self {
            listing: services.listing.clone(),
            directory: services.directory.clone(),
            confirmer,
            navigator,
            scope: ViewScope::new(),
            state: Mutex::new(ListState {
                grid,
                loaded_at: None,
                notice: None,
            }),
        }
    }

    /// Open the view and load the collection
    pub async fn activate(&self) -> LoadOutcome {
        self.scope.open();
        self.load_users().await
    }

    /// Tear the view down; pending results are discarded
    pub fn deactivate(&self) {
        debug!("User list deactivated");
        self.scope.close();
    }

    pub fn is_active(&self) -> bool {
        self.scope.is_active()
    }

    /// Fetch the full collection and replace the local copy.
    /// On failure the previous rows stay and a notice is raised.
    pub async fn load_users(&self) -> LoadOutcome {
        let Some(ticket) = self.scope.ticket() else {
            debug!("User list is not active, skipping load");
            return LoadOutcome::Discarded;
        };

        let result = self.listing.fetch_users(None).await;

        if !self.scope.is_current(ticket) {
            debug!("Discarding user list response for a closed view");
            return LoadOutcome::Discarded;
        }

        let mut state = self.lock();
        match result {
            Ok(users) => {
                let count = users.len();
                state.grid.set_data(users);
                state.loaded_at = Some(Utc::now());
                state.notice = None;
                debug!("Loaded {} users", count);
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                warn!("Failed to load users: {}", e);
                state.notice = Some(Notice::new(format!("Could not load users: {}", e)));
                LoadOutcome::Failed
            }
        }
    }

    pub fn on_edit_user(&self, user: &User) {
        debug!("Edit user: {}", user.user_id);
        self.navigator.navigate(Route::UserEdit(user.user_id));
    }

    pub fn on_add_user(&self) {
        self.navigator.navigate(Route::UserNew);
    }

    /// Ask for confirmation, delete on the backend, then reload.
    /// The row disappears only through the reload.
    pub async fn on_delete_user(&self, user: &User) -> Result<DeleteOutcome> {
        let Some(ticket) = self.scope.ticket() else {
            return Ok(DeleteOutcome::Discarded);
        };

        let confirmed = self.confirmer.confirm(DELETE_CONFIRMATION).await?;
        if !self.scope.is_current(ticket) {
            debug!("User list closed while confirming, not deleting {}", user.user_id);
            return Ok(DeleteOutcome::Discarded);
        }
        if !confirmed {
            debug!("Deletion of user {} cancelled", user.user_id);
            return Ok(DeleteOutcome::Cancelled);
        }

        let user_id = user.user_id.to_string();
        let result = self.directory.delete_user(&user_id).await;

        if !self.scope.is_current(ticket) {
            debug!("Discarding delete response for a closed view");
            return Ok(DeleteOutcome::Discarded);
        }

        match result {
            Ok(()) => {
                info!("User {} deleted successfully", user_id);
                match self.load_users().await {
                    LoadOutcome::Discarded => Ok(DeleteOutcome::Discarded),
                    _ => Ok(DeleteOutcome::Deleted),
                }
            }
            Err(e) => {
                error!("Error deleting user {}: {}", user_id, e);
                self.lock().notice =
                    Some(Notice::new(format!("Could not delete user {}: {}", user_id, e)));
                Ok(DeleteOutcome::Failed)
            }
        }
    }

    /// Adjust filter, sort or paging
    pub fn with_grid<R>(&self, f: impl FnOnce(&mut UserGrid) -> R) -> R {
        f(&mut self.lock().grid)
    }

    pub fn find(&self, user_id: i64) -> Option<User> {
        self.lock().grid.find(user_id).cloned()
    }

    pub fn users(&self) -> Vec<User> {
        self.lock().grid.data().to_vec()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.lock().notice.clone()
    }

    pub fn snapshot(&self) -> ListSnapshot {
        let state = self.lock();
        ListSnapshot {
            rows: state.grid.rows().into_iter().cloned().collect(),
            page_index: state.grid.page_index(),
            total_pages: state.grid.total_pages(),
            matching: state.grid.filtered().len(),
            total: state.grid.data().len(),
            loaded_at: state.loaded_at,
            notice: state.notice.clone(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ListState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
