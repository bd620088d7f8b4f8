use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, warn};

use crate::core::client::{Services, UserDirectory};
use crate::core::navigation::Navigator;
use crate::core::scope::ViewScope;
use crate::error::Result;
use crate::models::{
    DraftValidation, EditMode, Field, LoadOutcome, Notice, Route, SubmitOutcome, UserDraft,
    NEW_USER_ID,
};

struct EditState {
    mode: EditMode,
    draft: UserDraft,
    notice: Option<Notice>,
}

/// Create/edit form for a single user
pub struct UserEditView {
    directory: Arc<dyn UserDirectory>,
    navigator: Arc<dyn Navigator>,
    scope: ViewScope,
    state: Mutex<EditState>,
}

impl UserEditView {
    pub fn new(services: &Services, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            directory: services.directory.clone(),
            navigator,
            scope: ViewScope::new(),
            state: Mutex::new(EditState {
                mode: EditMode::New,
                draft: UserDraft::new(),
                notice: None,
            }),
        }
    }

    /// Enter the view. With an identifier the record is fetched and merged
    /// into a fresh draft (`Edit`); without one the draft stays empty (`New`).
    pub async fn activate(&self, user_id: Option<i64>) -> LoadOutcome {
        let ticket = self.scope.open();
        let mode = EditMode::from_param(user_id);
        {
            let mut state = self.lock();
            state.mode = mode;
            state.draft = UserDraft::new();
            state.notice = None;
        }

        let EditMode::Edit(id) = mode else {
            debug!("No user id provided, empty form");
            return LoadOutcome::Loaded(0);
        };

        debug!("Fetching user {} for editing", id);
        let result = self.directory.get_user(id).await;

        if !self.scope.is_current(ticket) {
            debug!("Discarding user {} for a closed editor", id);
            return LoadOutcome::Discarded;
        }

        let mut state = self.lock();
        match result {
            Ok(fetched) => {
                state.draft.apply(&fetched);
                LoadOutcome::Loaded(1)
            }
            Err(e) => {
                error!("Failed to fetch user {}: {}", id, e);
                state.notice = Some(Notice::new(format!("Could not load user {}: {}", id, e)));
                LoadOutcome::Failed
            }
        }
    }

    pub fn deactivate(&self) {
        debug!("User editor deactivated");
        self.scope.close();
    }

    pub fn mode(&self) -> EditMode {
        self.lock().mode
    }

    pub fn draft(&self) -> UserDraft {
        self.lock().draft.clone()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.lock().notice.clone()
    }

    /// Edit one field of the draft; `user_id` is read-only
    pub fn set_field(&self, field: Field, value: impl Into<String>) -> Result<()> {
        self.lock().draft.set(field, value)
    }

    pub fn validate(&self) -> DraftValidation {
        self.lock().draft.validate()
    }

    /// Validate the draft and save it. Nothing is sent when validation fails.
    pub async fn on_submit(&self) -> SubmitOutcome {
        let Some(ticket) = self.scope.ticket() else {
            return SubmitOutcome::Discarded;
        };

        let (mode, draft) = {
            let state = self.lock();
            (state.mode, state.draft.clone())
        };

        let validation = draft.validate();
        if !validation.is_valid() {
            warn!("Form is invalid: {}", validation);
            return SubmitOutcome::Invalid(validation);
        }

        let sent_id = match mode {
            EditMode::Edit(id) => id,
            EditMode::New => NEW_USER_ID,
        };
        let result = match mode {
            EditMode::Edit(id) => {
                debug!("Replacing user {}", id);
                self.directory.replace_user(id, &draft.to_user(id)).await
            }
            EditMode::New => {
                debug!("Creating new user");
                self.directory.create_user(&draft.to_user(sent_id)).await
            }
        };

        if !self.scope.is_current(ticket) {
            debug!("Discarding submit response for a closed editor");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                // Fields the response leaves out keep the submitted values
                let saved = {
                    let mut state = self.lock();
                    state.draft.apply(&response);
                    state.draft.to_user(state.draft.user_id().unwrap_or(sent_id))
                };
                info!("Saved user {} ({})", saved.user_id, mode);
                self.navigator.navigate(Route::UserList);
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                error!("Error saving user ({}): {}", mode, e);
                self.lock().notice = Some(Notice::new(format!("Could not save user: {}", e)));
                SubmitOutcome::Failed
            }
        }
    }

    /// Leave the editor for the user list. Deletion is done by the list.
    pub fn on_delete_user(&self) {
        debug!("Leaving editor for the user list");
        self.navigator.navigate(Route::UserList);
    }
}

impl UserEditView {
    fn lock(&self) -> MutexGuard<'_, EditState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}
