use chrono::{DateTime, Utc};
use std::fmt;

use crate::models::{DraftValidation, User};

/// Mode of the edit view, chosen once when the view is activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditMode {
    New,
    Edit(i64),
}

impl EditMode {
    pub fn from_param(user_id: Option<i64>) -> Self {
        match user_id {
            Some(id) => EditMode::Edit(id),
            None => EditMode::New,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, EditMode::Edit(_))
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditMode::New => write!(f, "new user"),
            EditMode::Edit(id) => write!(f, "edit user {}", id),
        }
    }
}

/// Visible failure indicator raised by a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            at: Utc::now(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.message)
    }
}

/// Outcome of a list reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Failed,
    /// The view was deactivated before the response arrived
    Discarded,
}

/// Outcome of the confirmed delete flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Failed,
    Discarded,
}

/// Outcome of submitting the edit form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(User),
    Invalid(DraftValidation),
    Failed,
    Discarded,
}
