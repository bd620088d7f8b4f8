use tracing::info;

use crate::commands::open::follow;
use crate::commands::render::{print_notice, print_validation};
use crate::commands::session::Session;
use crate::core::UserEditView;
use crate::error::UserDeskError;
use crate::models::{Field, LoadOutcome, SubmitOutcome, UserPatch};

/// Editable field values given on the command line
#[derive(Debug, Clone, Default)]
pub struct UserFields {
    pub user_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub user_status: Option<String>,
    pub department: Option<String>,
}

impl UserFields {
    /// Fields that were given, in form order
    pub fn entries(&self) -> Vec<(Field, String)> {
        [
            (Field::UserName, &self.user_name),
            (Field::FirstName, &self.first_name),
            (Field::LastName, &self.last_name),
            (Field::Email, &self.email),
            (Field::UserStatus, &self.user_status),
            (Field::Department, &self.department),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.clone().map(|v| (field, v)))
        .collect()
    }

    pub fn to_patch(&self) -> UserPatch {
        UserPatch {
            user_name: self.user_name.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            user_status: self.user_status.clone(),
            department: self.department.clone(),
            ..Default::default()
        }
    }
}

/// Create a user through the editor in `New` mode
pub async fn add_user(session: &Session, fields: UserFields) -> Result<(), UserDeskError> {
    let view = session.edit_view();
    view.activate(None).await;
    submit(session, &view, &fields).await
}

/// Update a user through the editor in `Edit` mode
pub async fn edit_user(
    session: &Session,
    user_id: i64,
    fields: UserFields,
) -> Result<(), UserDeskError> {
    let view = session.edit_view();
    if view.activate(Some(user_id)).await == LoadOutcome::Failed {
        let message = view
            .notice()
            .map(|n| n.message)
            .unwrap_or_else(|| format!("Could not load user {}", user_id));
        return Err(UserDeskError::ViewFailed(message));
    }
    submit(session, &view, &fields).await
}

async fn submit(
    session: &Session,
    view: &UserEditView,
    fields: &UserFields,
) -> Result<(), UserDeskError> {
    for (field, value) in fields.entries() {
        view.set_field(field, value)?;
    }

    let outcome = view.on_submit().await;
    view.deactivate();

    match outcome {
        SubmitOutcome::Saved(user) => {
            info!("Saved user {}", user.user_id);
            println!("Saved user {} ({})\n", user.user_id, user.display_name());
            follow(session).await
        }
        SubmitOutcome::Invalid(validation) => {
            print_validation(&validation);
            Err(validation.into())
        }
        SubmitOutcome::Failed | SubmitOutcome::Discarded => {
            let notice = view.notice();
            if let Some(notice) = &notice {
                print_notice(notice);
            }
            Err(UserDeskError::ViewFailed(
                notice
                    .map(|n| n.message)
                    .unwrap_or_else(|| "User was not saved".to_string()),
            ))
        }
    }
}
