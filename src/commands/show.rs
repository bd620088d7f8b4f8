use crate::commands::render::{print_draft, print_notice};
use crate::commands::session::Session;
use crate::error::UserDeskError;
use crate::models::LoadOutcome;

/// Open the editor for a user (or an empty form) and print the draft
pub async fn show_user(session: &Session, user_id: Option<i64>) -> Result<(), UserDeskError> {
    let view = session.edit_view();
    let outcome = view.activate(user_id).await;

    if let Some(notice) = view.notice() {
        print_notice(&notice);
    }
    print_draft(view.mode(), &view.draft());
    view.deactivate();

    match (outcome, view.notice()) {
        (LoadOutcome::Failed, Some(notice)) => Err(UserDeskError::ViewFailed(notice.message)),
        _ => Ok(()),
    }
}
