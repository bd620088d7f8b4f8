use std::sync::Arc;

use crate::commands::render::{print_list, print_notice};
use crate::commands::session::Session;
use crate::core::{AutoConfirmer, Confirmer, TerminalConfirmer};
use crate::error::UserDeskError;
use crate::models::{DeleteOutcome, LoadOutcome};

/// Delete a user from the list after confirmation
pub async fn delete_user(session: &Session, user_id: i64, yes: bool) -> Result<(), UserDeskError> {
    let confirmer: Arc<dyn Confirmer> = if yes {
        Arc::new(AutoConfirmer(true))
    } else {
        Arc::new(TerminalConfirmer)
    };

    let view = session.list_view(confirmer);
    if view.activate().await == LoadOutcome::Failed {
        let message = view
            .notice()
            .map(|n| n.message)
            .unwrap_or_else(|| "Could not load users".to_string());
        return Err(UserDeskError::ViewFailed(message));
    }

    let Some(user) = view.find(user_id) else {
        view.deactivate();
        return Err(UserDeskError::UserNotFound(user_id));
    };

    let outcome = view.on_delete_user(&user).await;
    let result = match outcome? {
        DeleteOutcome::Deleted => {
            println!("Deleted user {} ({})\n", user.user_id, user.display_name());
            print_list(&view.snapshot());
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            println!("Cancelled.");
            Ok(())
        }
        DeleteOutcome::Failed | DeleteOutcome::Discarded => {
            let notice = view.notice();
            if let Some(notice) = &notice {
                print_notice(notice);
            }
            Err(UserDeskError::ViewFailed(
                notice
                    .map(|n| n.message)
                    .unwrap_or_else(|| format!("User {} was not deleted", user_id)),
            ))
        }
    };

    view.deactivate();
    result
}
