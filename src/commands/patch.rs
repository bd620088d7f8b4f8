use tracing::warn;

use crate::commands::save::UserFields;
use crate::commands::session::Session;
use crate::core::UserDirectory;
use crate::error::UserDeskError;

/// Send only the given fields to the backend
pub async fn patch_user(
    session: &Session,
    user_id: i64,
    fields: UserFields,
) -> Result<(), UserDeskError> {
    let patch = fields.to_patch();
    if patch.is_empty() {
        warn!("Nothing to patch for user {}", user_id);
        println!("No fields given; nothing to update.");
        return Ok(());
    }

    session.services.directory.patch_user(user_id, &patch).await?;
    println!("Patched user {}", user_id);
    Ok(())
}
