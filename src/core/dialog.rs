use async_trait::async_trait;
use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::debug;

use crate::error::{Result, UserDeskError};

/// Message shown before a user is deleted
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this user?";

/// Yes/no confirmation prompt
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Resolves to `true` only on an affirmative answer
    async fn confirm(&self, message: &str) -> Result<bool>;
}

/// Asks on the terminal
pub struct TerminalConfirmer;

#[async_trait]
impl Confirmer for TerminalConfirmer {
    async fn confirm(&self, message: &str) -> Result<bool> {
        let prompt = message.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .default(false)
                .interact()
        })
        .await
        .map_err(|e| UserDeskError::Io(std::io::Error::other(e)))??;

        debug!("Confirmation answered: {}", answer);
        Ok(answer)
    }
}

/// Answers every prompt the same way (`--yes`)
pub struct AutoConfirmer(pub bool);

#[async_trait]
impl Confirmer for AutoConfirmer {
    async fn confirm(&self, message: &str) -> Result<bool> {
        debug!("Auto-answering '{}' with {}", message, self.0);
        Ok(self.0)
    }
}
