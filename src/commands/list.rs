use std::sync::Arc;

use crate::commands::render::print_list;
use crate::commands::session::Session;
use crate::core::{AutoConfirmer, SortDirection};
use crate::error::UserDeskError;
use crate::models::{Field, LoadOutcome};

/// Grid settings for the list command
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub filter: Option<String>,
    pub sort: Option<Field>,
    pub descending: bool,
    /// One-based page number
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

/// Load and print the user list
pub async fn list_users(session: &Session, options: ListOptions) -> Result<(), UserDeskError> {
    // Listing never deletes, so no prompt is needed
    let view = session.list_view(Arc::new(AutoConfirmer(false)));
    let outcome = view.activate().await;

    view.with_grid(|grid| {
        if let Some(size) = options.page_size {
            grid.set_page_size(size);
        }
        if let Some(filter) = &options.filter {
            grid.set_filter(filter.as_str());
        }
        if let Some(field) = options.sort {
            let direction = if options.descending {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            grid.sort_by(field, direction);
        }
        if let Some(page) = options.page {
            grid.go_to_page(page.saturating_sub(1));
        }
    });

    print_list(&view.snapshot());
    view.deactivate();

    match (outcome, view.notice()) {
        (LoadOutcome::Failed, Some(notice)) => Err(UserDeskError::ViewFailed(notice.message)),
        _ => Ok(()),
    }
}
