use crate::commands::list::{list_users, ListOptions};
use crate::commands::pages;
use crate::commands::session::Session;
use crate::commands::show::show_user;
use crate::error::UserDeskError;
use crate::models::Route;

/// Resolve a navigation path and render the page it leads to
pub async fn open_path(session: &Session, path: &str) -> Result<(), UserDeskError> {
    let route = Route::parse(path);
    render_route(session, &route).await
}

/// Render the page for a route
pub async fn render_route(session: &Session, route: &Route) -> Result<(), UserDeskError> {
    match route {
        Route::News => {
            print!("{}", pages::NEWS);
            Ok(())
        }
        Route::About => {
            print!("{}", pages::ABOUT);
            Ok(())
        }
        Route::UserList | Route::UserDelete(_) => {
            list_users(session, ListOptions::default()).await
        }
        Route::UserNew => show_user(session, None).await,
        Route::UserEdit(id) => show_user(session, Some(*id)).await,
        Route::NotFound(path) => {
            print!("{}", pages::not_found(path));
            Err(UserDeskError::ViewFailed(format!("No page at '/{}'", path)))
        }
    }
}

/// Render wherever the last view navigated to
pub async fn follow(session: &Session) -> Result<(), UserDeskError> {
    match session.current_route() {
        Some(route) => render_route(session, &route).await,
        None => Ok(()),
    }
}
