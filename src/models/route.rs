use std::fmt;

/// Client-side navigation target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    News,
    About,
    UserList,
    UserNew,
    UserEdit(i64),
    /// Lands on the user list; deletion itself happens there
    UserDelete(i64),
    NotFound(String),
}

/// Page a route renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    News,
    About,
    UserList,
    UserEditor,
    NotFound,
}

impl Route {
    /// Resolve a navigation path. The empty path redirects to `news`.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_matches('/');
        let segments: Vec<&str> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split('/').collect()
        };

        match segments.as_slice() {
            [] | ["news"] => Route::News,
            ["about"] => Route::About,
            ["userlist"] => Route::UserList,
            ["user", "new"] => Route::UserNew,
            // Negative ids are reserved for records not yet created
            ["user", id, action] => match (id.parse::<i64>(), *action) {
                (Ok(id), "edit") if id >= 0 => Route::UserEdit(id),
                (Ok(id), "delete") if id >= 0 => Route::UserDelete(id),
                _ => Route::NotFound(trimmed.to_string()),
            },
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    /// Canonical path of the route
    pub fn path(&self) -> String {
        match self {
            Route::News => "/news".to_string(),
            Route::About => "/about".to_string(),
            Route::UserList => "/userlist".to_string(),
            Route::UserNew => "/user/new".to_string(),
            Route::UserEdit(id) => format!("/user/{}/edit", id),
            Route::UserDelete(id) => format!("/user/{}/delete", id),
            Route::NotFound(path) => format!("/{}", path),
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::News => Page::News,
            Route::About => Page::About,
            Route::UserList | Route::UserDelete(_) => Page::UserList,
            Route::UserNew | Route::UserEdit(_) => Page::UserEditor,
            Route::NotFound(_) => Page::NotFound,
        }
    }

    /// Identifier parameter carried by the route, if any
    pub fn user_id(&self) -> Option<i64> {
        match self {
            Route::UserEdit(id) | Route::UserDelete(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
