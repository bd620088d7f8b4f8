//! Static informational pages

pub const NEWS: &str = "\
=== News ===

UserDesk manages the user directory from the terminal.

  userdesk list            browse users
  userdesk add ...         create a user
  userdesk edit <id> ...   update a user
  userdesk delete <id>     remove a user
";

pub const ABOUT: &str = "\
=== About ===

UserDesk is a console for the users REST resource.
All data lives on the backend; nothing is cached between runs.
";

pub fn not_found(path: &str) -> String {
    format!(
        "=== Page not found ===\n\nNothing lives at '/{}'. Try 'news', 'about' or 'userlist'.\n",
        path
    )
}
