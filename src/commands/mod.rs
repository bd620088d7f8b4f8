pub mod delete;
pub mod list;
pub mod open;
pub mod pages;
pub mod patch;
pub mod render;
pub mod save;
pub mod session;
pub mod show;

pub use delete::*;
pub use list::*;
pub use open::*;
pub use patch::*;
pub use save::*;
pub use session::*;
pub use show::*;
