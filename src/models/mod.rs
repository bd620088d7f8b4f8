pub mod config;
pub mod draft;
pub mod route;
pub mod user;
pub mod view;

pub use config::*;
pub use draft::*;
pub use route::*;
pub use user::*;
pub use view::*;
