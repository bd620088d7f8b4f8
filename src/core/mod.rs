pub mod client;
pub mod config;
pub mod dialog;
pub mod grid;
pub mod navigation;
pub mod scope;
pub mod views;

pub use client::*;
pub use config::*;
pub use dialog::*;
pub use grid::*;
pub use navigation::*;
pub use scope::*;
pub use views::*;
