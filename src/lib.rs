//! UserDesk - terminal console for a REST users resource
//!
//! UserDesk lists, creates, edits and deletes user records held by a REST
//! backend. Two headless views drive the workflows and a command-line front
//! end renders them.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (list, show, add, edit, patch, delete, open)
//! - **core**: Backend adapters, views, grid, navigation, confirmation, config loading
//! - **models**: Data structures (user, draft, routes, config, view state)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{ApiError, Result, UserDeskError};
