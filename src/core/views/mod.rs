pub mod edit;
pub mod list;

#[cfg(test)]
pub(crate) mod testing;

pub use edit::*;
pub use list::*;
