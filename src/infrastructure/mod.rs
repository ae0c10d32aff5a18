//! Infrastructure layer - File system access and terminal input

pub mod prompt;
pub mod store;

pub use prompt::Prompt;
pub use store::{DocumentStore, FileSystemStore};
