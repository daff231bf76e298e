//! SQLite persistence adapter for tasks.

mod models;
mod repository;
pub(crate) mod schema;

pub use repository::{SqliteTaskRepository, TaskSqlitePool};
