//! Client state layer for the task API.
//!
//! [`TodoApi`] speaks the REST surface; [`TodoStore`] holds the in-memory UI
//! state (list, filter, sort, selection) and refetches the full list from
//! the server after every mutation rather than patching its own view;
//! [`render`] turns the store state into terminal output.

mod http;
mod render;
mod store;

pub use http::{ClientError, NewTodo, TodoApi, TodoPatch};
pub use render::render;
pub use store::TodoStore;
