//! HTTP resource layer exposing the task collection.
//!
//! Translates HTTP verbs on `/api/todos` into task service calls, maps
//! errors to status codes, and keeps all request/response DTOs at this
//! boundary.

mod dto;
mod error;
mod handlers;
mod routes;

pub use error::ApiError;
pub use handlers::{AppService, AppState};
pub use routes::create_router;
