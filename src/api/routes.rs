//! Route configuration for the task API.
//!
//! | Method | Path                    | Description                     |
//! |--------|-------------------------|---------------------------------|
//! | GET    | /api/todos              | List with filter/sort           |
//! | POST   | /api/todos              | Create a task                   |
//! | DELETE | /api/todos              | Bulk delete by id set           |
//! | GET    | /api/todos/{id}         | Fetch one task                  |
//! | PUT    | /api/todos/{id}         | Partial update                  |
//! | DELETE | /api/todos/{id}         | Delete one task                 |
//! | PATCH  | /api/todos/{id}/status  | Toggle completion               |
//! | GET    | /health                 | Health check                    |

use super::handlers::{
    AppState, create_todo, delete_todo, delete_todos, get_todo, list_todos, set_todo_status,
    update_todo,
};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// `GET /health`: liveness probe.
#[expect(clippy::unused_async, reason = "axum handlers must be async")]
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Creates the axum router with all API routes.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(list_todos).post(create_todo).delete(delete_todos),
        )
        .route(
            "/api/todos/{id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .route("/api/todos/{id}/status", patch(set_todo_status))
        .route("/health", get(health_check))
        .with_state(state)
}
