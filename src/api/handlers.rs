//! HTTP handlers for the task resource.

use super::dto::{CreateTodoBody, DeleteManyBody, ListTodosQuery, StatusBody, UpdateTodoBody};
use super::error::ApiError;
use crate::config::Environment;
use crate::todo::{
    adapters::sqlite::SqliteTaskRepository,
    domain::{Priority, Task, TaskId},
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use mockable::DefaultClock;
use std::sync::Arc;

/// The concrete service wired into the HTTP layer.
pub type AppService = TaskService<SqliteTaskRepository, DefaultClock>;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    service: Arc<AppService>,
    environment: Environment,
}

impl AppState {
    /// Creates the handler state.
    #[must_use]
    pub const fn new(service: Arc<AppService>, environment: Environment) -> Self {
        Self {
            service,
            environment,
        }
    }

    fn error(&self, operation: &str, err: &TaskServiceError) -> ApiError {
        ApiError::from_service(operation, err, self.environment.exposes_error_detail())
    }
}

/// `GET /api/todos`: filtered, sorted listing.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(query): Query<ListTodosQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    let filter = query
        .filter()
        .map_err(|err| state.error("fetch todos", &err.into()))?;
    let todos = state
        .service
        .list(&filter, query.sort())
        .await
        .map_err(|err| state.error("fetch todos", &err))?;
    Ok(Json(todos))
}

/// `GET /api/todos/{id}`: single task lookup.
pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let todo = state
        .service
        .get(TaskId::new(id))
        .await
        .map_err(|err| state.error("fetch todo", &err))?;
    Ok(Json(todo))
}

/// `POST /api/todos`: create with defaulted optional fields.
pub async fn create_todo(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoBody>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Some(title) = body.title.filter(|title| !title.trim().is_empty()) else {
        return Err(ApiError::bad_request("Title is required"));
    };

    let mut request = CreateTaskRequest::new(title);
    if let Some(description) = body.description {
        request = request.with_description(description);
    }
    if let Some(completed) = body.completed {
        request = request.with_completed(completed);
    }
    if let Some(priority) = body.priority {
        let parsed = Priority::try_from(priority.as_str())
            .map_err(|err| state.error("create todo", &err.into()))?;
        request = request.with_priority(parsed);
    }

    let todo = state
        .service
        .create(request)
        .await
        .map_err(|err| state.error("create todo", &err))?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// `PUT /api/todos/{id}`: partial update; at least one field required.
pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoBody>,
) -> Result<Json<Task>, ApiError> {
    let changes = body
        .into_changes()
        .map_err(|err| state.error("update todo", &err.into()))?;
    let todo = state
        .service
        .update(TaskId::new(id), changes)
        .await
        .map_err(|err| state.error("update todo", &err))?;
    Ok(Json(todo))
}

/// `PATCH /api/todos/{id}/status`: completion flag only.
pub async fn set_todo_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<StatusBody>,
) -> Result<Json<Task>, ApiError> {
    // 404 for a missing todo takes precedence over the missing-flag 400.
    let todo_id = TaskId::new(id);
    state
        .service
        .get(todo_id)
        .await
        .map_err(|err| state.error("update todo status", &err))?;

    let Some(completed) = body.completed else {
        return Err(ApiError::bad_request("Completed status is required"));
    };

    let todo = state
        .service
        .set_status(todo_id, completed)
        .await
        .map_err(|err| state.error("update todo status", &err))?;
    Ok(Json(todo))
}

/// `DELETE /api/todos/{id}`: single delete.
pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state
        .service
        .delete(TaskId::new(id))
        .await
        .map_err(|err| state.error("delete todo", &err))?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/todos`: transactional bulk delete.
///
/// Returns 204 regardless of how many of the ids matched rows; absent ids
/// are ignored.
pub async fn delete_todos(
    State(state): State<AppState>,
    Json(body): Json<DeleteManyBody>,
) -> Result<StatusCode, ApiError> {
    let ids: Vec<TaskId> = body
        .ids
        .unwrap_or_default()
        .into_iter()
        .map(TaskId::new)
        .collect();
    state
        .service
        .delete_many(&ids)
        .await
        .map_err(|err| state.error("delete todos", &err))?;
    Ok(StatusCode::NO_CONTENT)
}
