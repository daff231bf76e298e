//! HTTP client for the task REST surface.

use crate::todo::domain::{Priority, Task, TaskFilter, TaskSort};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by [`TodoApi`] calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response body not read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Server-provided error message, when one was parseable.
        message: String,
    },
}

/// Payload for creating a task; absent fields use server defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTodo {
    /// Required title.
    pub title: String,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional initial completion flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Optional priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Payload for a partial update; absent fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TodoPatch {
    /// Replacement title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Replacement description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement completion flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    /// Replacement priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    completed: bool,
}

#[derive(Debug, Serialize)]
struct DeleteManyBody<'a> {
    ids: &'a [i64],
}

/// Typed client for the task REST API.
#[derive(Debug, Clone)]
pub struct TodoApi {
    base_url: String,
    http: reqwest::Client,
}

impl TodoApi {
    /// Creates a client for the server at `base_url`
    /// (e.g. `http://127.0.0.1:3001`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base = base_url.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            base_url: base,
            http: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/todos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/api/todos/{id}", self.base_url)
    }

    /// Fetches the filtered, sorted task list.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn list(&self, filter: &TaskFilter, sort: TaskSort) -> Result<Vec<Task>, ClientError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(completed) = filter.completed {
            params.push(("completed", completed.to_string()));
        }
        if let Some(priority) = filter.priority {
            params.push(("priority", priority.as_str().to_owned()));
        }
        if let Some(search) = &filter.search {
            params.push(("search", search.clone()));
        }
        params.push(("sortField", sort.field.as_str().to_owned()));
        params.push(("sortDirection", sort.direction.as_str().to_owned()));

        let response = self
            .http
            .get(self.collection_url())
            .query(&params)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Fetches a single task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::UnexpectedStatus`] with status 404 when the
    /// task does not exist.
    pub async fn get(&self, id: i64) -> Result<Task, ClientError> {
        let response = self.http.get(self.item_url(id)).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Creates a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn create(&self, todo: &NewTodo) -> Result<Task, ClientError> {
        let response = self
            .http
            .post(self.collection_url())
            .json(todo)
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn update(&self, id: i64, patch: &TodoPatch) -> Result<Task, ClientError> {
        let response = self.http.put(self.item_url(id)).json(patch).send().await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Sets the completion flag only.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn set_status(&self, id: i64, completed: bool) -> Result<Task, ClientError> {
        let response = self
            .http
            .patch(format!("{}/status", self.item_url(id)))
            .json(&StatusBody { completed })
            .send()
            .await?;
        Ok(checked(response).await?.json().await?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        checked(response).await?;
        Ok(())
    }

    /// Deletes a set of tasks in one request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure or a non-success status.
    pub async fn delete_many(&self, ids: &[i64]) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(self.collection_url())
            .json(&DeleteManyBody { ids })
            .send()
            .await?;
        checked(response).await?;
        Ok(())
    }
}

/// Converts non-success responses into [`ClientError::UnexpectedStatus`],
/// salvaging the server's error message when the body carries one.
async fn checked(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body: ErrorBody = response.json().await.unwrap_or_default();
    Err(ClientError::UnexpectedStatus {
        status: status.as_u16(),
        message: body.error.unwrap_or_else(|| "no error body".to_owned()),
    })
}
