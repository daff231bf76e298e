//! Repository port for task persistence, lookup, and deletion.

use crate::todo::domain::{Task, TaskDraft, TaskFilter, TaskId, TaskSort};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task, returning it with its engine-assigned identifier.
    async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;

    /// Persists changes to an existing task (fields and timestamps; the
    /// identifier and creation timestamp are immutable).
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns the tasks matching the filter, ordered by the sort
    /// specification.
    ///
    /// Filter predicates are conjunctive; an absent predicate places no
    /// constraint on its column.
    async fn list(&self, filter: &TaskFilter, sort: TaskSort) -> TaskRepositoryResult<Vec<Task>>;

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not
    /// exist; the table is left unchanged in that case.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;

    /// Deletes every listed task in a single all-or-nothing unit, returning
    /// the number of rows removed.
    ///
    /// Identifiers without a matching row are ignored; deleting a set where
    /// none of the ids exist succeeds with a count of zero.
    async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
