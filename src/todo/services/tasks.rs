//! Service layer for task creation, updates, and retrieval.

use crate::todo::{
    domain::{Priority, Task, TaskChanges, TaskDomainError, TaskDraft, TaskFilter, TaskId, TaskSort},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task.
///
/// Only the title is required; the remaining fields default per the data
/// model (empty description, not completed, medium priority).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    completed: Option<bool>,
    priority: Option<Priority>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            completed: None,
            priority: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the completion flag.
    #[must_use]
    pub const fn with_completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// Service-level errors for task operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task orchestration service.
#[derive(Clone)]
pub struct TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the tasks matching the filter, in the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the listing query
    /// fails.
    pub async fn list(&self, filter: &TaskFilter, sort: TaskSort) -> TaskServiceResult<Vec<Task>> {
        Ok(self.repository.list(filter, sort).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] (wrapped) when the task
    /// does not exist.
    pub async fn get(&self, id: TaskId) -> TaskServiceResult<Task> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| TaskRepositoryError::NotFound(id).into())
    }

    /// Creates a new task with defaulted optional fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] (wrapped) when the title is
    /// blank, or a repository error when persistence fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskServiceResult<Task> {
        let mut draft = TaskDraft::new(request.title, &*self.clock)?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(completed) = request.completed {
            draft = draft.with_completed(completed);
        }
        if let Some(priority) = request.priority {
            draft = draft.with_priority(priority);
        }

        Ok(self.repository.insert(draft).await?)
    }

    /// Applies a partial update to an existing task, returning the updated
    /// task.
    ///
    /// Only supplied fields change; the update timestamp always refreshes.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the task does not exist, or a domain
    /// error when the update is empty or carries a blank title.
    pub async fn update(&self, id: TaskId, changes: TaskChanges) -> TaskServiceResult<Task> {
        let mut task = self.get(id).await?;
        task.apply(changes, &*self.clock)?;
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Sets the completion flag only, returning the updated task.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the task does not exist.
    pub async fn set_status(&self, id: TaskId, completed: bool) -> TaskServiceResult<Task> {
        let mut task = self.get(id).await?;
        task.set_completed(completed, &*self.clock);
        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Deletes a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when the task does not exist; the table is
    /// left unchanged in that case.
    pub async fn delete(&self, id: TaskId) -> TaskServiceResult<()> {
        Ok(self.repository.delete(id).await?)
    }

    /// Deletes a set of tasks in one atomic unit, returning the number of
    /// rows removed.
    ///
    /// Identifiers without a matching row are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyIdSet`] (wrapped) when `ids` is
    /// empty, or a repository error when the transaction fails.
    pub async fn delete_many(&self, ids: &[TaskId]) -> TaskServiceResult<usize> {
        if ids.is_empty() {
            return Err(TaskDomainError::EmptyIdSet.into());
        }
        Ok(self.repository.delete_many(ids).await?)
    }
}
