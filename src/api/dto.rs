//! Request DTOs for the task resource.
//!
//! Priority values arrive as raw strings and are parsed against the domain
//! enum so that a bad value yields a consistent 400 rather than a framework
//! rejection. Sort parameters instead fall back silently per the listing
//! contract.

use crate::todo::domain::{Priority, TaskChanges, TaskDomainError, TaskFilter, TaskSort};
use serde::Deserialize;

/// Query parameters accepted by the listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTodosQuery {
    /// Completion-state filter.
    pub completed: Option<bool>,
    /// Priority filter, parsed against the allow-list.
    pub priority: Option<String>,
    /// Substring search over title and description.
    pub search: Option<String>,
    /// Sort column; unrecognized values fall back to `createdAt`.
    pub sort_field: Option<String>,
    /// Sort direction; unrecognized values fall back to `desc`.
    pub sort_direction: Option<String>,
}

impl ListTodosQuery {
    /// Builds the domain filter from the query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] for a priority value
    /// outside the allow-list.
    pub fn filter(&self) -> Result<TaskFilter, TaskDomainError> {
        let priority = self
            .priority
            .as_deref()
            .map(Priority::try_from)
            .transpose()?;
        Ok(TaskFilter {
            completed: self.completed,
            priority,
            search: self.search.clone(),
        })
    }

    /// Builds the sort specification, falling back to `createdAt`/`desc`
    /// for anything unrecognized.
    #[must_use]
    pub fn sort(&self) -> TaskSort {
        TaskSort::parse_or_default(
            self.sort_field.as_deref().unwrap_or_default(),
            self.sort_direction.as_deref().unwrap_or_default(),
        )
    }
}

/// Body of `POST /api/todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoBody {
    /// Required task title.
    pub title: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Optional initial completion flag.
    pub completed: Option<bool>,
    /// Optional priority.
    pub priority: Option<String>,
}

/// Body of `PUT /api/todos/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodoBody {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement completion flag.
    pub completed: Option<bool>,
    /// Replacement priority.
    pub priority: Option<String>,
}

impl UpdateTodoBody {
    /// Converts the body into domain changes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] for a priority value
    /// outside the allow-list.
    pub fn into_changes(self) -> Result<TaskChanges, TaskDomainError> {
        let priority = self.priority.as_deref().map(Priority::try_from).transpose()?;
        Ok(TaskChanges {
            title: self.title,
            description: self.description,
            completed: self.completed,
            priority,
        })
    }
}

/// Body of `PATCH /api/todos/{id}/status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusBody {
    /// The new completion flag; rejected with 400 when absent.
    pub completed: Option<bool>,
}

/// Body of `DELETE /api/todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteManyBody {
    /// Identifiers to delete; must be present and non-empty.
    pub ids: Option<Vec<i64>>,
}
