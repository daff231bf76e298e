//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A partial update carried no fields at all.
    #[error("a task update must change at least one field")]
    EmptyUpdate,

    /// The priority value is not one of `low`, `medium`, or `high`.
    #[error("unknown task priority: {0}")]
    InvalidPriority(String),

    /// A bulk delete was requested with no identifiers.
    #[error("bulk delete requires at least one task identifier")]
    EmptyIdSet,
}
