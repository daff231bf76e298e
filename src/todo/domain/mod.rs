//! Domain model for task management.
//!
//! The task domain models validated task creation, partial updates, status
//! toggling, and the filter/sort vocabulary used when listing tasks, while
//! keeping all infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod priority;
mod query;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use priority::Priority;
pub use query::{SortDirection, SortField, TaskFilter, TaskSort};
pub use task::{PersistedTaskData, Task, TaskChanges, TaskDraft};
