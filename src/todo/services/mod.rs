//! Orchestration services for task management.

mod tasks;

pub use tasks::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
