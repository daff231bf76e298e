//! In-memory repository for task service tests.
//!
//! Mirrors the SQLite adapter's observable contract, including its
//! filter/sort semantics: priority sorts by its stored text form and the
//! search predicate is ASCII-case-insensitive, as SQLite `LIKE` is.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::todo::{
    domain::{
        PersistedTaskData, SortDirection, SortField, Task, TaskDraft, TaskFilter, TaskId,
        TaskSort,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    next_id: i64,
}

impl Default for InMemoryTaskState {
    fn default() -> Self {
        Self {
            tasks: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(task: &Task, filter: &TaskFilter) -> bool {
    if let Some(completed) = filter.completed {
        if task.completed() != completed {
            return false;
        }
    }
    if let Some(priority) = filter.priority {
        if task.priority() != priority {
            return false;
        }
    }
    if let Some(search) = &filter.search {
        let needle = search.to_ascii_lowercase();
        let in_title = task.title().to_ascii_lowercase().contains(&needle);
        let in_description = task.description().to_ascii_lowercase().contains(&needle);
        if !in_title && !in_description {
            return false;
        }
    }
    true
}

fn compare(a: &Task, b: &Task, sort: TaskSort) -> Ordering {
    let ordering = match sort.field {
        SortField::Title => a.title().cmp(b.title()),
        SortField::Priority => a.priority().as_str().cmp(b.priority().as_str()),
        SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        SortField::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
    };
    match sort.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn lock_error(message: impl ToString) -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other(message.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id = TaskId::new(state.next_id);
        state.next_id += 1;

        let task = Task::from_persisted(PersistedTaskData {
            id,
            title: draft.title().to_owned(),
            description: draft.description().to_owned(),
            completed: draft.completed(),
            priority: draft.priority(),
            created_at: draft.created_at(),
            updated_at: draft.updated_at(),
        });
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::NotFound(task.id()));
        }
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn list(&self, filter: &TaskFilter, sort: TaskSort) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut tasks: Vec<Task> = state
            .tasks
            .values()
            .filter(|task| matches_filter(task, filter))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| compare(a, b, sort));
        Ok(tasks)
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.tasks.remove(&id).is_none() {
            return Err(TaskRepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<usize> {
        let mut state = self.state.write().map_err(lock_error)?;
        let mut removed = 0;
        for id in ids {
            if state.tasks.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
