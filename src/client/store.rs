//! In-memory client state for the task list UI.
//!
//! The store never trusts its own view of post-mutation state: every
//! mutating action is followed by an unconditional refetch of the full
//! filtered/sorted list from the server. A failed request surfaces as a
//! single static error string; there are no retries.

use super::http::{ClientError, NewTodo, TodoApi, TodoPatch};
use crate::todo::domain::{Task, TaskFilter, TaskSort};
use std::collections::BTreeSet;

const FETCH_ERROR: &str = "Failed to fetch todos. Please try again later.";
const ADD_ERROR: &str = "Failed to add todo. Please try again later.";
const UPDATE_ERROR: &str = "Failed to update todo. Please try again later.";
const DELETE_ERROR: &str = "Failed to delete todo. Please try again later.";
const STATUS_ERROR: &str = "Failed to update todo status. Please try again later.";
const BULK_DELETE_ERROR: &str = "Failed to delete selected todos. Please try again later.";

/// Client-side UI state for the task list.
#[derive(Debug)]
pub struct TodoStore {
    api: TodoApi,
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    filter: TaskFilter,
    sort: TaskSort,
    selected: BTreeSet<i64>,
}

impl TodoStore {
    /// Creates an empty store backed by the given API client, with the
    /// default sort (`createdAt`/`desc`) and no filter.
    #[must_use]
    pub fn new(api: TodoApi) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            loading: false,
            error: None,
            filter: TaskFilter::default(),
            sort: TaskSort::default(),
            selected: BTreeSet::new(),
        }
    }

    /// Returns the current task list.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns `true` while a request is in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// Returns the last error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> &TaskFilter {
        &self.filter
    }

    /// Returns the active sort.
    #[must_use]
    pub const fn sort(&self) -> TaskSort {
        self.sort
    }

    /// Returns the selected task ids.
    #[must_use]
    pub const fn selected(&self) -> &BTreeSet<i64> {
        &self.selected
    }

    /// Refetches the full list with the active filter and sort.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;
        match self.api.list(&self.filter, self.sort).await {
            Ok(tasks) => self.tasks = tasks,
            Err(err) => self.fail(FETCH_ERROR, &err),
        }
        self.loading = false;
    }

    /// Replaces the filter and refetches.
    pub async fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
        self.refresh().await;
    }

    /// Replaces the sort and refetches.
    pub async fn set_sort(&mut self, sort: TaskSort) {
        self.sort = sort;
        self.refresh().await;
    }

    /// Creates a task, then refetches.
    pub async fn add(&mut self, todo: NewTodo) {
        self.loading = true;
        self.error = None;
        match self.api.create(&todo).await {
            Ok(_) => self.refresh().await,
            Err(err) => self.fail(ADD_ERROR, &err),
        }
        self.loading = false;
    }

    /// Applies a partial update, then refetches.
    pub async fn edit(&mut self, id: i64, patch: TodoPatch) {
        self.loading = true;
        self.error = None;
        match self.api.update(id, &patch).await {
            Ok(_) => self.refresh().await,
            Err(err) => self.fail(UPDATE_ERROR, &err),
        }
        self.loading = false;
    }

    /// Deletes a task, dropping it from the selection, then refetches.
    pub async fn remove(&mut self, id: i64) {
        self.loading = true;
        self.error = None;
        match self.api.delete(id).await {
            Ok(()) => {
                self.selected.remove(&id);
                self.refresh().await;
            }
            Err(err) => self.fail(DELETE_ERROR, &err),
        }
        self.loading = false;
    }

    /// Sets a task's completion flag, then refetches.
    pub async fn toggle_status(&mut self, id: i64, completed: bool) {
        self.loading = true;
        self.error = None;
        match self.api.set_status(id, completed).await {
            Ok(_) => self.refresh().await,
            Err(err) => self.fail(STATUS_ERROR, &err),
        }
        self.loading = false;
    }

    /// Deletes every selected task in one bulk request, clearing the
    /// selection, then refetches. Does nothing when the selection is empty.
    pub async fn remove_selected(&mut self) {
        if self.selected.is_empty() {
            return;
        }
        let ids: Vec<i64> = self.selected.iter().copied().collect();

        self.loading = true;
        self.error = None;
        match self.api.delete_many(&ids).await {
            Ok(()) => {
                self.selected.clear();
                self.refresh().await;
            }
            Err(err) => self.fail(BULK_DELETE_ERROR, &err),
        }
        self.loading = false;
    }

    /// Toggles a task id in or out of the selection.
    pub fn toggle_selected(&mut self, id: i64) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Selects every task currently in the list.
    pub fn select_all(&mut self) {
        self.selected = self.tasks.iter().map(|task| task.id().value()).collect();
    }

    /// Clears the selection.
    pub fn clear_selected(&mut self) {
        self.selected.clear();
    }

    fn fail(&mut self, message: &str, err: &ClientError) {
        tracing::error!(error = %err, "{message}");
        self.error = Some(message.to_owned());
    }
}
