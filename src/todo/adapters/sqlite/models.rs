//! Diesel row models for task persistence.

use super::schema::todos;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = todos)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TaskRow {
    /// Engine-assigned identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Priority as stored text.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-mutation timestamp.
    pub updated_at: NaiveDateTime,
}

/// Insert model for task records; the identifier is engine-assigned.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = todos)]
pub struct NewTaskRow {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Priority as stored text.
    pub priority: String,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
    /// Last-mutation timestamp.
    pub updated_at: NaiveDateTime,
}

/// Changeset persisting the mutable columns of an existing task.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = todos)]
pub struct TaskRowChanges {
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Completion flag.
    pub completed: bool,
    /// Priority as stored text.
    pub priority: String,
    /// Last-mutation timestamp.
    pub updated_at: NaiveDateTime,
}
