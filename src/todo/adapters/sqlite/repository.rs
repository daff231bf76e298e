//! SQLite repository implementation for task storage.

use super::{
    models::{NewTaskRow, TaskRow, TaskRowChanges},
    schema::todos,
};
use crate::todo::{
    domain::{
        PersistedTaskData, Priority, SortDirection, SortField, Task, TaskDraft, TaskFilter,
        TaskId, TaskSort,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use mockable::Clock;

/// SQLite connection pool type used by task adapters.
pub type TaskSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Table schema, applied idempotently on open.
const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS todos (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  title TEXT NOT NULL,
  description TEXT NOT NULL DEFAULT '',
  completed BOOLEAN NOT NULL DEFAULT 0,
  priority TEXT NOT NULL DEFAULT 'medium',
  createdAt TIMESTAMP NOT NULL,
  updatedAt TIMESTAMP NOT NULL
)";

/// Applies connection pragmas on every pooled connection.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, connection: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(
                "PRAGMA journal_mode = WAL; PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;",
            )
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// SQLite-backed task repository.
///
/// The repository owns an explicitly constructed connection pool; dropping
/// the last clone closes the connections.
#[derive(Debug, Clone)]
pub struct SqliteTaskRepository {
    pool: TaskSqlitePool,
}

impl SqliteTaskRepository {
    /// Opens (creating if necessary) the database at `database_path`,
    /// applies the schema, and seeds the example dataset when the table is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the pool cannot be
    /// built or the bootstrap statements fail.
    pub fn connect(database_path: &str, clock: &impl Clock) -> TaskRepositoryResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = Pool::builder()
            .connection_customizer(Box::new(ConnectionPragmas))
            .build(manager)
            .map_err(TaskRepositoryError::persistence)?;

        let repository = Self { pool };
        repository.bootstrap(clock)?;
        Ok(repository)
    }

    /// Creates a repository from an existing connection pool.
    ///
    /// The caller is responsible for schema bootstrap.
    #[must_use]
    pub const fn from_pool(pool: TaskSqlitePool) -> Self {
        Self { pool }
    }

    fn bootstrap(&self, clock: &impl Clock) -> TaskRepositoryResult<()> {
        let mut connection = self.pool.get().map_err(TaskRepositoryError::persistence)?;
        connection
            .batch_execute(SCHEMA_SQL)
            .map_err(TaskRepositoryError::persistence)?;

        let count: i64 = todos::table
            .count()
            .get_result(&mut connection)
            .map_err(TaskRepositoryError::persistence)?;
        if count > 0 {
            return Ok(());
        }

        let rows: Vec<NewTaskRow> = sample_tasks(clock)?.iter().map(to_new_row).collect();
        connection
            .transaction::<_, diesel::result::Error, _>(|inner| {
                diesel::insert_into(todos::table).values(&rows).execute(inner)
            })
            .map_err(TaskRepositoryError::persistence)?;
        tracing::info!(seeded = rows.len(), "seeded example tasks into empty table");
        Ok(())
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task> {
        self.run_blocking(move |connection| {
            let row: TaskRow = diesel::insert_into(todos::table)
                .values(to_new_row(&draft))
                .returning(TaskRow::as_returning())
                .get_result(connection)
                .map_err(TaskRepositoryError::persistence)?;
            row_to_task(row)
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let id = task.id();
        let changes = to_row_changes(task);
        self.run_blocking(move |connection| {
            let affected = diesel::update(todos::table.find(id.value()))
                .set(&changes)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .find(id.value())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list(&self, filter: &TaskFilter, sort: TaskSort) -> TaskRepositoryResult<Vec<Task>> {
        let criteria = filter.clone();
        self.run_blocking(move |connection| {
            let mut query = todos::table
                .select(TaskRow::as_select())
                .into_boxed::<diesel::sqlite::Sqlite>();

            if let Some(completed) = criteria.completed {
                query = query.filter(todos::completed.eq(completed));
            }
            if let Some(priority) = criteria.priority {
                query = query.filter(todos::priority.eq(priority.as_str()));
            }
            if let Some(search) = &criteria.search {
                let pattern = format!("%{search}%");
                query = query.filter(
                    todos::title
                        .like(pattern.clone())
                        .or(todos::description.like(pattern)),
                );
            }

            // Ordering is selected by validated enum, never assembled from
            // request strings.
            query = match (sort.field, sort.direction) {
                (SortField::Title, SortDirection::Asc) => query.order(todos::title.asc()),
                (SortField::Title, SortDirection::Desc) => query.order(todos::title.desc()),
                (SortField::Priority, SortDirection::Asc) => query.order(todos::priority.asc()),
                (SortField::Priority, SortDirection::Desc) => query.order(todos::priority.desc()),
                (SortField::CreatedAt, SortDirection::Asc) => query.order(todos::created_at.asc()),
                (SortField::CreatedAt, SortDirection::Desc) => {
                    query.order(todos::created_at.desc())
                }
                (SortField::UpdatedAt, SortDirection::Asc) => query.order(todos::updated_at.asc()),
                (SortField::UpdatedAt, SortDirection::Desc) => {
                    query.order(todos::updated_at.desc())
                }
            };

            let rows = query
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.find(id.value()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<usize> {
        let raw_ids: Vec<i64> = ids.iter().map(|id| id.value()).collect();
        self.run_blocking(move |connection| {
            connection
                .transaction::<_, diesel::result::Error, _>(|inner| {
                    diesel::delete(todos::table.filter(todos::id.eq_any(raw_ids))).execute(inner)
                })
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

/// The dataset inserted into an empty table on first run.
fn sample_tasks(clock: &impl Clock) -> TaskRepositoryResult<Vec<TaskDraft>> {
    let drafts = [
        (
            "Complete project proposal",
            "Write up the initial proposal for the client project",
            false,
            Priority::High,
        ),
        (
            "Buy groceries",
            "Milk, eggs, bread, and vegetables",
            true,
            Priority::Medium,
        ),
        (
            "Schedule dentist appointment",
            "Call Dr. Smith for a cleaning",
            false,
            Priority::Low,
        ),
        (
            "Finish reading book",
            "Complete the last three chapters",
            false,
            Priority::Medium,
        ),
        (
            "Update portfolio website",
            "Add recent projects and update skills section",
            false,
            Priority::High,
        ),
    ];

    drafts
        .into_iter()
        .map(|(title, description, completed, priority)| {
            Ok(TaskDraft::new(title, clock)
                .map_err(TaskRepositoryError::persistence)?
                .with_description(description)
                .with_completed(completed)
                .with_priority(priority))
        })
        .collect()
}

fn to_new_row(draft: &TaskDraft) -> NewTaskRow {
    NewTaskRow {
        title: draft.title().to_owned(),
        description: draft.description().to_owned(),
        completed: draft.completed(),
        priority: draft.priority().as_str().to_owned(),
        created_at: draft.created_at().naive_utc(),
        updated_at: draft.updated_at().naive_utc(),
    }
}

fn to_row_changes(task: &Task) -> TaskRowChanges {
    TaskRowChanges {
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        completed: task.completed(),
        priority: task.priority().as_str().to_owned(),
        updated_at: task.updated_at().naive_utc(),
    }
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(TaskRepositoryError::persistence)?;
    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::new(row.id),
        title: row.title,
        description: row.description,
        completed: row.completed,
        priority,
        created_at: row.created_at.and_utc(),
        updated_at: row.updated_at.and_utc(),
    }))
}
