//! Shared server bootstrap for HTTP-level integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use punchlist::api::{AppState, create_router};
use punchlist::config::Environment;
use punchlist::todo::adapters::sqlite::SqliteTaskRepository;
use punchlist::todo::services::TaskService;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// A running API instance backed by a throwaway seeded database.
///
/// The temporary directory holding the database file lives as long as the
/// server handle; dropping the handle removes it.
pub struct TestServer {
    base_url: String,
    _database_dir: TempDir,
}

impl TestServer {
    /// Returns the base URL of the running server.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Boots the full router on an ephemeral port with a fresh database.
///
/// The database is freshly bootstrapped, so the five sample tasks are
/// present when the server comes up.
pub async fn spawn_server() -> TestServer {
    let database_dir = tempfile::tempdir().expect("failed to create temp dir");
    let database_path = database_dir.path().join("todos.db");
    let clock = DefaultClock;
    let repository = SqliteTaskRepository::connect(
        database_path.to_str().expect("temp path is valid UTF-8"),
        &clock,
    )
    .expect("failed to open database");

    let service = Arc::new(TaskService::new(Arc::new(repository), Arc::new(clock)));
    let router = create_router(AppState::new(service, Environment::Development));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind listener");
    let address = listener.local_addr().expect("listener has an address");
    drop(tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("server task failed");
    }));

    TestServer {
        base_url: format!("http://{address}"),
        _database_dir: database_dir,
    }
}
