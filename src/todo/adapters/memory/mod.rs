//! In-memory adapter implementations for tests.

mod task;

pub use task::InMemoryTaskRepository;
