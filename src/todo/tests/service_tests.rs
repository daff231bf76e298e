//! Service orchestration tests against the in-memory repository.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code uses indexing after length checks"
)]

use std::sync::Arc;

use super::FixedClock;
use crate::todo::{
    adapters::memory::InMemoryTaskRepository,
    domain::{
        Priority, SortDirection, SortField, Task, TaskChanges, TaskDomainError, TaskDraft,
        TaskFilter, TaskId, TaskSort,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};
use async_trait::async_trait;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_only_a_title_applies_defaults(service: TestService) {
    let task = service
        .create(CreateTaskRequest::new("Buy milk"))
        .await
        .expect("creation should succeed");

    assert_eq!(task.id(), TaskId::new(1));
    assert_eq!(task.title(), "Buy milk");
    assert_eq!(task.description(), "");
    assert!(!task.completed());
    assert_eq!(task.priority(), Priority::Medium);
    assert!(task.updated_at() >= task.created_at());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_with_blank_title_inserts_nothing(service: TestService) {
    let result = service.create(CreateTaskRequest::new("   ")).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::EmptyTitle))
    ));
    let listed = service
        .list(&TaskFilter::default(), TaskSort::default())
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_missing_task_is_not_found(service: TestService) {
    let result = service.get(TaskId::new(404)).await;
    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(
            id
        ))) if id == TaskId::new(404)
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_changes_only_supplied_fields_and_advances_updated_at() {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let creating = TaskService::new(Arc::clone(&repository), Arc::new(FixedClock::reference()));
    let updating = TaskService::new(Arc::clone(&repository), Arc::new(FixedClock::later()));

    let created = creating
        .create(
            CreateTaskRequest::new("Write report")
                .with_description("Quarterly numbers")
                .with_priority(Priority::High),
        )
        .await
        .expect("creation should succeed");

    let updated = updating
        .update(
            created.id(),
            TaskChanges {
                completed: Some(true),
                ..TaskChanges::default()
            },
        )
        .await
        .expect("update should succeed");

    assert!(updated.completed());
    assert_eq!(updated.title(), "Write report");
    assert_eq!(updated.description(), "Quarterly numbers");
    assert_eq!(updated.priority(), Priority::High);
    assert_eq!(updated.created_at(), FixedClock::reference().0);
    assert_eq!(updated.updated_at(), FixedClock::later().0);

    let fetched = updating
        .get(created.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, updated);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_with_no_fields_is_rejected(service: TestService) {
    let created = service
        .create(CreateTaskRequest::new("Unchanged"))
        .await
        .expect("creation should succeed");

    let result = service.update(created.id(), TaskChanges::default()).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::EmptyUpdate))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_task_is_not_found(service: TestService) {
    let result = service
        .update(
            TaskId::new(99),
            TaskChanges {
                title: Some("Renamed".to_owned()),
                ..TaskChanges::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn set_status_toggles_without_touching_other_fields(service: TestService) {
    let created = service
        .create(
            CreateTaskRequest::new("Stretch")
                .with_description("Five minutes")
                .with_priority(Priority::Low),
        )
        .await
        .expect("creation should succeed");

    let toggled = service
        .set_status(created.id(), true)
        .await
        .expect("status update should succeed");

    assert!(toggled.completed());
    assert_eq!(toggled.title(), "Stretch");
    assert_eq!(toggled.description(), "Five minutes");
    assert_eq!(toggled.priority(), Priority::Low);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_missing_task_leaves_table_unchanged(service: TestService) {
    let kept = service
        .create(CreateTaskRequest::new("Keep me"))
        .await
        .expect("creation should succeed");

    let result = service.delete(TaskId::new(12345)).await;
    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(_)))
    ));

    let listed = service
        .list(&TaskFilter::default(), TaskSort::default())
        .await
        .expect("listing should succeed");
    assert_eq!(listed, vec![kept]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_delete_ignores_absent_ids(service: TestService) {
    let first = service
        .create(CreateTaskRequest::new("First"))
        .await
        .expect("creation should succeed");
    let second = service
        .create(CreateTaskRequest::new("Second"))
        .await
        .expect("creation should succeed");

    let removed = service
        .delete_many(&[first.id(), second.id(), TaskId::new(999)])
        .await
        .expect("bulk delete should succeed");

    assert_eq!(removed, 2);
    let listed = service
        .list(&TaskFilter::default(), TaskSort::default())
        .await
        .expect("listing should succeed");
    assert!(listed.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn bulk_delete_requires_at_least_one_id(service: TestService) {
    let result = service.delete_many(&[]).await;
    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::EmptyIdSet))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_are_conjunctive(service: TestService) {
    service
        .create(CreateTaskRequest::new("High and open").with_priority(Priority::High))
        .await
        .expect("creation should succeed");
    service
        .create(
            CreateTaskRequest::new("High but done")
                .with_priority(Priority::High)
                .with_completed(true),
        )
        .await
        .expect("creation should succeed");
    service
        .create(CreateTaskRequest::new("Medium and open"))
        .await
        .expect("creation should succeed");

    let filter = TaskFilter {
        completed: Some(false),
        priority: Some(Priority::High),
        search: None,
    };
    let listed = service
        .list(&filter, TaskSort::default())
        .await
        .expect("listing should succeed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title(), "High and open");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_matches_title_or_description(service: TestService) {
    service
        .create(CreateTaskRequest::new("Pay rent"))
        .await
        .expect("creation should succeed");
    service
        .create(CreateTaskRequest::new("Call bank").with_description("About the rent deposit"))
        .await
        .expect("creation should succeed");
    service
        .create(CreateTaskRequest::new("Walk dog"))
        .await
        .expect("creation should succeed");

    let filter = TaskFilter {
        search: Some("rent".to_owned()),
        ..TaskFilter::default()
    };
    let listed = service
        .list(&filter, TaskSort::new(SortField::Title, SortDirection::Asc))
        .await
        .expect("listing should succeed");

    let titles: Vec<&str> = listed.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["Call bank", "Pay rent"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priority_sorts_by_stored_text_form(service: TestService) {
    for (title, priority) in [
        ("M", Priority::Medium),
        ("H", Priority::High),
        ("L", Priority::Low),
    ] {
        service
            .create(CreateTaskRequest::new(title).with_priority(priority))
            .await
            .expect("creation should succeed");
    }

    let listed = service
        .list(
            &TaskFilter::default(),
            TaskSort::new(SortField::Priority, SortDirection::Asc),
        )
        .await
        .expect("listing should succeed");

    // Text ordering, as the storage engine sorts the priority column.
    let titles: Vec<&str> = listed.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["H", "L", "M"]);
}

mockall::mock! {
    Repo {}

    #[async_trait]
    impl TaskRepository for Repo {
        async fn insert(&self, draft: TaskDraft) -> TaskRepositoryResult<Task>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list(
            &self,
            filter: &TaskFilter,
            sort: TaskSort,
        ) -> TaskRepositoryResult<Vec<Task>>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()>;
        async fn delete_many(&self, ids: &[TaskId]) -> TaskRepositoryResult<usize>;
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn persistence_failures_surface_as_repository_errors() {
    let mut repository = MockRepo::new();
    repository.expect_insert().returning(|_| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "disk full",
        )))
    });

    let service = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    let result = service.create(CreateTaskRequest::new("Doomed")).await;

    assert!(matches!(
        result,
        Err(TaskServiceError::Repository(
            TaskRepositoryError::Persistence(_)
        ))
    ));
}
