//! Domain-level tests for task construction and mutation.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use super::FixedClock;
use crate::todo::domain::{
    PersistedTaskData, Priority, Task, TaskChanges, TaskDomainError, TaskDraft, TaskId,
};
use rstest::rstest;

fn persisted_task(clock: &FixedClock) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(7),
        title: "Water the plants".to_owned(),
        description: "Only the ones on the balcony".to_owned(),
        completed: false,
        priority: Priority::Low,
        created_at: clock.0,
        updated_at: clock.0,
    })
}

#[test]
fn draft_defaults_optional_fields() {
    let clock = FixedClock::reference();
    let draft = TaskDraft::new("Buy milk", &clock).expect("title is non-empty");

    assert_eq!(draft.title(), "Buy milk");
    assert_eq!(draft.description(), "");
    assert!(!draft.completed());
    assert_eq!(draft.priority(), Priority::Medium);
    assert_eq!(draft.created_at(), clock.0);
    assert_eq!(draft.updated_at(), clock.0);
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn draft_rejects_blank_titles(#[case] title: &str) {
    let clock = FixedClock::reference();
    assert_eq!(
        TaskDraft::new(title, &clock),
        Err(TaskDomainError::EmptyTitle)
    );
}

#[test]
fn draft_builders_override_defaults() {
    let clock = FixedClock::reference();
    let draft = TaskDraft::new("Ship release", &clock)
        .expect("title is non-empty")
        .with_description("Tag and push")
        .with_completed(true)
        .with_priority(Priority::High);

    assert_eq!(draft.description(), "Tag and push");
    assert!(draft.completed());
    assert_eq!(draft.priority(), Priority::High);
}

#[test]
fn apply_changes_only_supplied_fields_and_touches() {
    let created = FixedClock::reference();
    let mut task = persisted_task(&created);

    let later = FixedClock::later();
    task.apply(
        TaskChanges {
            completed: Some(true),
            ..TaskChanges::default()
        },
        &later,
    )
    .expect("update carries a field");

    assert!(task.completed());
    assert_eq!(task.title(), "Water the plants");
    assert_eq!(task.description(), "Only the ones on the balcony");
    assert_eq!(task.priority(), Priority::Low);
    assert_eq!(task.created_at(), created.0);
    assert_eq!(task.updated_at(), later.0);
    assert!(task.updated_at() >= task.created_at());
}

#[test]
fn apply_rejects_empty_changes() {
    let clock = FixedClock::reference();
    let mut task = persisted_task(&clock);

    let result = task.apply(TaskChanges::default(), &FixedClock::later());

    assert_eq!(result, Err(TaskDomainError::EmptyUpdate));
    assert_eq!(task.updated_at(), clock.0);
}

#[test]
fn apply_rejects_blank_replacement_title() {
    let clock = FixedClock::reference();
    let mut task = persisted_task(&clock);

    let result = task.apply(
        TaskChanges {
            title: Some("  ".to_owned()),
            ..TaskChanges::default()
        },
        &FixedClock::later(),
    );

    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
    assert_eq!(task.title(), "Water the plants");
}

#[test]
fn set_completed_touches_and_preserves_fields() {
    let created = FixedClock::reference();
    let mut task = persisted_task(&created);

    task.set_completed(true, &FixedClock::later());

    assert!(task.completed());
    assert_eq!(task.title(), "Water the plants");
    assert_eq!(task.updated_at(), FixedClock::later().0);
}

#[test]
fn task_serializes_with_camel_case_timestamps() {
    let clock = FixedClock::reference();
    let task = persisted_task(&clock);

    let json = serde_json::to_value(&task).expect("task serializes");

    assert_eq!(json["id"], 7);
    assert_eq!(json["priority"], "low");
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
    assert!(json.get("created_at").is_none());
}
