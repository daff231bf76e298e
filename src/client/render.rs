//! Terminal rendering of the client state.
//!
//! Purely a function of [`TodoStore`] state; collects no input and holds no
//! state of its own.

use super::store::TodoStore;
use crate::todo::domain::Task;

/// Renders the store state as a text listing.
#[must_use]
pub fn render(store: &TodoStore) -> String {
    let mut out = String::new();

    let filter = store.filter();
    let mut constraints: Vec<String> = Vec::new();
    if let Some(completed) = filter.completed {
        constraints.push(format!("completed={completed}"));
    }
    if let Some(priority) = filter.priority {
        constraints.push(format!("priority={priority}"));
    }
    if let Some(search) = &filter.search {
        constraints.push(format!("search=\"{search}\""));
    }
    let filter_summary = if constraints.is_empty() {
        "all".to_owned()
    } else {
        constraints.join(", ")
    };

    out.push_str(&format!(
        "{} task(s) | filter: {filter_summary} | sort: {}\n",
        store.tasks().len(),
        store.sort(),
    ));

    if store.loading() {
        out.push_str("loading...\n");
    }
    if let Some(error) = store.error() {
        out.push_str(&format!("error: {error}\n"));
    }

    for task in store.tasks() {
        render_task(&mut out, task, store.selected().contains(&task.id().value()));
    }

    out
}

fn render_task(out: &mut String, task: &Task, selected: bool) {
    let check = if task.completed() { 'x' } else { ' ' };
    let mark = if selected { '*' } else { ' ' };
    out.push_str(&format!(
        "{mark}[{check}] #{:<4} {:<6} {}",
        task.id(),
        task.priority(),
        task.title(),
    ));
    if !task.description().is_empty() {
        out.push_str(&format!(" ({})", task.description()));
    }
    out.push('\n');
}
