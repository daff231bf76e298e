//! Terminal client for the task-management service.
//!
//! Reads one command per line, delegates to the client state layer, and
//! reprints the rendered list after every action. The rendering itself is a
//! pure function of store state; this binary only collects input.
//!
//! Commands:
//!
//! ```text
//! add <title>            create a task
//! desc <id> <text>       replace a task's description
//! retitle <id> <title>   replace a task's title
//! done <id> / undo <id>  set or clear the completion flag
//! prio <id> <level>      set priority (low, medium, high)
//! rm <id>                delete a task
//! sel <id>               toggle selection
//! all / none             select everything / clear selection
//! rmsel                  delete the selected tasks
//! find <text>            search filter ("find" alone clears it)
//! show <done|open|all>   completion filter
//! level <p|all>          priority filter
//! sort <field> <dir>     ordering (unknown values fall back)
//! list                   refetch and print
//! quit
//! ```

#![expect(
    clippy::print_stdout,
    reason = "terminal client renders to stdout by design"
)]

use punchlist::client::{NewTodo, TodoApi, TodoPatch, TodoStore, render};
use punchlist::todo::domain::{Priority, TaskSort};
use std::io::BufRead;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3001";

#[tokio::main]
async fn main() {
    let base_url =
        std::env::var("TODO_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
    let mut store = TodoStore::new(TodoApi::new(base_url));
    store.refresh().await;
    print!("{}", render(&store));

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(raw) = line else { break };
        let input = raw.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }
        run_command(&mut store, input).await;
        print!("{}", render(&store));
    }
}

/// Parses one command line and applies it to the store.
#[expect(
    clippy::cognitive_complexity,
    reason = "single flat dispatch over the command vocabulary"
)]
async fn run_command(store: &mut TodoStore, input: &str) {
    let (command, rest) = match input.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "list" => store.refresh().await,
        "add" if !rest.is_empty() => {
            store
                .add(NewTodo {
                    title: rest.to_owned(),
                    ..NewTodo::default()
                })
                .await;
        }
        "retitle" => {
            if let Some((id, title)) = id_and_text(rest) {
                store
                    .edit(
                        id,
                        TodoPatch {
                            title: Some(title.to_owned()),
                            ..TodoPatch::default()
                        },
                    )
                    .await;
            }
        }
        "desc" => {
            if let Some((id, text)) = id_and_text(rest) {
                store
                    .edit(
                        id,
                        TodoPatch {
                            description: Some(text.to_owned()),
                            ..TodoPatch::default()
                        },
                    )
                    .await;
            }
        }
        "prio" => {
            if let Some((id, level)) = id_and_text(rest) {
                if let Ok(priority) = Priority::try_from(level) {
                    store
                        .edit(
                            id,
                            TodoPatch {
                                priority: Some(priority),
                                ..TodoPatch::default()
                            },
                        )
                        .await;
                }
            }
        }
        "done" => {
            if let Ok(id) = rest.parse() {
                store.toggle_status(id, true).await;
            }
        }
        "undo" => {
            if let Ok(id) = rest.parse() {
                store.toggle_status(id, false).await;
            }
        }
        "rm" => {
            if let Ok(id) = rest.parse() {
                store.remove(id).await;
            }
        }
        "sel" => {
            if let Ok(id) = rest.parse() {
                store.toggle_selected(id);
            }
        }
        "all" => store.select_all(),
        "none" => store.clear_selected(),
        "rmsel" => store.remove_selected().await,
        "find" => {
            let mut filter = store.filter().clone();
            filter.search = (!rest.is_empty()).then(|| rest.to_owned());
            store.set_filter(filter).await;
        }
        "show" => {
            let mut filter = store.filter().clone();
            filter.completed = match rest {
                "done" => Some(true),
                "open" => Some(false),
                _ => None,
            };
            store.set_filter(filter).await;
        }
        "level" => {
            let mut filter = store.filter().clone();
            filter.priority = Priority::try_from(rest).ok();
            store.set_filter(filter).await;
        }
        "sort" => {
            let (field, direction) = match rest.split_once(' ') {
                Some((field, direction)) => (field, direction.trim()),
                None => (rest, ""),
            };
            store
                .set_sort(TaskSort::parse_or_default(field, direction))
                .await;
        }
        _ => println!("unknown command: {input}"),
    }
}

/// Splits `"<id> <text>"`, returning `None` when the id does not parse or
/// the text is empty.
fn id_and_text(rest: &str) -> Option<(i64, &str)> {
    let (raw_id, raw_text) = rest.split_once(' ')?;
    let id = raw_id.parse().ok()?;
    let text = raw_text.trim();
    (!text.is_empty()).then_some((id, text))
}
