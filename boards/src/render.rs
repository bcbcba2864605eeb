//! Text rendering: a plain-text view of the whole store.
//!
//! The output is derived purely from the store. Hosts without a DOM (the
//! terminal driver, tests) redraw by calling [`to_text`] after every command.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::model::{Board, Task};
use crate::store::BoardStore;

/// Marker drawn for a task's completion flag.
#[must_use]
pub fn checkbox(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

/// Render one task as `[x]  id  name`.
#[must_use]
pub fn task_to_text(task: &Task) -> String {
    format!("    {} {:>3}  {}", checkbox(task), task.id, task.name)
}

/// Render one board: a `#id title` header followed by one line per task.
#[must_use]
pub fn board_to_text(board: &Board) -> String {
    let mut lines = vec![format!("#{} {}", board.id(), board.title())];
    if board.tasks().is_empty() {
        lines.push("    (no tasks)".to_owned());
    }
    lines.extend(board.tasks().iter().map(task_to_text));
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render every board in display order, separated by blank lines.
#[must_use]
pub fn to_text(store: &BoardStore) -> String {
    if store.is_empty() {
        return "(no boards)\n".to_owned();
    }
    store.boards().iter().map(board_to_text).collect::<Vec<_>>().join("\n")
}

/// Serialize every board's structural form as a pretty JSON array.
///
/// # Errors
///
/// Propagates `serde_json` serialization failures.
pub fn to_json(store: &BoardStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(store.boards())
}
