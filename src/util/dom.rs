//! DOM naming and keyboard helpers.
//!
//! Element ids and key names used by more than one component live here so
//! the label/checkbox pairing and the submit/cancel keys stay consistent.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

use boards::{BoardId, TaskId};

/// Id of a task's checkbox. Unique across the page because task ids are
/// only unique within a board.
#[must_use]
pub fn checkbox_id(board_id: BoardId, task_id: TaskId) -> String {
    format!("checkbox-{board_id}-{task_id}")
}

/// Whether a `KeyboardEvent.key` value submits an input.
#[must_use]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

/// Whether a `KeyboardEvent.key` value dismisses a dialog.
#[must_use]
pub fn is_cancel_key(key: &str) -> bool {
    key == "Escape"
}
