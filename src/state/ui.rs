//! Local UI state: input drafts, the rename dialog, and the error banner.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the board store so the
//! store stays a pure model. Drafts survive re-renders of the board list
//! because inputs read their value from here rather than from the DOM.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::collections::HashMap;

use boards::consts::RENAME_EMPTY_ERROR;
use boards::{BoardId, BoardStore, Event, StoreError};

/// UI state for the boards page.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Text typed into the page-level new-board input.
    pub new_board_draft: String,
    /// Text typed into each board's new-task input, keyed by board id.
    pub task_drafts: HashMap<BoardId, String>,
    /// Modal rename flow.
    pub rename: RenameDialog,
    /// Last reported command error, shown as a dismissible banner.
    pub error: Option<String>,
    /// Board whose new-task input should take focus after the next render.
    pub focus_task_input: Option<BoardId>,
}

impl UiState {
    /// Take the new-board draft, leaving the input empty.
    pub fn take_board_draft(&mut self) -> String {
        std::mem::take(&mut self.new_board_draft)
    }

    /// Current new-task draft for a board.
    #[must_use]
    pub fn task_draft(&self, board_id: BoardId) -> &str {
        self.task_drafts.get(&board_id).map_or("", String::as_str)
    }

    pub fn set_task_draft(&mut self, board_id: BoardId, value: String) {
        self.task_drafts.insert(board_id, value);
    }

    /// Take a board's new-task draft, leaving the input empty.
    pub fn take_task_draft(&mut self, board_id: BoardId) -> String {
        self.task_drafts.remove(&board_id).unwrap_or_default()
    }

    /// Consume a pending focus request if it targets this board.
    pub fn take_task_focus(&mut self, board_id: BoardId) -> bool {
        if self.focus_task_input == Some(board_id) {
            self.focus_task_input = None;
            true
        } else {
            false
        }
    }

    /// Fold a command result into the UI.
    ///
    /// Empty input is ignored silently. Other errors are kept for the banner.
    /// A deleted board takes its draft and any rename in progress with it.
    /// An added task asks for its board's input to be focused again, since the
    /// re-rendered list replaces the input the user was typing in.
    pub fn record(&mut self, result: &Result<Event, StoreError>) {
        match result {
            Ok(Event::TaskAdded { board_id, .. }) => {
                self.focus_task_input = Some(*board_id);
                self.error = None;
            }
            Ok(Event::BoardDeleted { board_id }) => {
                self.task_drafts.remove(board_id);
                if self.rename.board_id == Some(*board_id) {
                    self.rename.cancel();
                }
                self.error = None;
            }
            Ok(_) => self.error = None,
            Err(StoreError::EmptyInput(_)) => {}
            Err(err) => self.error = Some(err.to_string()),
        }
    }
}

/// Non-blocking rename flow for a board title.
///
/// Opening the dialog captures which board is being renamed. Submitting an
/// empty draft keeps the dialog open with an error and leaves the title as
/// it was.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenameDialog {
    /// Board being renamed; `None` while the dialog is closed.
    pub board_id: Option<BoardId>,
    /// Title shown as the input placeholder.
    pub original: String,
    /// Text typed so far.
    pub draft: String,
    /// Validation message for the last submit, if it failed.
    pub error: Option<String>,
}

impl RenameDialog {
    pub fn open(&mut self, board_id: BoardId, current_title: &str) {
        *self = Self {
            board_id: Some(board_id),
            original: current_title.to_owned(),
            draft: String::new(),
            error: None,
        };
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.board_id.is_some()
    }

    pub fn set_draft(&mut self, value: String) {
        self.draft = value;
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    /// Apply the draft as the new title and close on success.
    ///
    /// # Errors
    ///
    /// Returns the store error when the rename is rejected. The dialog stays
    /// open with `error` set.
    pub fn submit(&mut self, store: &mut BoardStore) -> Result<(), StoreError> {
        let Some(board_id) = self.board_id else {
            return Ok(());
        };
        match store.rename_board(board_id, &self.draft) {
            Ok(()) => {
                self.cancel();
                Ok(())
            }
            Err(err) => {
                self.error = Some(match &err {
                    StoreError::EmptyInput(_) => RENAME_EMPTY_ERROR.to_owned(),
                    _ => err.to_string(),
                });
                Err(err)
            }
        }
    }
}
