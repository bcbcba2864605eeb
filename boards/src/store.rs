//! Application state: the ordered board collection and its id counter.
//!
//! DESIGN
//! ======
//! `BoardStore` is an owned value handed to whichever host handles user
//! actions. Hosts express intent as a [`Command`] and call
//! [`BoardStore::apply`], which mutates the model and reports what changed
//! as an [`Event`]. The view is then re-derived from the store; nothing
//! patches rendered output piecemeal.
//!
//! ERROR HANDLING
//! ==============
//! Deletions of unknown ids are no-ops and surface as [`Event::Unchanged`].
//! Every other operation on an unknown id is a reported [`StoreError`].

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tracing::{debug, info};

use crate::consts::FIRST_ID;
use crate::model::{Board, BoardError, BoardId, Task, TaskId};

/// Error returned by [`BoardStore`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("board not found: {0}")]
    BoardNotFound(BoardId),
    #[error("task {task_id} not found on board {board_id}")]
    TaskNotFound { board_id: BoardId, task_id: TaskId },
    #[error("task {task_id} already exists on board {board_id}")]
    DuplicateTask { board_id: BoardId, task_id: TaskId },
    #[error("board {0} already exists")]
    DuplicateBoard(BoardId),
    /// An id has no successor, so no further ids can be handed out.
    #[error("id {0} has no successor")]
    IdExhausted(u64),
    /// Required text input was empty. The field name is carried for messages.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),
}

impl From<BoardError> for StoreError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::TaskNotFound { board_id, task_id } => Self::TaskNotFound { board_id, task_id },
            BoardError::DuplicateTask { board_id, task_id } => Self::DuplicateTask { board_id, task_id },
            BoardError::TaskIdExhausted { task_id, .. } => Self::IdExhausted(task_id),
            BoardError::EmptyTitle => Self::EmptyInput("title"),
        }
    }
}

/// A user intent against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddBoard { title: String },
    DeleteBoard { board_id: BoardId },
    DuplicateBoard { board_id: BoardId },
    RenameBoard { board_id: BoardId, title: String },
    AddTask { board_id: BoardId, name: String },
    DeleteTask { board_id: BoardId, task_id: TaskId },
    CompleteTask { board_id: BoardId, task_id: TaskId },
}

/// What a successfully applied [`Command`] changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The command targeted something that does not exist; nothing changed.
    Unchanged,
    BoardAdded { board_id: BoardId },
    BoardDeleted { board_id: BoardId },
    BoardDuplicated { source_id: BoardId, board_id: BoardId },
    BoardRenamed { board_id: BoardId },
    TaskAdded { board_id: BoardId, task_id: TaskId },
    TaskDeleted { board_id: BoardId, task_id: TaskId },
    TaskToggled { board_id: BoardId, task_id: TaskId, completed: bool },
}

/// Ordered board collection with a monotonic board id counter.
#[derive(Debug, Clone)]
pub struct BoardStore {
    boards: Vec<Board>,
    next_board_id: BoardId,
}

impl Default for BoardStore {
    fn default() -> Self {
        Self { boards: Vec::new(), next_board_id: FIRST_ID }
    }
}

impl BoardStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the single seeded board.
    #[must_use]
    pub fn seeded() -> Self {
        let board = Board::seed();
        let next_board_id = board.id().saturating_add(1);
        Self { boards: vec![board], next_board_id }
    }

    /// Build a store from existing boards, in order. The next board id is one
    /// past the highest id present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateBoard`] when two boards share an id and
    /// [`StoreError::IdExhausted`] for a board id with no successor.
    pub fn from_boards(boards: Vec<Board>) -> Result<Self, StoreError> {
        let mut store = Self::new();
        for board in boards {
            if store.board(board.id()).is_some() {
                return Err(StoreError::DuplicateBoard(board.id()));
            }
            let after = board.id().checked_add(1).ok_or(StoreError::IdExhausted(board.id()))?;
            store.next_board_id = store.next_board_id.max(after);
            store.boards.push(board);
        }
        Ok(store)
    }

    // --- Queries ---

    /// Boards in display order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    #[must_use]
    pub fn board(&self, board_id: BoardId) -> Option<&Board> {
        self.boards.iter().find(|b| b.id() == board_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// The id the next added or duplicated board will receive.
    #[must_use]
    pub fn next_board_id(&self) -> BoardId {
        self.next_board_id
    }

    fn board_mut(&mut self, board_id: BoardId) -> Result<&mut Board, StoreError> {
        self.boards
            .iter_mut()
            .find(|b| b.id() == board_id)
            .ok_or(StoreError::BoardNotFound(board_id))
    }

    fn allocate_board_id(&mut self) -> Result<BoardId, StoreError> {
        let id = self.next_board_id;
        self.next_board_id = id.checked_add(1).ok_or(StoreError::IdExhausted(id))?;
        Ok(id)
    }

    // --- Boards ---

    /// Append an empty board and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::IdExhausted`] once the board id space is used up.
    pub fn add_board(&mut self, title: impl Into<String>) -> Result<BoardId, StoreError> {
        let id = self.allocate_board_id()?;
        self.boards.push(Board::new(id, title));
        Ok(id)
    }

    /// Remove a board. Unknown ids are a no-op.
    pub fn delete_board(&mut self, board_id: BoardId) -> Option<Board> {
        let index = self.boards.iter().position(|b| b.id() == board_id)?;
        Some(self.boards.remove(index))
    }

    /// Append a deep copy of a board and return the copy's id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BoardNotFound`] for an unknown source board and
    /// [`StoreError::IdExhausted`] once the board id space is used up.
    pub fn duplicate_board(&mut self, board_id: BoardId) -> Result<BoardId, StoreError> {
        let index = self
            .boards
            .iter()
            .position(|b| b.id() == board_id)
            .ok_or(StoreError::BoardNotFound(board_id))?;
        let new_id = self.allocate_board_id()?;
        let copy = self.boards[index].duplicate(new_id);
        self.boards.push(copy);
        Ok(new_id)
    }

    /// Replace a board's title.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BoardNotFound`] for an unknown board and
    /// [`StoreError::EmptyInput`] for an empty title.
    pub fn rename_board(&mut self, board_id: BoardId, title: &str) -> Result<(), StoreError> {
        self.board_mut(board_id)?.rename(title)?;
        Ok(())
    }

    // --- Tasks ---

    /// Append a new task to a board and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyInput`] for an empty name,
    /// [`StoreError::BoardNotFound`] for an unknown board, and
    /// [`StoreError::IdExhausted`] once the board's task ids are used up.
    pub fn add_task(&mut self, board_id: BoardId, name: &str) -> Result<TaskId, StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyInput("task name"));
        }
        Ok(self.board_mut(board_id)?.create_task(name)?)
    }

    /// Remove a task. Unknown boards or tasks are a no-op.
    pub fn delete_task(&mut self, board_id: BoardId, task_id: TaskId) -> Option<Task> {
        let board = self.boards.iter_mut().find(|b| b.id() == board_id)?;
        board.delete_task(task_id)
    }

    /// Flip a task's completion flag and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::BoardNotFound`] or [`StoreError::TaskNotFound`].
    pub fn complete_task(&mut self, board_id: BoardId, task_id: TaskId) -> Result<bool, StoreError> {
        Ok(self.board_mut(board_id)?.complete_task(task_id)?)
    }

    // --- Dispatch ---

    /// Apply one command and report what changed.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn apply(&mut self, command: Command) -> Result<Event, StoreError> {
        debug!(?command, "applying command");
        let event = match command {
            Command::AddBoard { title } => Event::BoardAdded { board_id: self.add_board(title)? },
            Command::DeleteBoard { board_id } => match self.delete_board(board_id) {
                Some(_) => Event::BoardDeleted { board_id },
                None => Event::Unchanged,
            },
            Command::DuplicateBoard { board_id } => {
                let new_id = self.duplicate_board(board_id)?;
                Event::BoardDuplicated { source_id: board_id, board_id: new_id }
            }
            Command::RenameBoard { board_id, title } => {
                self.rename_board(board_id, &title)?;
                Event::BoardRenamed { board_id }
            }
            Command::AddTask { board_id, name } => {
                let task_id = self.add_task(board_id, &name)?;
                Event::TaskAdded { board_id, task_id }
            }
            Command::DeleteTask { board_id, task_id } => match self.delete_task(board_id, task_id) {
                Some(_) => Event::TaskDeleted { board_id, task_id },
                None => Event::Unchanged,
            },
            Command::CompleteTask { board_id, task_id } => {
                let completed = self.complete_task(board_id, task_id)?;
                Event::TaskToggled { board_id, task_id, completed }
            }
        };
        if event == Event::Unchanged {
            debug!("command targeted a missing item; store unchanged");
        } else {
            info!(?event, boards = self.boards.len(), "store updated");
        }
        Ok(event)
    }
}
