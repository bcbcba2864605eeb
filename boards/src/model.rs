//! Domain model: tasks, boards, and their structural (wire) form.
//!
//! A [`Board`] owns an ordered list of [`Task`]s and the counter that hands
//! out task ids. The counter is local state and never travels on the wire:
//! the structural form is exactly `{id, title, tasks: [{id, name, completed}]}`
//! and the counter is recomputed from the task list whenever a board is built
//! from that form.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::consts::{COPY_SUFFIX, FIRST_ID, SEED_BOARD_TITLE, SEED_TASKS};

/// Identifier of a task, unique within its board.
pub type TaskId = u64;

/// Identifier of a board, unique within a store.
pub type BoardId = u64;

/// Error returned by fallible [`Board`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// No task with this id exists on the board.
    #[error("task {task_id} not found on board {board_id}")]
    TaskNotFound { board_id: BoardId, task_id: TaskId },
    /// A task with this id is already on the board.
    #[error("task {task_id} already exists on board {board_id}")]
    DuplicateTask { board_id: BoardId, task_id: TaskId },
    /// The task id leaves no room for a successor id.
    #[error("task id {task_id} on board {board_id} has no successor")]
    TaskIdExhausted { board_id: BoardId, task_id: TaskId },
    /// A rename was attempted with an empty title.
    #[error("board title must not be empty")]
    EmptyTitle,
}

/// A named item with a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    pub completed: bool,
}

impl Task {
    #[must_use]
    pub fn new(id: TaskId, name: impl Into<String>, completed: bool) -> Self {
        Self { id, name: name.into(), completed }
    }

    /// Flip the completion flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// A titled, ordered list of tasks.
///
/// Equality compares id, title, and tasks. The task id counter is ignored so
/// that a board equals its own round trip through the structural form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BoardRecord", into = "BoardRecord")]
pub struct Board {
    id: BoardId,
    title: String,
    tasks: Vec<Task>,
    next_task_id: TaskId,
}

/// Structural form of a board as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardRecord {
    id: BoardId,
    title: String,
    tasks: Vec<Task>,
}

impl TryFrom<BoardRecord> for Board {
    type Error = BoardError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        Self::with_tasks(record.id, record.title, record.tasks)
    }
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        Self { id: board.id, title: board.title, tasks: board.tasks }
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title && self.tasks == other.tasks
    }
}

impl Eq for Board {}

impl Board {
    /// An empty board whose first task will get [`FIRST_ID`].
    #[must_use]
    pub fn new(id: BoardId, title: impl Into<String>) -> Self {
        Self { id, title: title.into(), tasks: Vec::new(), next_task_id: FIRST_ID }
    }

    /// Build a board from existing tasks, in order. The next task id is one
    /// past the highest id present.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateTask`] when two tasks share an id and
    /// [`BoardError::TaskIdExhausted`] for an id with no successor.
    pub fn with_tasks(id: BoardId, title: impl Into<String>, tasks: Vec<Task>) -> Result<Self, BoardError> {
        let mut board = Self::new(id, title);
        for task in tasks {
            board.add_task(task)?;
        }
        Ok(board)
    }

    /// The board every fresh session starts with.
    pub(crate) fn seed() -> Self {
        let mut ids = FIRST_ID..;
        let tasks = SEED_TASKS
            .into_iter()
            .zip(&mut ids)
            .map(|((name, completed), id)| Task::new(id, name, completed))
            .collect();
        Self { id: FIRST_ID, title: SEED_BOARD_TITLE.to_owned(), tasks, next_task_id: ids.start }
    }

    #[must_use]
    pub fn id(&self) -> BoardId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The id the next created task will receive.
    #[must_use]
    pub fn next_task_id(&self) -> TaskId {
        self.next_task_id
    }

    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Append an already-built task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::DuplicateTask`] if the id is already taken and
    /// [`BoardError::TaskIdExhausted`] if no id could follow it.
    pub fn add_task(&mut self, task: Task) -> Result<(), BoardError> {
        if self.task(task.id).is_some() {
            return Err(BoardError::DuplicateTask { board_id: self.id, task_id: task.id });
        }
        let after = self.successor(task.id)?;
        self.next_task_id = self.next_task_id.max(after);
        self.tasks.push(task);
        Ok(())
    }

    /// Append a new, incomplete task with the next free id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskIdExhausted`] once the id space is used up.
    pub fn create_task(&mut self, name: impl Into<String>) -> Result<TaskId, BoardError> {
        let id = self.next_task_id;
        self.next_task_id = self.successor(id)?;
        self.tasks.push(Task::new(id, name, false));
        Ok(id)
    }

    fn successor(&self, task_id: TaskId) -> Result<TaskId, BoardError> {
        task_id
            .checked_add(1)
            .ok_or(BoardError::TaskIdExhausted { board_id: self.id, task_id })
    }

    /// Remove the task with this id. Absent ids are a no-op.
    pub fn delete_task(&mut self, task_id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.id == task_id)?;
        Some(self.tasks.remove(index))
    }

    /// Flip the completion flag of a task and return the new value.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TaskNotFound`] if no task has this id.
    pub fn complete_task(&mut self, task_id: TaskId) -> Result<bool, BoardError> {
        let board_id = self.id;
        self.tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .map(Task::toggle)
            .ok_or(BoardError::TaskNotFound { board_id, task_id })
    }

    /// Replace the title.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyTitle`] for an empty title; the current
    /// title is kept.
    pub fn rename(&mut self, title: &str) -> Result<(), BoardError> {
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        self.title = title.to_owned();
        Ok(())
    }

    /// Deep copy through the structural form, under a new id and with
    /// [`COPY_SUFFIX`] appended to the title. The copy keeps the task id
    /// counter of its source.
    #[must_use]
    pub fn duplicate(&self, new_id: BoardId) -> Self {
        let BoardRecord { mut title, tasks, .. } = BoardRecord::from(self.clone());
        title.push_str(COPY_SUFFIX);
        Self { id: new_id, title, tasks, next_task_id: self.next_task_id }
    }

    /// Serialize to the structural form as a JSON value.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Rebuild a board from its structural form.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if the value does not match
    /// `{id, title, tasks: [{id, name, completed}]}`, repeats a task id, or
    /// carries a task id with no successor.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Serialize to a JSON string.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a board from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error for malformed input and for the invalid
    /// task lists rejected by [`Board::from_value`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
