//! Board and task model for the taskboard app.
//!
//! This crate has no browser dependencies. It owns the domain types, the
//! application state that hosts mutate through [`store::Command`]s, and a
//! plain-text renderer. The web client wraps [`store::BoardStore`] in a
//! reactive signal; the terminal driver owns one directly.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | `Task`, `Board`, and the structural wire form |
//! | [`store`] | `BoardStore`, `Command`/`Event` dispatch, errors |
//! | [`render`] | Plain-text and JSON views of a store |
//! | [`consts`] | Seed data, id base, and user-facing text |

pub mod consts;
pub mod model;
pub mod render;
pub mod store;

pub use model::{Board, BoardError, BoardId, Task, TaskId};
pub use store::{BoardStore, Command, Event, StoreError};
