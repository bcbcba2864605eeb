//! # taskboard
//!
//! Leptos + WASM front end for the board/task list manager.
//!
//! The domain model lives in the `boards` crate. This crate holds the view:
//! the root [`app::App`] component, the boards page, per-board and per-task
//! components, and UI-only state (input drafts, the rename dialog, the error
//! banner). Every user action becomes a [`boards::Command`] applied to the
//! store signal; the view re-renders from the signal.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
