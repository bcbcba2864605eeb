//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render boards and tasks from props and turn clicks and key
//! presses into store commands via `util::dispatch`.

pub mod board_panel;
pub mod rename_dialog;
pub mod task_item;
