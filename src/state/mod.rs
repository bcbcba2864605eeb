//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Domain data lives in `boards::BoardStore`. This module only holds what the
//! view needs on top of it: input drafts, the rename dialog, and the error
//! banner.

pub mod ui;
