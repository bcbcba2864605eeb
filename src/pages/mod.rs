//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The app has a single screen. The page owns the board list and page-level
//! inputs and delegates per-board rendering to `components`.

pub mod boards;
