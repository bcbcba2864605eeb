//! Utility helpers shared across client UI modules.

pub mod dispatch;
pub mod dom;
