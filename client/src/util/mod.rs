//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, downloads)
//! from page and component logic to improve reuse and testability.

pub mod download;
pub mod timer;
