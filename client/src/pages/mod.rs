//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (HTTP calls, timers) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod review;
