//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page concern (`connection`, `notice`, `session`,
//! `admin`) so components depend on small focused models. State holders are
//! plain structs wrapped in `RwSignal` by the pages; their transitions do no
//! I/O.

pub mod admin;
pub mod connection;
pub mod notice;
pub mod request_seq;
pub mod session;
