//! Networking modules for the review backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues JSON-over-HTTP calls through `gloo-net`. Wire types and the
//! error taxonomy come from the shared `reviews` crate.

pub mod api;
