//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form surfaces. They receive the page's
//! state signals as props and mutate them only through state transitions.

pub mod code_view;
pub mod connection_badge;
pub mod line_review_list;
pub mod notice_banner;
pub mod reviewer_form;
pub mod snippet_list;
pub mod stats_panel;
