//! Shared review model and client-side validation rules.
//!
//! This crate owns the wire representation exchanged with the review backend
//! and every rule that must hold before a request is sent. Both the browser
//! `client` and the `cli` depend on it so the two surfaces reject exactly the
//! same input. It performs no I/O.

pub mod collection;
pub mod error;
pub mod identity;
pub mod model;
pub mod snippet_form;

pub use collection::{CollectionError, LineReviewCollection, LineReviewEntry, LineReviewField};
pub use error::ApiError;
pub use identity::{IdentityError, ReviewScope, ReviewerIdentity, ReviewerIdentityForm};
pub use model::{
    BulkImportRequest, BulkImportResponse, LineReview, NewSnippet, ReviewCategory, ReviewPayload,
    Snippet, Stats,
};
pub use snippet_form::{BulkImportError, NewSnippetForm, SnippetFormError};
