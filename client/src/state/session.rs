//! Reviewer workflow: load a snippet, collect line reviews, submit, repeat.
//!
//! SYSTEM CONTEXT
//! ==============
//! The reviewer page owns one `ReviewSession` in an `RwSignal`. Each action is
//! split into a `begin_*` transition (validation, in-flight flag, request
//! token) and a `finish_*` transition that applies the backend result. The
//! page performs the HTTP call in between and arms any returned follow-up
//! timer. Keeping the transitions free of I/O lets the whole cycle run in
//! native tests.
//!
//! RESPONSE ORDERING
//! =================
//! Results carry the token minted by their `begin_*` call. A result whose
//! token is no longer the latest for its action is discarded.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::time::Duration;

use reviews::{
    ApiError, LineReviewCollection, LineReviewField, ReviewPayload, ReviewScope, ReviewerIdentityForm, Snippet,
};

use super::notice::{Notice, NoticeUpdate};
use super::request_seq::{RequestSeq, RequestToken};
use crate::config::{NEXT_SNIPPET_DELAY, REPLACEMENT_SNIPPET_DELAY};

pub const SNIPPET_LOADED: &str = "New code loaded successfully!";
pub const NOTHING_LEFT: &str =
    "No codes available for review. You may have reviewed all available codes or all codes are completed.";
pub const INVALID_EMAIL: &str = "Please enter a valid email address.";
pub const NETWORK_ERROR: &str = "Network error. Please check your internet connection and server status.";
pub const FETCH_FAILED: &str = "Failed to fetch code. Please try again.";
pub const NO_SNIPPET: &str = "No code loaded. Please fetch a code first.";
pub const SUBMITTED: &str = "Review submitted successfully! Loading next code...";
pub const INVALID_REVIEW: &str = "Invalid review data. Please check your inputs.";
pub const SNIPPET_GONE: &str = "Code not found. It may have been completed by other reviewers.";
pub const SUBMIT_FAILED: &str = "Failed to submit review. Please try again.";

/// Permission to issue `GET /codes/random`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: RequestToken,
    /// Trimmed email for the `email` query parameter, if scoped.
    pub email: Option<String>,
    /// Banner change to apply once the request is issued.
    pub notice: NoticeUpdate,
}

/// Permission to issue `POST /reviews` with `payload`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitRequest {
    pub token: RequestToken,
    pub payload: ReviewPayload,
    pub notice: NoticeUpdate,
}

/// Delayed work the page must schedule after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    FetchNext { delay: Duration },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notice: NoticeUpdate,
    pub follow_up: Option<FollowUp>,
}

impl SubmitOutcome {
    fn stale() -> Self {
        Self { notice: NoticeUpdate::Keep, follow_up: None }
    }
}

/// State of the reviewer page.
#[derive(Clone, Debug, Default)]
pub struct ReviewSession {
    /// Snippet on screen. Replaced wholesale by every successful fetch.
    pub snippet: Option<Snippet>,
    pub lines: LineReviewCollection,
    /// Reviews accepted by the backend during this page visit.
    pub submitted_count: u32,
    /// `GET /codes/random` in flight.
    pub loading: bool,
    /// `POST /reviews` in flight.
    pub submitting: bool,
    /// The snippet on screen was already reviewed and its replacement is
    /// pending. Cleared by the next applied fetch result.
    pub awaiting_next: bool,
    fetch_seq: RequestSeq,
    submit_seq: RequestSeq,
}

impl ReviewSession {
    /// Line count of the snippet on screen, recomputed from its source.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.snippet.as_ref().map_or(0, Snippet::line_count)
    }

    /// Whether the "get new code" control should be enabled.
    #[must_use]
    pub fn can_fetch(&self, form: &ReviewerIdentityForm, scope: ReviewScope, connected: bool) -> bool {
        connected && !self.loading && (!scope.requires_email() || !form.email.trim().is_empty())
    }

    /// Whether the submit control should be enabled.
    #[must_use]
    pub fn can_submit(&self, connected: bool) -> bool {
        connected && !self.submitting && !self.awaiting_next && self.snippet.is_some() && !self.lines.is_empty()
    }

    /// Clicking a rendered source line references it in a new entry.
    pub fn click_line(&mut self, line: usize) -> bool {
        self.lines.add_for_line(line)
    }

    pub fn add_entry(&mut self) {
        self.lines.add();
    }

    pub fn update_entry(&mut self, index: usize, field: LineReviewField, value: &str) -> bool {
        self.lines.update(index, field, value)
    }

    pub fn remove_entry(&mut self, index: usize) -> bool {
        self.lines.remove(index).is_some()
    }

    /// Start a snippet fetch.
    ///
    /// # Errors
    ///
    /// Refuses with [`NoticeUpdate::Keep`] while a fetch is in flight, or with
    /// an error notice when the scope needs an email and none was entered. No
    /// request may be issued in either case.
    pub fn begin_fetch(&mut self, form: &ReviewerIdentityForm, scope: ReviewScope) -> Result<FetchRequest, NoticeUpdate> {
        if self.loading {
            return Err(NoticeUpdate::Keep);
        }
        let email = form
            .fetch_email(scope)
            .map_err(|e| NoticeUpdate::from(Notice::error(e.to_string())))?;
        self.loading = true;
        Ok(FetchRequest { token: self.fetch_seq.begin(), email, notice: NoticeUpdate::Clear })
    }

    /// Apply a snippet fetch result.
    pub fn finish_fetch(&mut self, token: RequestToken, result: Result<Snippet, ApiError>) -> NoticeUpdate {
        if !self.fetch_seq.is_current(token) {
            return NoticeUpdate::Keep;
        }
        self.loading = false;
        self.awaiting_next = false;
        match result {
            Ok(snippet) => {
                self.snippet = Some(snippet);
                self.lines.clear();
                Notice::success(SNIPPET_LOADED).into()
            }
            Err(err) => {
                self.snippet = None;
                Notice::error(fetch_error_text(&err)).into()
            }
        }
    }

    /// Validate the assembled review and start submitting it.
    ///
    /// # Errors
    ///
    /// Refuses with [`NoticeUpdate::Keep`] while a submission is in flight or
    /// the snippet on screen is already reviewed.
    /// Otherwise reports the first failing check as an error notice: missing
    /// snippet, missing required fields, malformed email, then the first bad
    /// line review.
    pub fn begin_submit(
        &mut self,
        form: &ReviewerIdentityForm,
        general_comment: &str,
        scope: ReviewScope,
    ) -> Result<SubmitRequest, NoticeUpdate> {
        if self.submitting || self.awaiting_next {
            return Err(NoticeUpdate::Keep);
        }
        let Some(snippet) = self.snippet.as_ref() else {
            return Err(Notice::error(NO_SNIPPET).into());
        };

        let mut missing = form.missing_fields(scope);
        if self.lines.is_empty() {
            missing.push("At least one line review");
        }
        if !missing.is_empty() {
            return Err(Notice::error(format!("Please fill in: {}", missing.join(", "))).into());
        }

        let identity = form.validate(scope).map_err(|e| NoticeUpdate::from(Notice::error(e.to_string())))?;
        let line_reviews = self
            .lines
            .validate(snippet.line_count())
            .map_err(|e| NoticeUpdate::from(Notice::error(e.to_string())))?;

        let payload = ReviewPayload {
            code_id: snippet.id.clone(),
            reviewer_name: identity.name().to_owned(),
            reviewer_email: identity.email().map(str::to_owned),
            years_of_experience: identity.years_of_experience(),
            position: identity.position().to_owned(),
            general_comment: general_comment.trim().to_owned(),
            line_reviews,
        };
        self.submitting = true;
        Ok(SubmitRequest { token: self.submit_seq.begin(), payload, notice: NoticeUpdate::Clear })
    }

    /// Apply a submission result and report the follow-up fetch, if any.
    pub fn finish_submit(&mut self, token: RequestToken, result: Result<(), ApiError>) -> SubmitOutcome {
        if !self.submit_seq.is_current(token) {
            return SubmitOutcome::stale();
        }
        self.submitting = false;
        match result {
            Ok(()) => {
                self.submitted_count += 1;
                self.awaiting_next = true;
                SubmitOutcome {
                    notice: Notice::success(SUBMITTED).into(),
                    follow_up: Some(FollowUp::FetchNext { delay: NEXT_SNIPPET_DELAY }),
                }
            }
            Err(err) if err.is_not_found() => {
                self.awaiting_next = true;
                SubmitOutcome {
                    notice: Notice::error(SNIPPET_GONE).into(),
                    follow_up: Some(FollowUp::FetchNext { delay: REPLACEMENT_SNIPPET_DELAY }),
                }
            }
            Err(err) => {
                let fallback = if err.is_bad_request() { INVALID_REVIEW } else { SUBMIT_FAILED };
                SubmitOutcome {
                    notice: Notice::error(err.server_message().unwrap_or(fallback)).into(),
                    follow_up: None,
                }
            }
        }
    }
}

fn fetch_error_text(err: &ApiError) -> String {
    if err.is_not_found() {
        NOTHING_LEFT.to_owned()
    } else if err.is_bad_request() {
        INVALID_EMAIL.to_owned()
    } else if err.is_network() {
        NETWORK_ERROR.to_owned()
    } else {
        err.server_message().unwrap_or(FETCH_FAILED).to_owned()
    }
}
