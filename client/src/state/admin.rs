//! Admin dashboard state: snippet entry, bulk import, inventory and stats.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares nothing with the reviewer workflow. Like `session`, each action is a
//! `begin_*`/`finish_*` pair around the HTTP call made by the page, with one
//! in-flight flag and one request sequence per action.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use reviews::snippet_form::parse_bulk_import;
use reviews::{ApiError, BulkImportRequest, BulkImportResponse, NewSnippet, NewSnippetForm, Snippet, Stats};

use super::notice::{Notice, NoticeUpdate};
use super::request_seq::{RequestSeq, RequestToken};

pub const SNIPPET_ADDED: &str = "Code added successfully!";
pub const ADD_FAILED: &str = "Failed to add code. Please try again.";
pub const BULK_ADD_FAILED: &str = "Failed to add codes. Please try again.";
pub const LIST_FAILED: &str = "Failed to fetch codes. Please try again.";
pub const EXPORT_STARTED: &str = "Preparing CSV export...";
pub const EXPORT_DONE: &str = "Reviews exported successfully!";
pub const EXPORT_FAILED: &str = "Failed to export reviews. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Single,
    Bulk,
    Manage,
}

/// Data the page must reload after a successful insert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Refresh {
    pub stats: bool,
    pub snippets: bool,
}

/// Permission to send an insert request carrying `body`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertRequest<T> {
    pub token: RequestToken,
    pub body: T,
    /// Banner change to apply once the request is issued.
    pub notice: NoticeUpdate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertOutcome {
    pub notice: NoticeUpdate,
    pub refresh: Refresh,
}

#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub tab: AdminTab,
    pub form: NewSnippetForm,
    pub bulk_text: String,
    pub snippets: Vec<Snippet>,
    pub stats: Stats,
    /// Snippet whose source is expanded in the manage list.
    pub expanded: Option<String>,
    pub submitting: bool,
    pub fetching_stats: bool,
    pub fetching_snippets: bool,
    pub exporting: bool,
    insert_seq: RequestSeq,
    stats_seq: RequestSeq,
    list_seq: RequestSeq,
    export_seq: RequestSeq,
}

impl AdminState {
    /// Switch tabs. Returns `true` when the snippet list should be loaded.
    pub fn select_tab(&mut self, tab: AdminTab, connected: bool) -> bool {
        self.tab = tab;
        tab == AdminTab::Manage && connected
    }

    /// Show one snippet's source, or hide it when already shown.
    pub fn toggle_details(&mut self, id: &str) {
        if self.expanded.as_deref() == Some(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_owned());
        }
    }

    pub fn fill_sample_bulk(&mut self) {
        self.bulk_text = reviews::snippet_form::sample_bulk_json();
    }

    fn refresh_after_insert(&self) -> Refresh {
        Refresh { stats: true, snippets: self.tab == AdminTab::Manage }
    }

    fn start_insert<T>(&mut self, body: T) -> InsertRequest<T> {
        self.submitting = true;
        InsertRequest { token: self.insert_seq.begin(), body, notice: NoticeUpdate::Clear }
    }

    /// Validate the single-snippet form and start inserting it.
    ///
    /// # Errors
    ///
    /// Refuses with [`NoticeUpdate::Keep`] while another insert is in flight,
    /// or with the form's validation message.
    pub fn begin_create(&mut self) -> Result<InsertRequest<NewSnippet>, NoticeUpdate> {
        if self.submitting {
            return Err(NoticeUpdate::Keep);
        }
        let snippet = self
            .form
            .validate()
            .map_err(|e| NoticeUpdate::from(Notice::error(e.to_string())))?;
        Ok(self.start_insert(snippet))
    }

    pub fn finish_create(&mut self, token: RequestToken, result: Result<(), ApiError>) -> InsertOutcome {
        if !self.insert_seq.is_current(token) {
            return InsertOutcome { notice: NoticeUpdate::Keep, refresh: Refresh::default() };
        }
        self.submitting = false;
        match result {
            Ok(()) => {
                self.form = NewSnippetForm::default();
                InsertOutcome {
                    notice: Notice::success(SNIPPET_ADDED).into(),
                    refresh: self.refresh_after_insert(),
                }
            }
            Err(err) => InsertOutcome {
                notice: Notice::error(err.server_message().unwrap_or(ADD_FAILED)).into(),
                refresh: Refresh::default(),
            },
        }
    }

    /// Parse the bulk text and start importing it.
    ///
    /// # Errors
    ///
    /// Refuses with [`NoticeUpdate::Keep`] while another insert is in flight.
    /// Blank, malformed and non-array input is reported before any request.
    pub fn begin_bulk_import(&mut self) -> Result<InsertRequest<BulkImportRequest>, NoticeUpdate> {
        if self.submitting {
            return Err(NoticeUpdate::Keep);
        }
        let codes = parse_bulk_import(&self.bulk_text).map_err(|e| NoticeUpdate::from(Notice::error(e.to_string())))?;
        Ok(self.start_insert(BulkImportRequest { codes }))
    }

    pub fn finish_bulk_import(
        &mut self,
        token: RequestToken,
        result: Result<BulkImportResponse, ApiError>,
    ) -> InsertOutcome {
        if !self.insert_seq.is_current(token) {
            return InsertOutcome { notice: NoticeUpdate::Keep, refresh: Refresh::default() };
        }
        self.submitting = false;
        match result {
            Ok(response) => {
                self.bulk_text.clear();
                InsertOutcome {
                    notice: Notice::success(format!("{} codes added successfully!", response.added_count)).into(),
                    refresh: self.refresh_after_insert(),
                }
            }
            Err(err) => InsertOutcome {
                notice: Notice::error(err.server_message().unwrap_or(BULK_ADD_FAILED)).into(),
                refresh: Refresh::default(),
            },
        }
    }

    /// Start a stats refresh. `None` while one is already in flight.
    pub fn begin_stats(&mut self) -> Option<RequestToken> {
        if self.fetching_stats {
            return None;
        }
        self.fetching_stats = true;
        Some(self.stats_seq.begin())
    }

    /// Apply a stats result. Failures leave the previous counters in place
    /// and raise no banner; the error is returned for logging.
    pub fn finish_stats(&mut self, token: RequestToken, result: Result<Stats, ApiError>) -> Option<ApiError> {
        if !self.stats_seq.is_current(token) {
            return None;
        }
        self.fetching_stats = false;
        match result {
            Ok(stats) => {
                self.stats = stats;
                None
            }
            Err(err) => Some(err),
        }
    }

    /// Start a snippet list refresh. `None` while one is already in flight.
    pub fn begin_list(&mut self) -> Option<RequestToken> {
        if self.fetching_snippets {
            return None;
        }
        self.fetching_snippets = true;
        Some(self.list_seq.begin())
    }

    pub fn finish_list(&mut self, token: RequestToken, result: Result<Vec<Snippet>, ApiError>) -> NoticeUpdate {
        if !self.list_seq.is_current(token) {
            return NoticeUpdate::Keep;
        }
        self.fetching_snippets = false;
        match result {
            Ok(snippets) => {
                self.snippets = snippets;
                NoticeUpdate::Keep
            }
            Err(_) => Notice::error(LIST_FAILED).into(),
        }
    }

    /// Start a CSV export, announcing it in the banner.
    ///
    /// # Errors
    ///
    /// Refuses with [`NoticeUpdate::Keep`] while an export is in flight.
    pub fn begin_export(&mut self) -> Result<(RequestToken, NoticeUpdate), NoticeUpdate> {
        if self.exporting {
            return Err(NoticeUpdate::Keep);
        }
        self.exporting = true;
        Ok((self.export_seq.begin(), Notice::info(EXPORT_STARTED).into()))
    }

    pub fn finish_export(&mut self, token: RequestToken, result: Result<(), ApiError>) -> NoticeUpdate {
        if !self.export_seq.is_current(token) {
            return NoticeUpdate::Keep;
        }
        self.exporting = false;
        match result {
            Ok(()) => Notice::success(EXPORT_DONE).into(),
            Err(_) => Notice::error(EXPORT_FAILED).into(),
        }
    }
}

/// Completion badge text for a snippet in the manage list.
#[must_use]
pub fn completion_label(snippet: &Snippet) -> &'static str {
    if snippet.is_completed { "Completed" } else { "Pending" }
}

/// `reviews/max` progress text.
#[must_use]
pub fn progress_label(snippet: &Snippet) -> String {
    format!("Reviews: {}/{}", snippet.review_count, snippet.max_reviews)
}
