use super::*;

fn snippet(id: &str, completed: bool) -> Snippet {
    Snippet {
        id: id.to_owned(),
        title: "t".to_owned(),
        language: "Go".to_owned(),
        code: "package main".to_owned(),
        review_count: if completed { 3 } else { 1 },
        max_reviews: 3,
        is_completed: completed,
    }
}

fn filled_form() -> NewSnippetForm {
    NewSnippetForm {
        title: "Hello".to_owned(),
        code: "fn main() {}".to_owned(),
        language: "Rust".to_owned(),
        max_reviews: "3".to_owned(),
    }
}

fn shown_text(update: &NoticeUpdate) -> &str {
    match update {
        NoticeUpdate::Show(notice) => notice.text.as_str(),
        other => panic!("expected a notice, got {other:?}"),
    }
}

// =============================================================
// Tabs and details
// =============================================================

#[test]
fn admin_state_defaults() {
    let state = AdminState::default();
    assert_eq!(state.tab, AdminTab::Single);
    assert_eq!(state.stats, Stats::default());
    assert!(state.snippets.is_empty());
}

#[test]
fn manage_tab_loads_list_only_when_connected() {
    let mut state = AdminState::default();
    assert!(!state.select_tab(AdminTab::Manage, false));
    assert!(state.select_tab(AdminTab::Manage, true));
    assert!(!state.select_tab(AdminTab::Bulk, true));
    assert_eq!(state.tab, AdminTab::Bulk);
}

#[test]
fn toggle_details_keeps_one_snippet_expanded() {
    let mut state = AdminState::default();
    state.toggle_details("a");
    state.toggle_details("b");
    assert_eq!(state.expanded.as_deref(), Some("b"));
    state.toggle_details("b");
    assert_eq!(state.expanded, None);
}

// =============================================================
// Single insert
// =============================================================

#[test]
fn create_rejects_missing_fields_before_request() {
    let mut state = AdminState::default();
    let refused = state.begin_create().expect_err("invalid");
    assert_eq!(shown_text(&refused), "Please fill in: Title, Code, Language");
    assert!(!state.submitting);
}

#[test]
fn create_success_resets_form_and_requests_refresh() {
    let mut state = AdminState { form: filled_form(), ..AdminState::default() };
    state.select_tab(AdminTab::Manage, true);
    let request = state.begin_create().expect("valid");
    assert_eq!(request.body.max_reviews, 3);
    assert_eq!(request.notice, NoticeUpdate::Clear);
    assert!(state.submitting);

    let outcome = state.finish_create(request.token, Ok(()));
    assert_eq!(shown_text(&outcome.notice), SNIPPET_ADDED);
    assert_eq!(outcome.refresh, Refresh { stats: true, snippets: true });
    assert_eq!(state.form, NewSnippetForm::default());
    assert!(!state.submitting);
}

#[test]
fn create_failure_keeps_form_and_shows_server_message() {
    let mut state = AdminState { form: filled_form(), ..AdminState::default() };
    let request = state.begin_create().expect("valid");
    let outcome = state.finish_create(request.token, Err(ApiError::rejected(400, r#"{"error":"Title too long"}"#)));
    assert_eq!(shown_text(&outcome.notice), "Title too long");
    assert_eq!(outcome.refresh, Refresh::default());
    assert_eq!(state.form, filled_form());
}

// =============================================================
// Bulk import
// =============================================================

#[test]
fn bulk_import_rejects_non_array_before_request() {
    let mut state = AdminState { bulk_text: r#"{"a":1}"#.to_owned(), ..AdminState::default() };
    let refused = state.begin_bulk_import().expect_err("not array");
    assert_eq!(shown_text(&refused), "Input must be an array of code objects");
    assert!(!state.submitting);
}

#[test]
fn bulk_import_rejects_invalid_syntax_distinctly() {
    let mut state = AdminState { bulk_text: "[1,2".to_owned(), ..AdminState::default() };
    let refused = state.begin_bulk_import().expect_err("syntax");
    assert_eq!(shown_text(&refused), "Invalid JSON format. Please check your input.");
}

#[test]
fn bulk_import_success_reports_added_count() {
    let mut state = AdminState::default();
    state.fill_sample_bulk();
    let request = state.begin_bulk_import().expect("valid");
    assert_eq!(request.body.codes.len(), 2);
    assert_eq!(request.notice, NoticeUpdate::Clear);

    let outcome = state.finish_bulk_import(request.token, Ok(BulkImportResponse { added_count: 2 }));
    assert_eq!(shown_text(&outcome.notice), "2 codes added successfully!");
    assert_eq!(outcome.refresh, Refresh { stats: true, snippets: false });
    assert!(state.bulk_text.is_empty());
}

#[test]
fn inserts_share_one_in_flight_flag() {
    let mut state = AdminState { form: filled_form(), bulk_text: "[]".to_owned(), ..AdminState::default() };
    state.begin_create().expect("first");
    assert_eq!(state.begin_bulk_import().expect_err("busy"), NoticeUpdate::Keep);
}

// =============================================================
// Stats, list, export
// =============================================================

#[test]
fn stats_replace_counters_wholesale() {
    let mut state = AdminState::default();
    let token = state.begin_stats().expect("token");
    assert!(state.begin_stats().is_none());
    let stats = Stats { total_codes: 5, total_reviews: 9, completed_codes: 2, pending_codes: 3 };
    assert_eq!(state.finish_stats(token, Ok(stats)), None);
    assert_eq!(state.stats, stats);
    assert!(!state.fetching_stats);
}

#[test]
fn stats_failure_keeps_previous_counters() {
    let mut state = AdminState { stats: Stats { total_codes: 1, ..Stats::default() }, ..AdminState::default() };
    let token = state.begin_stats().expect("token");
    let err = state.finish_stats(token, Err(ApiError::Network("down".to_owned())));
    assert!(err.is_some());
    assert_eq!(state.stats.total_codes, 1);
}

#[test]
fn list_replaces_snippets_or_reports_failure() {
    let mut state = AdminState::default();
    let token = state.begin_list().expect("token");
    let update = state.finish_list(token, Ok(vec![snippet("a", false), snippet("b", true)]));
    assert_eq!(update, NoticeUpdate::Keep);
    assert_eq!(state.snippets.len(), 2);

    let token = state.begin_list().expect("token");
    let update = state.finish_list(token, Err(ApiError::rejected(500, "")));
    assert_eq!(shown_text(&update), LIST_FAILED);
    assert_eq!(state.snippets.len(), 2);
}

#[test]
fn export_announces_then_reports_result() {
    let mut state = AdminState::default();
    let (token, started) = state.begin_export().expect("start");
    assert_eq!(started, NoticeUpdate::Show(Notice::info(EXPORT_STARTED)));
    assert_eq!(state.begin_export().expect_err("busy"), NoticeUpdate::Keep);
    assert_eq!(shown_text(&state.finish_export(token, Err(ApiError::rejected(500, "")))), EXPORT_FAILED);

    let (token, _) = state.begin_export().expect("restart");
    assert_eq!(shown_text(&state.finish_export(token, Ok(()))), EXPORT_DONE);
}

#[test]
fn snippet_labels_reflect_progress() {
    assert_eq!(completion_label(&snippet("a", true)), "Completed");
    assert_eq!(completion_label(&snippet("a", false)), "Pending");
    assert_eq!(progress_label(&snippet("a", false)), "Reviews: 1/3");
}
