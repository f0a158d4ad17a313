//! Reviewer page: fetch a snippet, annotate lines, submit, repeat.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the reviewer `ReviewSession` plus the connection and banner state.
//! Handlers run a `begin_*` transition, perform the HTTP call in a local
//! task, then hand the result to the matching `finish_*` transition. Timers
//! (banner expiry, follow-up fetch) live in local slots that are cancelled
//! when the page unmounts.

#[cfg(test)]
#[path = "review_test.rs"]
mod review_test;

use leptos::prelude::*;
use reviews::{ReviewScope, ReviewerIdentityForm};

use crate::components::code_view::CodeView;
use crate::components::connection_badge::ConnectionBadge;
use crate::components::line_review_list::LineReviewList;
use crate::components::notice_banner::{NoticeBanner, post_notice};
use crate::components::reviewer_form::ReviewerForm;
use crate::config::review_scope;
use crate::state::connection::{ConnectionState, ConnectionStatus};
use crate::state::notice::{NoticeState, NoticeUpdate};
use crate::state::session::ReviewSession;
use crate::util::timer::TimerSlot;

/// Placeholder shown in the code panel when no snippet is on screen.
fn empty_code_hint(loading: bool, status: ConnectionStatus, email_entered: bool, scope: ReviewScope) -> &'static str {
    if loading {
        "Loading code..."
    } else if status != ConnectionStatus::Connected {
        "Please check your connection to the backend server"
    } else if scope.requires_email() && !email_entered {
        "Please enter your email first, then click 'Get New Code'"
    } else {
        "Click \"Get New Code\" to start reviewing"
    }
}

fn fetch_button_label(loading: bool) -> &'static str {
    if loading { "Loading..." } else { "Get New Code" }
}

fn submit_button_label(submitting: bool) -> &'static str {
    if submitting { "Submitting Review..." } else { "Submit Review" }
}

#[component]
pub fn ReviewPage() -> impl IntoView {
    let scope = review_scope();
    let connection = RwSignal::new(ConnectionState::default());
    let notice = RwSignal::new(NoticeState::default());
    let session = RwSignal::new(ReviewSession::default());
    let form = RwSignal::new(ReviewerIdentityForm::default());
    let general_comment = RwSignal::new(String::new());
    let notice_timer = StoredValue::new_local(TimerSlot::default());
    let follow_up_timer = StoredValue::new_local(TimerSlot::default());

    let post = move |update: NoticeUpdate| post_notice(notice, notice_timer, update);

    let check_connection = move || {
        let Some(token) = connection.try_update(ConnectionState::begin_check) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::check_health().await;
            if let Err(e) = &result {
                log::warn!("health check failed: {e}");
            }
            if let Some(update) = connection.try_update(|c| c.finish_check(token, result)) {
                post(update);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    let fetch_snippet = move || {
        let Some(request) = session.try_update(|s| form.with_untracked(|f| s.begin_fetch(f, scope))) else {
            return;
        };
        let request = match request {
            Ok(request) => request,
            Err(update) => {
                post(update);
                return;
            }
        };
        post(request.notice.clone());
        follow_up_timer.update_value(TimerSlot::cancel);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_random_snippet(request.email.as_deref()).await;
            if let Some(update) = session.try_update(|s| s.finish_fetch(request.token, result)) {
                post(update);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    let submit_review = move || {
        let Some(request) = session.try_update(|s| {
            form.with_untracked(|f| general_comment.with_untracked(|comment| s.begin_submit(f, comment, scope)))
        }) else {
            return;
        };
        let request = match request {
            Ok(request) => request,
            Err(update) => {
                post(update);
                return;
            }
        };
        post(request.notice.clone());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_review(&request.payload).await;
            let Some(outcome) = session.try_update(|s| s.finish_submit(request.token, result)) else {
                return;
            };
            post(outcome.notice);
            if let Some(crate::state::session::FollowUp::FetchNext { delay }) = outcome.follow_up {
                follow_up_timer.update_value(|slot| slot.arm(delay, fetch_snippet));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    Effect::new(move || check_connection());

    on_cleanup(move || {
        notice_timer.update_value(TimerSlot::cancel);
        follow_up_timer.update_value(TimerSlot::cancel);
    });

    let connected = move || connection.with(ConnectionState::is_connected);
    let can_fetch = move || session.with(|s| form.with(|f| s.can_fetch(f, scope, connected())));
    let can_submit = move || session.with(|s| s.can_submit(connected()));
    let loading = move || session.with(|s| s.loading);
    let submitting = move || session.with(|s| s.submitting);
    let snippet_meta = Memo::new(move |_| {
        session.with(|s| {
            s.snippet.as_ref().map(|snippet| {
                (
                    snippet.title.clone(),
                    snippet.language.clone(),
                    snippet.review_count,
                    snippet.max_reviews,
                    snippet.id.clone(),
                )
            })
        })
    });
    let hint = move || {
        empty_code_hint(
            loading(),
            connection.with(|c| c.status),
            form.with(|f| !f.email.trim().is_empty()),
            scope,
        )
    };

    view! {
        <div class="review-page">
            <header class="page-header">
                <div class="page-header__title">
                    <h1>"Code Review Platform"</h1>
                    <ConnectionBadge connection=connection on_retry=Callback::new(move |()| check_connection())/>
                </div>
                <div class="page-header__counter">
                    {move || format!("Reviews Submitted: {}", session.with(|s| s.submitted_count))}
                </div>
            </header>

            <main class="page-main">
                <section class="welcome">
                    <h2>"Welcome to the Code Review Platform"</h2>
                    <p>
                        "Help improve code quality by providing line-by-line feedback on code snippets. "
                        "Each code needs 3 reviews before completion. You can review each code only once."
                    </p>
                    <ul class="welcome__points">
                        <li>"Review code snippets randomly"</li>
                        <li>"Provide line-by-line feedback"</li>
                        <li>"One review per code per user"</li>
                    </ul>
                </section>

                <NoticeBanner notice=notice/>

                <div class="review-page__columns">
                    <section class="panel">
                        <div class="panel__header">
                            <h2>"Code to Review"</h2>
                            <button
                                class="button button--primary"
                                disabled=move || !can_fetch()
                                on:click=move |_| fetch_snippet()
                            >
                                {move || fetch_button_label(loading())}
                            </button>
                        </div>
                        <div class="panel__body">
                            {move || match snippet_meta.get() {
                                Some((title, language, review_count, max_reviews, id)) => {
                                    view! {
                                        <div class="snippet">
                                            <h3>{title}</h3>
                                            <div class="snippet__meta">
                                                <span class="badge badge--language">{language}</span>
                                                <span>{format!("Reviews: {review_count}/{max_reviews}")}</span>
                                                <span class="snippet__id">{format!("ID: {id}")}</span>
                                            </div>
                                            <div class="guidelines">
                                                <h4>"Line-by-Line Review Guidelines:"</h4>
                                                <ul>
                                                    <li>"Click on line numbers to reference specific lines"</li>
                                                    <li>"Look for bugs, errors, or logical issues"</li>
                                                    <li>"Check for performance improvements"</li>
                                                    <li>"Evaluate code style and readability"</li>
                                                    <li>"Consider security vulnerabilities"</li>
                                                    <li>"Suggest best practices"</li>
                                                </ul>
                                            </div>
                                            <CodeView session=session/>
                                        </div>
                                    }
                                        .into_any()
                                }
                                None => view! { <div class="panel__empty">{hint}</div> }.into_any(),
                            }}
                        </div>
                    </section>

                    <section class="panel">
                        <div class="panel__header">
                            <h2>"Submit Your Review"</h2>
                        </div>
                        <div class="panel__body">
                            <ReviewerForm form=form general_comment=general_comment scope=scope/>
                            <div class="callout callout--purple">
                                <h4>"Line-by-Line Reviews"</h4>
                                <p>
                                    "Add specific feedback for individual lines of code. "
                                    "You must add at least one line review."
                                </p>
                            </div>
                            <LineReviewList session=session/>
                            <button
                                class="button button--submit"
                                type="button"
                                disabled=move || !can_submit()
                                on:click=move |_| submit_review()
                            >
                                {move || submit_button_label(submitting())}
                            </button>
                            <p class="panel__footer">"Thank you for contributing to better code quality!"</p>
                        </div>
                    </section>
                </div>
            </main>
        </div>
    }
}
