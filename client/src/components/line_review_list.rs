//! Editable line review rows for the reviewer form.
//!
//! Rows are keyed by position. Each field reads its value reactively, so
//! removing a row shifts the remaining values up without rebuilding inputs
//! that keep focus.

#[cfg(test)]
#[path = "line_review_list_test.rs"]
mod line_review_list_test;

use leptos::prelude::*;
use reviews::collection::MIN_COMMENT_CHARS;
use reviews::{LineReviewEntry, LineReviewField, ReviewCategory};

use crate::state::session::ReviewSession;

/// Counter text under a comment box and whether it meets the minimum.
fn comment_progress(comment: &str) -> (String, bool) {
    let chars = comment.trim().chars().count();
    (format!("{chars}/{MIN_COMMENT_CHARS} minimum characters"), chars >= MIN_COMMENT_CHARS)
}

/// Whether any row exists, selecting the list over the empty hint.
fn has_rows(session: &ReviewSession) -> bool {
    !session.lines.is_empty()
}

fn comment_counter_class(met: bool) -> &'static str {
    if met { "line-review__counter line-review__counter--ok" } else { "line-review__counter line-review__counter--short" }
}

#[component]
pub fn LineReviewList(session: RwSignal<ReviewSession>) -> impl IntoView {
    let count = move || session.with(|s| s.lines.len());

    view! {
        <div class="line-reviews">
            <div class="line-reviews__header">
                <h4>"Line Reviews *"</h4>
                <button class="line-reviews__add" on:click=move |_| session.update(ReviewSession::add_entry)>
                    "+ Add Line Review"
                </button>
            </div>
            <Show
                when=move || session.with(has_rows)
                fallback=|| {
                    view! {
                        <div class="line-reviews__empty">
                            <p>"No line reviews added yet"</p>
                            <p class="line-reviews__hint">
                                "Click \"Add Line Review\" or click on line numbers in the code"
                            </p>
                        </div>
                    }
                }
            >
                <For
                    each=move || 0..count()
                    key=|index| *index
                    children=move |index| view! { <LineReviewRow session=session index=index/> }
                />
            </Show>
        </div>
    }
}

#[component]
fn LineReviewRow(session: RwSignal<ReviewSession>, index: usize) -> impl IntoView {
    let field = move |read: fn(&LineReviewEntry) -> String| {
        move || session.with(|s| s.lines.entries().get(index).map(read).unwrap_or_default())
    };
    let line_number = field(|e| e.line_number.clone());
    let comment = field(|e| e.comment.clone());
    let category = field(|e| e.category.map(ReviewCategory::label).unwrap_or_default().to_owned());
    let max_line = move || session.with(ReviewSession::line_count);
    let edit = move |which: LineReviewField, value: String| {
        session.update(|s| {
            s.update_entry(index, which, &value);
        });
    };
    let progress = move || comment_progress(&comment());

    view! {
        <div class="line-review">
            <div class="line-review__header">
                <h5>{format!("Review #{}", index + 1)}</h5>
                <button
                    class="line-review__remove"
                    title="Remove line review"
                    on:click=move |_| {
                        session.update(|s| {
                            s.remove_entry(index);
                        });
                    }
                >
                    "\u{2715}"
                </button>
            </div>
            <div class="line-review__grid">
                <label class="field">
                    <span class="field__label">"Line Number *"</span>
                    <input
                        type="number"
                        min="1"
                        max=move || max_line().to_string()
                        placeholder="Line #"
                        prop:value=line_number
                        on:input=move |ev| edit(LineReviewField::LineNumber, event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Category *"</span>
                    <select
                        prop:value=category
                        on:change=move |ev| edit(LineReviewField::Category, event_target_value(&ev))
                    >
                        <option value="">"Select category"</option>
                        {ReviewCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.label()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>
            <label class="field">
                <span class="field__label">"Comment *"</span>
                <textarea
                    rows="3"
                    placeholder="Detailed feedback for this line..."
                    prop:value=comment
                    on:input=move |ev| edit(LineReviewField::Comment, event_target_value(&ev))
                ></textarea>
            </label>
            <span class=move || comment_counter_class(progress().1)>{move || progress().0}</span>
        </div>
    }
}
