//! Numbered source listing for the snippet under review.
//!
//! Clicking a line appends a line review for it unless one already exists.

#[cfg(test)]
#[path = "code_view_test.rs"]
mod code_view_test;

use leptos::prelude::*;

use crate::state::session::ReviewSession;

/// Rendered text of one source line; blank lines keep their height.
fn display_line(line: &str) -> String {
    if line.is_empty() { " ".to_owned() } else { line.to_owned() }
}

#[component]
pub fn CodeView(session: RwSignal<ReviewSession>) -> impl IntoView {
    let lines = Memo::new(move |_| {
        session.with(|s| {
            s.snippet
                .as_ref()
                .map(|snippet| snippet.lines().map(display_line).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    view! {
        <pre class="code-view">
            <code>
                {move || {
                    lines
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, text)| {
                            let number = index + 1;
                            view! {
                                <div
                                    class="code-view__line"
                                    on:click=move |_| {
                                        session.update(|s| {
                                            s.click_line(number);
                                        });
                                    }
                                >
                                    <span class="code-view__number">{number}</span>
                                    <span class="code-view__text">{text}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </code>
        </pre>
    }
}
