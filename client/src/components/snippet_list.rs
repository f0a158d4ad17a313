//! Snippet inventory for the admin "Manage Codes" tab.

#[cfg(test)]
#[path = "snippet_list_test.rs"]
mod snippet_list_test;

use leptos::prelude::*;
use reviews::Snippet;

use crate::state::admin::{AdminState, completion_label, progress_label};

fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "Hide" } else { "View" }
}

fn completion_class(snippet: &Snippet) -> &'static str {
    if snippet.is_completed { "badge badge--completed" } else { "badge badge--pending" }
}

#[component]
pub fn SnippetList(admin: RwSignal<AdminState>, on_refresh: Callback<()>) -> impl IntoView {
    let fetching = move || admin.with(|a| a.fetching_snippets);

    view! {
        <div class="snippets">
            <div class="snippets__header">
                <h3>"Manage Existing Codes"</h3>
                <button class="snippets__refresh" disabled=fetching on:click=move |_| on_refresh.run(())>
                    "Refresh"
                </button>
            </div>
            <Show
                when=move || !fetching()
                fallback=|| view! { <p class="snippets__loading">"Loading codes..."</p> }
            >
                <Show
                    when=move || admin.with(|a| !a.snippets.is_empty())
                    fallback=|| {
                        view! { <p class="snippets__empty">"No codes found. Add some codes to get started."</p> }
                    }
                >
                    <For
                        each=move || admin.with(|a| a.snippets.clone())
                        key=|snippet| (snippet.id.clone(), snippet.review_count, snippet.is_completed)
                        children=move |snippet| view! { <SnippetRow admin=admin snippet=snippet/> }
                    />
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn SnippetRow(admin: RwSignal<AdminState>, snippet: Snippet) -> impl IntoView {
    let id = StoredValue::new(snippet.id.clone());
    let expanded = move || admin.with(|a| id.with_value(|id| a.expanded.as_deref() == Some(id.as_str())));
    let code = snippet.code.clone();

    view! {
        <div class="snippet-row">
            <div class="snippet-row__summary">
                <div class="snippet-row__meta">
                    <h4>{snippet.title.clone()}</h4>
                    <span class="badge badge--language">{snippet.language.clone()}</span>
                    <span>{progress_label(&snippet)}</span>
                    <span class=completion_class(&snippet)>{completion_label(&snippet)}</span>
                    <span class="snippet-row__id">{snippet.id.clone()}</span>
                </div>
                <button
                    class="snippet-row__toggle"
                    on:click=move |_| id.with_value(|id| admin.update(|a| a.toggle_details(id)))
                >
                    {move || toggle_label(expanded())}
                </button>
            </div>
            <Show when=expanded>
                <pre class="snippet-row__code">
                    <code>{code.clone()}</code>
                </pre>
            </Show>
        </div>
    }
}
