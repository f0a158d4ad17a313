//! Admin dashboard: add snippets one at a time or in bulk, browse the
//! inventory, watch platform counters, export reviews as CSV.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shares no state with the reviewer page. The same `begin_*`/`finish_*`
//! pattern applies: `AdminState` validates and tracks in-flight requests,
//! this page performs the HTTP calls and reloads whatever an insert reports
//! as stale.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use reviews::snippet_form::LANGUAGES;

use crate::components::connection_badge::ConnectionBadge;
use crate::components::notice_banner::{NoticeBanner, post_notice};
use crate::components::snippet_list::SnippetList;
use crate::components::stats_panel::StatsPanel;
use crate::config::api_base_url;
use crate::state::admin::{AdminState, AdminTab, InsertRequest, Refresh};
use crate::state::connection::ConnectionState;
use crate::state::notice::{NoticeState, NoticeUpdate};
use crate::util::timer::TimerSlot;

const BULK_FORMAT_EXAMPLE: &str = r#"[
  {
    "title": "Code Title",
    "language": "JavaScript",
    "code": "function example() { ... }",
    "maxReviews": 3
  }
]"#;

fn tab_class(active: bool) -> &'static str {
    if active { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
}

fn tab_title(tab: AdminTab) -> &'static str {
    match tab {
        AdminTab::Single => "Add Single Code",
        AdminTab::Bulk => "Bulk Import",
        AdminTab::Manage => "Manage Codes",
    }
}

fn char_count_label(text: &str) -> String {
    format!("Characters: {}", text.chars().count())
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let connection = RwSignal::new(ConnectionState::default());
    let notice = RwSignal::new(NoticeState::default());
    let admin = RwSignal::new(AdminState::default());
    let notice_timer = StoredValue::new_local(TimerSlot::default());

    let post = move |update: NoticeUpdate| post_notice(notice, notice_timer, update);
    let connected = Memo::new(move |_| connection.with(ConnectionState::is_connected));

    let check_connection = move || {
        let Some(token) = connection.try_update(ConnectionState::begin_check) else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::check_health().await;
            if let Some(update) = connection.try_update(|c| c.finish_check(token, result)) {
                post(update);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    let load_stats = move || {
        let Some(token) = admin.try_update(AdminState::begin_stats).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_stats().await;
            if let Some(Some(err)) = admin.try_update(|a| a.finish_stats(token, result)) {
                log::error!("failed to fetch stats: {err}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    let load_snippets = move || {
        let Some(token) = admin.try_update(AdminState::begin_list).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_snippets().await;
            if let Err(e) = &result {
                log::error!("failed to fetch codes: {e}");
            }
            if let Some(update) = admin.try_update(|a| a.finish_list(token, result)) {
                post(update);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    let apply_refresh = move |refresh: Refresh| {
        if refresh.stats {
            load_stats();
        }
        if refresh.snippets {
            load_snippets();
        }
    };

    let select_tab = move |tab: AdminTab| {
        let connected = connected.get_untracked();
        if admin.try_update(|a| a.select_tab(tab, connected)).unwrap_or(false) {
            load_snippets();
        }
    };

    let create_snippet = move || {
        let Some(request) = admin.try_update(AdminState::begin_create) else {
            return;
        };
        let InsertRequest { token, body, notice } = match request {
            Ok(request) => request,
            Err(update) => {
                post(update);
                return;
            }
        };
        post(notice);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::create_snippet(&body).await;
            if let Some(outcome) = admin.try_update(|a| a.finish_create(token, result)) {
                post(outcome.notice);
                apply_refresh(outcome.refresh);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, body, apply_refresh);
    };

    let import_snippets = move || {
        let Some(request) = admin.try_update(AdminState::begin_bulk_import) else {
            return;
        };
        let InsertRequest { token, body, notice } = match request {
            Ok(request) => request,
            Err(update) => {
                post(update);
                return;
            }
        };
        post(notice);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::bulk_import(&body).await;
            if let Some(outcome) = admin.try_update(|a| a.finish_bulk_import(token, result)) {
                post(outcome.notice);
                apply_refresh(outcome.refresh);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (token, body);
    };

    let export_reviews = move || {
        let Some(request) = admin.try_update(AdminState::begin_export) else {
            return;
        };
        let token = match request {
            Ok((token, started)) => {
                post(started);
                token
            }
            Err(update) => {
                post(update);
                return;
            }
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let filename = crate::util::download::todays_export_filename();
            let result = crate::net::api::export_reviews().await.and_then(|bytes| {
                crate::util::download::save_csv(&bytes, &filename).map_err(reviews::ApiError::Decode)
            });
            if let Err(e) = &result {
                log::error!("failed to export reviews: {e}");
            }
            if let Some(update) = admin.try_update(|a| a.finish_export(token, result)) {
                post(update);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = token;
    };

    Effect::new(move || {
        check_connection();
        load_stats();
    });

    // Reload the inventory once the backend comes up while it is on screen.
    Effect::new(move || {
        if connected.get() && admin.with_untracked(|a| a.tab == AdminTab::Manage) {
            load_snippets();
        }
    });

    on_cleanup(move || notice_timer.update_value(TimerSlot::cancel));

    let tab = Memo::new(move |_| admin.with(|a| a.tab));
    let submitting = move || admin.with(|a| a.submitting);
    let fetching_stats = move || admin.with(|a| a.fetching_stats);
    let exporting = move || admin.with(|a| a.exporting);

    let tab_button = move |which: AdminTab| {
        view! {
            <button class=move || tab_class(tab.get() == which) on:click=move |_| select_tab(which)>
                {tab_title(which)}
            </button>
        }
    };

    view! {
        <div class="admin-page">
            <header class="page-header">
                <div class="page-header__title">
                    <h1>"Code Management Dashboard"</h1>
                    <ConnectionBadge connection=connection on_retry=Callback::new(move |()| check_connection())/>
                </div>
                <div class="page-header__actions">
                    <button
                        class="button button--export"
                        disabled=move || !connected.get() || exporting()
                        on:click=move |_| export_reviews()
                    >
                        "Export Reviews CSV"
                    </button>
                    <button
                        class="button button--stats"
                        disabled=move || fetching_stats() || !connected.get()
                        on:click=move |_| load_stats()
                    >
                        "Refresh Stats"
                    </button>
                </div>
            </header>

            <main class="page-main">
                <div class="endpoint">
                    "API Endpoint: "
                    <code>{api_base_url()}</code>
                </div>

                <StatsPanel admin=admin/>
                <NoticeBanner notice=notice/>

                <div class="tabs">
                    <nav class="tabs__nav">
                        {tab_button(AdminTab::Single)}
                        {tab_button(AdminTab::Bulk)}
                        {tab_button(AdminTab::Manage)}
                    </nav>
                    <div class="tabs__body">
                        {move || match tab.get() {
                            AdminTab::Single => {
                                view! {
                                    <div class="single-form">
                                        <h3>"Add Single Code Snippet"</h3>
                                        <label class="field">
                                            <span class="field__label">"Code Title *"</span>
                                            <input
                                                type="text"
                                                placeholder="e.g., Bubble Sort Algorithm"
                                                prop:value=move || admin.with(|a| a.form.title.clone())
                                                on:input=move |ev| admin.update(|a| a.form.title = event_target_value(&ev))
                                            />
                                        </label>
                                        <label class="field">
                                            <span class="field__label">"Programming Language *"</span>
                                            <select
                                                prop:value=move || admin.with(|a| a.form.language.clone())
                                                on:change=move |ev| admin.update(|a| a.form.language = event_target_value(&ev))
                                            >
                                                <option value="">"Select Language"</option>
                                                {LANGUAGES
                                                    .into_iter()
                                                    .map(|lang| view! { <option value=lang>{lang}</option> })
                                                    .collect_view()}
                                            </select>
                                        </label>
                                        <label class="field">
                                            <span class="field__label">"Maximum Reviews"</span>
                                            <input
                                                type="number"
                                                min="1"
                                                max="10"
                                                prop:value=move || admin.with(|a| a.form.max_reviews.clone())
                                                on:input=move |ev| {
                                                    admin.update(|a| a.form.max_reviews = event_target_value(&ev));
                                                }
                                            />
                                            <span class="field__hint">"(Recommended: 3)"</span>
                                        </label>
                                        <label class="field">
                                            <span class="field__label">"Code Content *"</span>
                                            <textarea
                                                rows="15"
                                                placeholder="Paste your code here..."
                                                prop:value=move || admin.with(|a| a.form.code.clone())
                                                on:input=move |ev| admin.update(|a| a.form.code = event_target_value(&ev))
                                            ></textarea>
                                            <span class="field__hint">
                                                {move || admin.with(|a| char_count_label(&a.form.code))}
                                            </span>
                                        </label>
                                        <button
                                            class="button button--primary"
                                            disabled=move || submitting() || !connected.get()
                                            on:click=move |_| create_snippet()
                                        >
                                            {move || if submitting() { "Adding Code..." } else { "Add Code" }}
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            AdminTab::Bulk => {
                                view! {
                                    <div class="bulk-form">
                                        <div class="bulk-form__header">
                                            <h3>"Bulk Import Codes"</h3>
                                            <button
                                                class="button button--secondary"
                                                on:click=move |_| admin.update(AdminState::fill_sample_bulk)
                                            >
                                                "Load Sample Data"
                                            </button>
                                        </div>
                                        <div class="callout callout--yellow">
                                            <h4>"JSON Format Required:"</h4>
                                            <pre>{BULK_FORMAT_EXAMPLE}</pre>
                                        </div>
                                        <label class="field">
                                            <span class="field__label">"JSON Data *"</span>
                                            <textarea
                                                rows="20"
                                                placeholder="Paste your JSON array of code objects here..."
                                                prop:value=move || admin.with(|a| a.bulk_text.clone())
                                                on:input=move |ev| admin.update(|a| a.bulk_text = event_target_value(&ev))
                                            ></textarea>
                                            <span class="field__hint">
                                                {move || admin.with(|a| char_count_label(&a.bulk_text))}
                                            </span>
                                        </label>
                                        <button
                                            class="button button--primary"
                                            disabled=move || submitting() || !connected.get()
                                            on:click=move |_| import_snippets()
                                        >
                                            {move || if submitting() { "Importing Codes..." } else { "Import Codes" }}
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                            AdminTab::Manage => {
                                view! {
                                    <SnippetList admin=admin on_refresh=Callback::new(move |()| load_snippets())/>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </main>
        </div>
    }
}
