//! Backend connection indicator shown in both page headers.

use leptos::prelude::*;

use crate::state::connection::{
    ConnectionState, ConnectionStatus, connection_status_class, connection_status_label,
};

/// Status dot plus label. The retry control only appears while disconnected.
#[component]
pub fn ConnectionBadge(connection: RwSignal<ConnectionState>, on_retry: Callback<()>) -> impl IntoView {
    let status = move || connection.with(|c| c.status);

    view! {
        <div class="connection">
            <span class=move || connection_status_class(status())></span>
            <span class="connection__label">{move || connection_status_label(status())}</span>
            <Show when=move || status() == ConnectionStatus::Disconnected>
                <button
                    class="connection__retry"
                    title="Retry connection"
                    on:click=move |_| on_retry.run(())
                >
                    "\u{21bb}"
                </button>
            </Show>
        </div>
    }
}
