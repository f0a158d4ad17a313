//! Platform counters on the admin dashboard.

#[cfg(test)]
#[path = "stats_panel_test.rs"]
mod stats_panel_test;

use leptos::prelude::*;
use reviews::Stats;

use crate::state::admin::AdminState;

/// `(label, value, modifier)` for each tile, in display order.
fn stat_tiles(stats: Stats) -> [(&'static str, u64, &'static str); 4] {
    [
        ("Total Codes", stats.total_codes, "blue"),
        ("Total Reviews", stats.total_reviews, "green"),
        ("Completed Codes", stats.completed_codes, "purple"),
        ("Pending Codes", stats.pending_codes, "orange"),
    ]
}

#[component]
pub fn StatsPanel(admin: RwSignal<AdminState>) -> impl IntoView {
    let stats = move || admin.with(|a| a.stats);

    view! {
        <section class="stats">
            <h2 class="stats__title">"Platform Statistics"</h2>
            <div class="stats__grid">
                {move || {
                    stat_tiles(stats())
                        .into_iter()
                        .map(|(label, value, modifier)| {
                            view! {
                                <div class=format!("stats__tile stats__tile--{modifier}")>
                                    <div class="stats__value">{value}</div>
                                    <div class="stats__label">{label}</div>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
