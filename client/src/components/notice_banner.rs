//! Transient success/error/info banner.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own a `NoticeState` signal and a `TimerSlot`. Every update goes
//! through [`post_notice`], which re-arms the auto-clear timer whenever a new
//! message is shown. A timer left over from an older message only clears the
//! banner if no newer message replaced it.

use leptos::prelude::*;

use crate::config::NOTICE_TTL;
use crate::state::notice::{NoticeKind, NoticeState, NoticeUpdate, notice_class};
use crate::util::timer::TimerSlot;

/// Apply `update` to the banner and schedule its expiry.
pub fn post_notice(notice: RwSignal<NoticeState>, timer: StoredValue<TimerSlot, LocalStorage>, update: NoticeUpdate) {
    let clears = update == NoticeUpdate::Clear;
    match notice.try_update(|n| n.apply(update)).flatten() {
        Some(generation) => timer.update_value(|slot| {
            slot.arm(NOTICE_TTL, move || {
                notice.update(|n| {
                    n.expire(generation);
                });
            });
        }),
        None if clears => timer.update_value(TimerSlot::cancel),
        None => {}
    }
}

fn notice_icon(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "\u{2714}",
        NoticeKind::Error | NoticeKind::Info => "\u{26a0}",
    }
}

#[component]
pub fn NoticeBanner(notice: RwSignal<NoticeState>) -> impl IntoView {
    move || {
        notice.with(|n| {
            n.current.as_ref().map(|current| {
                let class = notice_class(current.kind);
                let icon = notice_icon(current.kind);
                let text = current.text.clone();
                view! {
                    <div class=class role="status">
                        <span class="notice__icon">{icon}</span>
                        <span class="notice__text">{text}</span>
                    </div>
                }
            })
        })
    }
}
