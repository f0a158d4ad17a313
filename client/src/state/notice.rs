//! Transient message banner shared by the reviewer and admin pages.
//!
//! DESIGN
//! ======
//! A page shows at most one notice. Every shown notice gets a new generation;
//! the auto-clear timer carries the generation it was armed for, so a late
//! timer can never erase a newer message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A user-facing banner message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, text: text.into() }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, text: text.into() }
    }
}

/// What a state transition wants done to the banner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoticeUpdate {
    /// Leave the banner as it is.
    Keep,
    Clear,
    Show(Notice),
}

impl From<Notice> for NoticeUpdate {
    fn from(notice: Notice) -> Self {
        Self::Show(notice)
    }
}

/// Banner slot for one page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    generation: u64,
}

impl NoticeState {
    /// Apply an update. Returns the generation to arm the auto-clear timer
    /// with when a new notice was shown.
    pub fn apply(&mut self, update: NoticeUpdate) -> Option<u64> {
        match update {
            NoticeUpdate::Keep => None,
            NoticeUpdate::Clear => {
                self.generation += 1;
                self.current = None;
                None
            }
            NoticeUpdate::Show(notice) => {
                self.generation += 1;
                self.current = Some(notice);
                Some(self.generation)
            }
        }
    }

    /// Auto-clear callback. Ignored unless `generation` is still current.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }
}

/// CSS modifier class for a notice kind.
#[must_use]
pub fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "notice notice--success",
        NoticeKind::Error => "notice notice--error",
        NoticeKind::Info => "notice notice--info",
    }
}
