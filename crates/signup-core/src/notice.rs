//! Transient status notices.
//!
//! The UI shows at most one notice at a time. Each notice carries its own
//! deadline, so showing a new notice discards the previous deadline and an
//! older timer can never clear a newer message.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Single notice slot with one cancellable dismissal deadline.
#[derive(Debug, Default)]
pub struct NoticeSlot {
    current: Option<(Notice, Instant)>,
}

impl NoticeSlot {
    /// Shows `notice` until `now + ttl`, replacing whatever was shown.
    pub fn show(&mut self, notice: Notice, ttl: Duration, now: Instant) {
        self.current = Some((notice, now + ttl));
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref().map(|(notice, _)| notice)
    }

    pub fn has_pending_clear(&self) -> bool {
        self.current.is_some()
    }

    /// Clears the notice if its own deadline has passed.
    ///
    /// Returns true if the notice was cleared.
    pub fn expire(&mut self, now: Instant) -> bool {
        if let Some((_, deadline)) = &self.current
            && now >= *deadline
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
