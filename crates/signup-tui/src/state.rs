//! Application state composition.
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── session: Session          (authentication)
//! │   ├── catalog: CatalogState     (activities from the last fetch)
//! │   ├── cursor: ListCursor        (selected list row)
//! │   ├── form: SignupForm          (email + activity selector)
//! │   ├── focus: Focus              (list or form)
//! │   └── notice: NoticeSlot        (single transient message)
//! └── overlay: Option<Overlay>      (login modal)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay key
//! handlers can borrow the overlay mutably while reading `TuiState`.

use std::time::{Duration, Instant};

use signup_core::config::NoticeConfig;
use signup_core::notice::{Notice, NoticeSlot};
use signup_core::session::Session;
use signup_core::view::{self, ActivityCard};

use crate::activities::{CatalogState, ListCursor, list_rows};
use crate::overlays::Overlay;
use crate::registration::SignupForm;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(session: Session, notices: NoticeConfig, base_url: String) -> Self {
        Self {
            tui: TuiState::new(session, notices, base_url),
            overlay: None,
        }
    }
}

/// Which part of the main screen receives keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    List,
    Form,
}

/// TUI application state (non-overlay).
pub struct TuiState {
    pub should_quit: bool,
    pub session: Session,
    pub catalog: CatalogState,
    pub cursor: ListCursor,
    pub form: SignupForm,
    pub focus: Focus,
    pub notice: NoticeSlot,
    pub notice_config: NoticeConfig,
    /// Service URL, shown in the header.
    pub base_url: String,
}

impl TuiState {
    pub fn new(session: Session, notice_config: NoticeConfig, base_url: String) -> Self {
        Self {
            should_quit: false,
            session,
            catalog: CatalogState::default(),
            cursor: ListCursor::default(),
            form: SignupForm::default(),
            focus: Focus::default(),
            notice: NoticeSlot::default(),
            notice_config,
            base_url,
        }
    }

    /// Cards for the current catalog, derived fresh so removal controls always
    /// follow the session.
    pub fn cards(&self) -> Vec<ActivityCard> {
        view::build_cards(self.catalog.activities(), self.session.is_authenticated())
    }

    pub fn activity_options(&self) -> Vec<String> {
        view::activity_options(self.catalog.activities())
    }

    pub fn row_count(&self) -> usize {
        list_rows(self.catalog.activities()).len()
    }

    pub fn show_notice(&mut self, notice: Notice, ttl: Duration) {
        self.notice.show(notice, ttl, Instant::now());
    }

    /// Login/logout feedback.
    pub fn show_login_notice(&mut self, notice: Notice) {
        let ttl = self.notice_config.login();
        self.show_notice(notice, ttl);
    }

    /// Signup/unregister feedback, including guard messages.
    pub fn show_registration_notice(&mut self, notice: Notice) {
        let ttl = self.notice_config.registration();
        self.show_notice(notice, ttl);
    }
}
