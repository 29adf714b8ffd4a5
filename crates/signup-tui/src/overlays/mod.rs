//! Overlay modules for the TUI.
//!
//! Overlays are modal components that take over keyboard input while open.
//! Each overlay owns its state, key handler and render function.
//!
//! - `login.rs`: teacher login form
//! - `render_utils.rs`: shared rendering helpers for overlays

pub mod login;
pub mod render_utils;

use crossterm::event::KeyEvent;
pub use login::{LoginField, LoginState};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;

/// Transition returned by overlay key handlers.
#[derive(Debug, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    Login(LoginState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Login(login) => login.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Login(login) => login.handle_key(key),
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        match self {
            Overlay::Login(login) => login.handle_paste(text),
        }
    }

    pub fn as_login_mut(&mut self) -> Option<&mut LoginState> {
        match self {
            Overlay::Login(login) => Some(login),
        }
    }
}

/// Extension trait for `Option<Overlay>`.
pub trait OverlayExt {
    /// Renders the overlay if one is active.
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}

/// Routes a key to the active overlay. Returns `None` when no overlay is open.
pub fn handle_overlay_key(overlay: &mut Option<Overlay>, key: KeyEvent) -> Option<OverlayUpdate> {
    let update = overlay.as_mut()?.handle_key(key);
    if update.transition == OverlayTransition::Close {
        *overlay = None;
    }
    Some(update)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn test_no_overlay_does_not_consume_keys() {
        let mut overlay: Option<Overlay> = None;
        let key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(handle_overlay_key(&mut overlay, key).is_none());
    }

    #[test]
    fn test_close_transition_drops_overlay() {
        let mut overlay = Some(Overlay::Login(LoginState::open()));
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let update = handle_overlay_key(&mut overlay, key).unwrap();
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(overlay.is_none());
    }
}
