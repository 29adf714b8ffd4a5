use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;

use super::OverlayUpdate;
use crate::auth::render_login_overlay;
use crate::effects::UiEffect;

pub const MISSING_CREDENTIALS: &str = "Enter a username and password.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    fn toggle(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// Login form. Closing the overlay drops it, which resets the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub field: LoginField,
    /// Failure line shown under the fields until the next attempt.
    pub error: Option<String>,
    /// A submit is in flight.
    pub pending: bool,
}

impl LoginState {
    pub fn open() -> Self {
        Self::default()
    }

    /// Records a failed attempt; the form stays open with its input.
    pub fn fail(&mut self, message: String) {
        self.pending = false;
        self.error = Some(message);
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        render_login_overlay(frame, self, area);
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        let clean: String = text.chars().filter(|c| !c.is_control()).collect();
        self.active_field_mut().push_str(&clean);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.field = self.field.toggle();
                OverlayUpdate::stay()
            }
            KeyCode::Enter => {
                if self.username.is_empty() || self.password.is_empty() {
                    self.error = Some(MISSING_CREDENTIALS.to_string());
                    return OverlayUpdate::stay();
                }
                self.error = None;
                self.pending = true;
                OverlayUpdate::stay().with_ui_effects(vec![UiEffect::Login {
                    username: self.username.clone(),
                    password: self.password.clone(),
                }])
            }
            KeyCode::Backspace => {
                self.active_field_mut().pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.active_field_mut().push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }
}
