//! Registration feature reducer.
//!
//! Signup and unregister are teacher-only. Without a session the reducer shows
//! the guard message and emits nothing, so no request is made.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use signup_core::api::{ApiError, MessageResponse};
use signup_core::notice::Notice;

use crate::effects::UiEffect;
use crate::state::{Focus, TuiState};

pub use signup_core::messages::{
    SERVER_FALLBACK, SIGNUP_FAILED, SIGNUP_GUARD, UNREGISTER_FAILED, UNREGISTER_GUARD,
};
pub const EMAIL_REQUIRED: &str = "Please enter a student email.";
pub const ACTIVITY_REQUIRED: &str = "Please select an activity.";

/// Moves focus to the signup form, which only exists with a session.
pub fn focus_form(tui: &mut TuiState) {
    if tui.session.is_authenticated() {
        tui.focus = Focus::Form;
    } else {
        tui.show_registration_notice(Notice::error(SIGNUP_GUARD));
    }
}

/// Submits the signup form.
pub fn submit_signup(tui: &mut TuiState) -> Vec<UiEffect> {
    if !tui.session.is_authenticated() {
        tui.show_registration_notice(Notice::error(SIGNUP_GUARD));
        return vec![];
    }

    let email = tui.form.email.trim().to_string();
    if email.is_empty() {
        tui.show_registration_notice(Notice::error(EMAIL_REQUIRED));
        return vec![];
    }
    let options = tui.activity_options();
    let Some(activity) = tui.form.selected_activity(&options) else {
        tui.show_registration_notice(Notice::error(ACTIVITY_REQUIRED));
        return vec![];
    };

    tracing::debug!(%activity, %email, "submitting signup");
    vec![UiEffect::Signup {
        activity: activity.to_string(),
        email,
        token: tui.session.token().map(str::to_string),
    }]
}

pub fn handle_signup_result(
    tui: &mut TuiState,
    result: Result<MessageResponse, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(response) => {
            tui.show_registration_notice(Notice::success(response.message));
            tui.form.reset();
            vec![UiEffect::FetchActivities]
        }
        Err(err) => {
            tracing::warn!(error = %err, "signup failed");
            let message = err.user_message(SERVER_FALLBACK, SIGNUP_FAILED);
            tui.show_registration_notice(Notice::error(message));
            vec![]
        }
    }
}

/// Unregisters the participant under the cursor.
///
/// Does nothing when the cursor is on a card header.
pub fn request_unregister(tui: &mut TuiState) -> Vec<UiEffect> {
    let Some((activity, email)) = tui
        .cursor
        .selected_participant(tui.catalog.activities())
        .map(|(activity, email)| (activity.to_string(), email.to_string()))
    else {
        return vec![];
    };

    if !tui.session.is_authenticated() {
        tui.show_registration_notice(Notice::error(UNREGISTER_GUARD));
        return vec![];
    }

    tracing::debug!(%activity, %email, "submitting unregister");
    vec![UiEffect::Unregister {
        activity,
        email,
        token: tui.session.token().map(str::to_string),
    }]
}

pub fn handle_unregister_result(
    tui: &mut TuiState,
    result: Result<MessageResponse, ApiError>,
) -> Vec<UiEffect> {
    match result {
        Ok(response) => {
            tui.show_registration_notice(Notice::success(response.message));
            vec![UiEffect::FetchActivities]
        }
        Err(err) => {
            tracing::warn!(error = %err, "unregister failed");
            let message = err.user_message(SERVER_FALLBACK, UNREGISTER_FAILED);
            tui.show_registration_notice(Notice::error(message));
            vec![]
        }
    }
}

/// Key handling while the signup form has focus.
pub fn handle_form_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let option_count = tui.activity_options().len();

    match key.code {
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
            tui.focus = Focus::List;
            vec![]
        }
        KeyCode::Enter => submit_signup(tui),
        KeyCode::Left => {
            tui.form.select_prev(option_count);
            vec![]
        }
        KeyCode::Right => {
            tui.form.select_next(option_count);
            vec![]
        }
        KeyCode::Backspace => {
            tui.form.email.pop();
            vec![]
        }
        KeyCode::Char(c) if !ctrl => {
            tui.form.email.push(c);
            vec![]
        }
        _ => vec![],
    }
}

pub fn handle_form_paste(tui: &mut TuiState, text: &str) {
    tui.form
        .email
        .extend(text.chars().filter(|c| !c.is_control()));
}
