//! Auth feature reducer.
//!
//! Session transitions for status checks, login and logout.

use signup_core::api::{ApiError, LoginResponse, StatusResponse};
use signup_core::notice::Notice;
use signup_core::session::{Session, SessionCookie};

use crate::effects::UiEffect;
use crate::state::{Focus, TuiState};

pub use signup_core::messages::{INVALID_CREDENTIALS, LOGGED_OUT, LOGIN_FAILED, LOGIN_SUCCESS};

/// What to do with the login overlay after a login result.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOverlayAction {
    Close,
    ShowError(String),
}

/// Effect for the launch-time status check.
pub fn check_status(tui: &TuiState) -> UiEffect {
    UiEffect::CheckStatus {
        token: tui.session.token().map(str::to_string),
    }
}

/// Applies a status check result.
///
/// Results for a token the session no longer holds are stale and ignored.
pub fn handle_status_result(
    tui: &mut TuiState,
    token: Option<String>,
    result: Result<StatusResponse, ApiError>,
) -> Vec<UiEffect> {
    if tui.session.token() != token.as_deref() {
        tracing::debug!("ignoring stale status check");
        return vec![];
    }

    match result {
        Ok(status) => {
            let had_token = tui.session.token().is_some();
            tui.session.apply_status(&status);
            if status.authenticated {
                tracing::info!(user = tui.session.display_name(), "session restored");
                vec![]
            } else {
                leave_form(tui);
                if had_token {
                    tracing::info!("stored session rejected by server");
                    vec![UiEffect::ClearCookie]
                } else {
                    vec![]
                }
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "status check failed");
            tui.session.clear();
            leave_form(tui);
            vec![]
        }
    }
}

/// Applies a login result. Failures leave the session untouched.
pub fn handle_login_result(
    tui: &mut TuiState,
    result: Result<LoginResponse, ApiError>,
) -> (Vec<UiEffect>, LoginOverlayAction) {
    match result {
        Ok(login) => {
            tracing::info!(user = %login.username, "logged in");
            let cookie = SessionCookie::new(login.session_token.clone());
            tui.session = Session::logged_in(login.username, login.session_token);
            tui.show_login_notice(Notice::success(LOGIN_SUCCESS));
            (
                vec![UiEffect::StoreCookie { cookie }],
                LoginOverlayAction::Close,
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            let message = err.user_message(INVALID_CREDENTIALS, LOGIN_FAILED);
            (vec![], LoginOverlayAction::ShowError(message))
        }
    }
}

/// Starts a logout for the held token.
pub fn start_logout(tui: &TuiState) -> Vec<UiEffect> {
    vec![UiEffect::Logout {
        token: tui.session.token().map(str::to_string),
    }]
}

/// Finishes a logout. The session ends whether or not the server call worked.
pub fn handle_logout_result(tui: &mut TuiState, result: Result<(), ApiError>) -> Vec<UiEffect> {
    if let Err(err) = result {
        tracing::warn!(error = %err, "logout request failed");
    }
    tui.session.clear();
    leave_form(tui);
    tui.show_login_notice(Notice::success(LOGGED_OUT));
    vec![UiEffect::ClearCookie]
}

/// The signup form is hidden without a session.
fn leave_form(tui: &mut TuiState) {
    tui.focus = Focus::List;
}
