//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They carry everything the handler needs (including the session token),
//! so handlers never read UI state.

use signup_core::session::SessionCookie;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Ask the server whether the held token is still a valid session.
    CheckStatus { token: Option<String> },

    /// Submit credentials.
    Login { username: String, password: String },

    /// End the server-side session.
    Logout { token: Option<String> },

    /// Reload the activity catalog.
    FetchActivities,

    /// Register `email` for `activity`.
    Signup {
        activity: String,
        email: String,
        token: Option<String>,
    },

    /// Remove `email` from `activity`.
    Unregister {
        activity: String,
        email: String,
        token: Option<String>,
    },

    /// Persist the session cookie to the jar.
    StoreCookie { cookie: SessionCookie },

    /// Drop the stored session cookie.
    ClearCookie,
}
