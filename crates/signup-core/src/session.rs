//! Client-held authentication state.
//!
//! A `Session` lives for one run of the client. It starts unauthenticated,
//! even when a stored cookie supplies a token, becomes authenticated on a
//! successful login or a positive status check and returns to unauthenticated
//! on logout. The only persistence is
//! the `session_token` cookie, see [`SessionCookie`] and [`crate::cookie`].

use crate::api::StatusResponse;

/// Authentication state for the current client run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub authenticated: bool,
    pub username: Option<String>,
    pub token: Option<String>,
}

impl Session {
    /// Session after a successful login.
    pub fn logged_in(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            authenticated: true,
            username: Some(username.into()),
            token: Some(token.into()),
        }
    }

    /// Session restored from a stored cookie.
    ///
    /// Holds the token but stays unauthenticated until a status check
    /// confirms it, see [`Self::apply_status`].
    pub fn from_cookie(cookie: Option<&SessionCookie>) -> Self {
        match cookie {
            Some(cookie) if !cookie.value.is_empty() => Self {
                authenticated: false,
                username: None,
                token: Some(cookie.value.clone()),
            },
            _ => Self::default(),
        }
    }

    /// Applies an `/auth/status` response.
    ///
    /// The token is kept so later credentialed calls still send the cookie.
    pub fn apply_status(&mut self, status: &StatusResponse) {
        if status.authenticated {
            self.authenticated = true;
            self.username = status.username.clone();
        } else {
            self.clear();
        }
    }

    /// Drops all authentication state.
    pub fn clear(&mut self) {
        self.authenticated = false;
        self.username = None;
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Name shown in the header, if the server told us who we are.
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or("teacher")
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// The `session_token` cookie mirrored from the login response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub value: String,
    pub path: String,
    pub max_age: u64,
}

impl SessionCookie {
    pub const NAME: &'static str = "session_token";
    /// 24 hours.
    pub const MAX_AGE_SECS: u64 = 86_400;

    /// Cookie set after login.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            path: "/".to_string(),
            max_age: Self::MAX_AGE_SECS,
        }
    }

    /// Cookie that clears the stored one (empty value, `Max-Age=0`).
    pub fn expired() -> Self {
        Self {
            value: String::new(),
            path: "/".to_string(),
            max_age: 0,
        }
    }

    pub fn is_removal(&self) -> bool {
        self.max_age == 0
    }

    /// Value for the `Cookie` request header.
    pub fn request_header(token: &str) -> String {
        format!("{}={token}", Self::NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.username, None);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_login_then_logout_round_trip() {
        let mut session = Session::logged_in("mrodriguez", "tok-1");
        assert!(session.is_authenticated());
        assert_eq!(session.display_name(), "mrodriguez");
        assert_eq!(session.token(), Some("tok-1"));

        session.clear();
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_apply_status_authenticated_keeps_token() {
        let mut session = Session::from_cookie(Some(&SessionCookie::new("tok-2")));
        session.apply_status(&StatusResponse {
            authenticated: true,
            username: Some("jchen".to_string()),
        });
        assert!(session.is_authenticated());
        assert_eq!(session.username.as_deref(), Some("jchen"));
        assert_eq!(session.token(), Some("tok-2"));
    }

    #[test]
    fn test_apply_status_unauthenticated_clears() {
        let mut session = Session::logged_in("jchen", "tok-3");
        session.apply_status(&StatusResponse {
            authenticated: false,
            username: None,
        });
        assert_eq!(session, Session::default());
    }

    #[test]
    fn test_from_cookie_ignores_empty_value() {
        assert_eq!(
            Session::from_cookie(Some(&SessionCookie::expired())),
            Session::default()
        );
        assert_eq!(Session::from_cookie(None), Session::default());
    }

    #[test]
    fn test_restored_cookie_is_unconfirmed() {
        let session = Session::from_cookie(Some(&SessionCookie::new("maybe-stale")));
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), Some("maybe-stale"));
        assert_eq!(session.username, None);
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = SessionCookie::new("abc");
        assert_eq!(cookie.path, "/");
        assert_eq!(cookie.max_age, 86_400);
        assert!(!cookie.is_removal());
        assert!(SessionCookie::expired().is_removal());
        assert_eq!(SessionCookie::request_header("abc"), "session_token=abc");
    }
}
