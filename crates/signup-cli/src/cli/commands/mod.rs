//! CLI command handlers.

pub mod activities;
pub mod auth;
pub mod config;
pub mod registration;
pub mod tui;

use anyhow::{Context as _, Result};
use signup_core::api::SignupClient;
use signup_core::cookie::CookieJar;
use signup_core::session::Session;

/// API client and cookie jar shared by the one-shot commands.
pub struct Remote {
    pub client: SignupClient,
    pub jar: CookieJar,
}

impl Remote {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = SignupClient::new(base_url).context("create API client")?;
        Ok(Self {
            client,
            jar: CookieJar::default_location(),
        })
    }

    /// Token from the stored cookie. An unreadable jar counts as none.
    pub fn stored_token(&self) -> Option<String> {
        self.jar.load_or_none().map(|cookie| cookie.value)
    }

    /// Session for the stored cookie as confirmed by `/auth/status`.
    ///
    /// Without a cookie no request is made. A failed check counts as logged
    /// out, and a cookie the server rejects is removed.
    pub async fn confirmed_session(&self) -> Session {
        let mut session = Session::from_cookie(self.jar.load_or_none().as_ref());
        let Some(token) = session.token.clone() else {
            return session;
        };

        match self.client.status(Some(&token)).await {
            Ok(status) => {
                session.apply_status(&status);
                if !session.is_authenticated() {
                    tracing::info!("stored session rejected by server");
                    if let Err(err) = self.jar.clear() {
                        tracing::warn!(
                            error = format!("{err:#}"),
                            "failed to clear session cookie"
                        );
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "status check failed");
                session.clear();
            }
        }
        session
    }
}
