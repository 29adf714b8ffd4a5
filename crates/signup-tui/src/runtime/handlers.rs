//! Effect handlers for the TUI runtime.
//!
//! Network handlers are async functions that return the `UiEvent` carrying
//! their result; the runtime spawns them and forwards the event to the inbox.
//! Cookie handlers are synchronous file writes.

use signup_core::api::SignupClient;
use signup_core::cookie::CookieJar;
use signup_core::session::SessionCookie;

use crate::events::UiEvent;

pub async fn check_status(client: SignupClient, token: Option<String>) -> UiEvent {
    let result = client.status(token.as_deref()).await;
    UiEvent::StatusChecked { token, result }
}

pub async fn login(client: SignupClient, username: String, password: String) -> UiEvent {
    UiEvent::LoginFinished(client.login(&username, &password).await)
}

pub async fn logout(client: SignupClient, token: Option<String>) -> UiEvent {
    UiEvent::LogoutFinished(client.logout(token.as_deref()).await)
}

pub async fn fetch_activities(client: SignupClient) -> UiEvent {
    UiEvent::ActivitiesLoaded(client.activities().await)
}

pub async fn signup(
    client: SignupClient,
    activity: String,
    email: String,
    token: Option<String>,
) -> UiEvent {
    UiEvent::SignupFinished(client.signup(&activity, &email, token.as_deref()).await)
}

pub async fn unregister(
    client: SignupClient,
    activity: String,
    email: String,
    token: Option<String>,
) -> UiEvent {
    UiEvent::UnregisterFinished(client.unregister(&activity, &email, token.as_deref()).await)
}

/// Persists the session cookie. Failures only cost persistence across runs.
pub fn store_cookie(jar: &CookieJar, cookie: &SessionCookie) {
    if let Err(err) = jar.store(cookie) {
        tracing::warn!(error = format!("{err:#}"), "failed to store session cookie");
    }
}

pub fn clear_cookie(jar: &CookieJar) {
    if let Err(err) = jar.clear() {
        tracing::warn!(error = format!("{err:#}"), "failed to clear session cookie");
    }
}
