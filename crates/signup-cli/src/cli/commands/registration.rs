//! Signup and unregister commands.
//!
//! Both are teacher-only. Without a stored session cookie, or when the server
//! does not confirm it, they fail with the guard message and no registration
//! request is made.

use anyhow::Result;
use signup_core::api::{ApiError, MessageResponse};
use signup_core::messages::{
    SERVER_FALLBACK, SIGNUP_FAILED, SIGNUP_GUARD, UNREGISTER_FAILED, UNREGISTER_GUARD,
};

use super::Remote;

pub async fn signup(remote: &Remote, activity: &str, email: &str) -> Result<()> {
    let session = remote.confirmed_session().await;
    let Some(token) = session.token().filter(|_| session.is_authenticated()) else {
        anyhow::bail!(SIGNUP_GUARD);
    };

    let result = remote.client.signup(activity, email, Some(token)).await;
    report(result, SIGNUP_FAILED)
}

pub async fn unregister(remote: &Remote, activity: &str, email: &str) -> Result<()> {
    let session = remote.confirmed_session().await;
    let Some(token) = session.token().filter(|_| session.is_authenticated()) else {
        anyhow::bail!(UNREGISTER_GUARD);
    };

    let result = remote.client.unregister(activity, email, Some(token)).await;
    report(result, UNREGISTER_FAILED)
}

fn report(result: Result<MessageResponse, ApiError>, transport_fallback: &str) -> Result<()> {
    match result {
        Ok(response) => {
            println!("{}", response.message);
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "registration request failed");
            anyhow::bail!("{}", err.user_message(SERVER_FALLBACK, transport_fallback))
        }
    }
}
