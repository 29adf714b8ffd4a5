//! Status, login and logout commands.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::{Context, Result};
use signup_core::messages::{INVALID_CREDENTIALS, LOGGED_OUT, LOGIN_FAILED, LOGIN_SUCCESS};
use signup_core::session::SessionCookie;

use super::Remote;

pub async fn status(remote: &Remote) -> Result<()> {
    let session = remote.confirmed_session().await;
    if session.is_authenticated() {
        println!("Logged in as {}", session.display_name());
    } else {
        println!("Not logged in");
    }
    Ok(())
}

pub async fn login(remote: &Remote, username: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => read_password()?,
    };

    match remote.client.login(username, &password).await {
        Ok(response) => {
            let cookie = SessionCookie::new(response.session_token);
            remote.jar.store(&cookie).context("store session cookie")?;
            tracing::info!(username = %response.username, "logged in");
            println!("{LOGIN_SUCCESS}");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = %err, "login failed");
            anyhow::bail!("{}", err.user_message(INVALID_CREDENTIALS, LOGIN_FAILED))
        }
    }
}

/// Logs out on the server and always forgets the local cookie.
pub async fn logout(remote: &Remote) -> Result<()> {
    let token = remote.stored_token();

    if let Err(err) = remote.client.logout(token.as_deref()).await {
        tracing::warn!(error = %err, "logout request failed");
    }
    remote.jar.clear().context("clear session cookie")?;
    println!("{LOGGED_OUT}");
    Ok(())
}

/// Reads one line from stdin, prompting only when stdin is a terminal.
fn read_password() -> Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush().context("flush prompt")?;
    }

    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']);
    if password.is_empty() {
        anyhow::bail!("No password provided");
    }
    Ok(password.to_string())
}
