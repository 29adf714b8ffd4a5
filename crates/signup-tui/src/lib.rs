//! Full-screen TUI for the activity sign-up service.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::{Context, Result};
pub use features::{activities, auth, registration};
pub use runtime::TuiRuntime;
use signup_core::api::SignupClient;
use signup_core::config::Config;
use signup_core::cookie::CookieJar;
use signup_core::session::Session;

use crate::state::AppState;

/// Runs the interactive UI against `base_url`.
///
/// A stored, unexpired session cookie supplies the token for the launch-time
/// status check; the session only counts as logged in once that check
/// confirms it. An unreadable cookie jar is treated as no cookie.
///
/// # Errors
/// Returns an error if stdout is not a terminal or terminal I/O fails.
pub async fn run_interactive(config: &Config, base_url: &str, jar: CookieJar) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The interactive UI requires a terminal.\n\
             Use `signup activities` for non-interactive output."
        );
    }

    let client = SignupClient::new(base_url).context("Failed to create API client")?;
    let session = Session::from_cookie(jar.load_or_none().as_ref());
    tracing::info!(
        %base_url,
        restored_token = session.token().is_some(),
        "starting interactive UI"
    );

    let state = AppState::new(session, config.notices, base_url.to_string());
    let mut runtime = TuiRuntime::new(state, client, jar)?;
    runtime.run()
}
