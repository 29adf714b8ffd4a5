//! Interactive UI launcher.

use anyhow::Result;
use signup_core::config::Config;

#[cfg(feature = "tui")]
pub async fn run(config: &Config, base_url: &str) -> Result<()> {
    use signup_core::config::paths;
    use signup_core::cookie::CookieJar;

    // stdout belongs to the screen, so logs go to a file
    let _log_guard = signup_core::logging::init_file(&paths::logs_dir(), "info")?;
    signup_tui::run_interactive(config, base_url, CookieJar::default_location()).await
}

#[cfg(not(feature = "tui"))]
#[allow(clippy::unused_async)]
pub async fn run(_config: &Config, _base_url: &str) -> Result<()> {
    anyhow::bail!("This build has no interactive UI. Run `signup --help` for commands.")
}
