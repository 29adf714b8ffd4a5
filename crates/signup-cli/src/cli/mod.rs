//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use signup_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "signup")]
#[command(version)]
#[command(about = "Terminal client for the school activity sign-up service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the sign-up service (overrides SIGNUP_BASE_URL and config)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Show whether the stored session is still logged in
    Status,

    /// Log in as a teacher and store the session cookie
    Login {
        /// Teacher username
        #[arg(long, short = 'u')]
        username: String,

        /// Password (read from stdin when omitted)
        #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log out and forget the stored session cookie
    Logout,

    /// List activities with availability and participants
    Activities,

    /// Register a student for an activity (teachers only)
    Signup {
        /// Student email
        #[arg(long)]
        email: String,

        /// Activity name, as listed by `signup activities`
        #[arg(long)]
        activity: String,
    },

    /// Remove a student from an activity (teachers only)
    Unregister {
        /// Student email
        #[arg(long)]
        email: String,

        /// Activity name, as listed by `signup activities`
        #[arg(long)]
        activity: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Create a default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;
    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, base_url } = cli;
    let flag = base_url.as_deref();

    // default to the interactive UI
    let Some(command) = command else {
        let config = config::Config::load().context("load config")?;
        let base_url = config.resolve_base_url(flag)?;
        return commands::tui::run(&config, &base_url).await;
    };

    signup_core::logging::init_stderr("warn");

    match command {
        Commands::Status => commands::auth::status(&connect(flag)?).await,
        Commands::Login { username, password } => {
            commands::auth::login(&connect(flag)?, &username, password).await
        }
        Commands::Logout => commands::auth::logout(&connect(flag)?).await,
        Commands::Activities => commands::activities::list(&connect(flag)?).await,
        Commands::Signup { email, activity } => {
            commands::registration::signup(&connect(flag)?, &activity, &email).await
        }
        Commands::Unregister { email, activity } => {
            commands::registration::unregister(&connect(flag)?, &activity, &email).await
        }

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

/// Loads config and builds the client context for one-shot commands.
fn connect(flag: Option<&str>) -> Result<commands::Remote> {
    let config = config::Config::load().context("load config")?;
    let base_url = config.resolve_base_url(flag)?;
    commands::Remote::new(&base_url)
}
