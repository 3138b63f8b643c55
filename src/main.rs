use carelink_app::{AppConfig, AppContext};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod cli;
mod commands;
mod render;
mod terminal;

use cli::Cli;
use commands::Shell;
use terminal::{TerminalConfirmer, TerminalNotifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::from_env().wrap_err("Failed to load configuration")?;

    init_logging(&config)?;
    debug!("Using API at {}", config.client.base_url);

    let ctx = AppContext::open(config).wrap_err("Failed to open local session storage")?;
    let shell = Shell {
        ctx: &ctx,
        notifier: &TerminalNotifier,
        confirmer: &TerminalConfirmer::new(cli.yes),
    };

    commands::run(cli.command, &shell).await
}

/// Logs go to stderr so command output stays clean. `LOG_FILTER` takes
/// precedence over `LOG_LEVEL`.
fn init_logging(config: &AppConfig) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    match &config.log_filter {
        Some(filter) => {
            let filter = EnvFilter::try_new(filter).wrap_err("Invalid LOG_FILTER value")?;
            tracing::subscriber::set_global_default(builder.with_env_filter(filter).finish())
                .wrap_err("Failed to set tracing subscriber")?;
        }
        None => {
            tracing::subscriber::set_global_default(
                builder.with_max_level(config.log_level).finish(),
            )
            .wrap_err("Failed to set tracing subscriber")?;
        }
    }
    Ok(())
}
