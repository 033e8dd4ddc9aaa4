mod countdown;
mod login;
mod season;
mod stocks;

use statline_core::{shutdown_channel, ClientConfig};
use tokio::sync::watch;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Login(args) => login::run(cli, args).await,
        Command::Countdown(args) => countdown::run(cli, args).await,
        Command::Stocks(args) => stocks::run(cli, args).await,
        Command::Season(args) => season::run(cli, args).await,
    }
}

/// Environment-derived config with command-line overrides applied.
pub(crate) fn client_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_env()?.with_timeout_ms(cli.timeout_ms);
    if let Some(base) = &cli.api_base {
        config = config.with_api_base(base);
    }
    Ok(config)
}

/// Shutdown signal wired to Ctrl-C, so periodic pushes stop cleanly.
pub(crate) fn shutdown_on_ctrl_c() -> watch::Receiver<bool> {
    let (tx, rx) = shutdown_channel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = tx.send(true);
        }
    });
    rx
}
