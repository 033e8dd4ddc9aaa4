use std::sync::Arc;
use std::time::Duration;

use statline_core::{
    push_stat, run_periodic, ApiError, DashboardClient, QuoteFeed, ReqwestHttpClient, Schedule,
    DEFAULT_GROUP_NAME, DEFAULT_SYMBOLS,
};
use tracing::info;

use crate::cli::{Cli, StocksArgs};
use crate::error::CliError;
use crate::prompt;

use super::{client_config, shutdown_on_ctrl_c};

pub async fn run(cli: &Cli, args: &StocksArgs) -> Result<(), CliError> {
    let title = prompt::or_prompt(args.title.as_ref(), "Enter stat title:")?;

    let symbols: Vec<String> = if args.symbols.is_empty() {
        DEFAULT_SYMBOLS.iter().map(|s| String::from(*s)).collect()
    } else {
        args.symbols.clone()
    };

    let config = client_config(cli)?;
    let http = Arc::new(ReqwestHttpClient::new());
    let feed = QuoteFeed::with_defaults(http.clone());
    let client = DashboardClient::new(http, config);

    let push_once = || {
        let client = &client;
        let feed = &feed;
        let symbols = symbols.clone();
        let title = title.clone();
        async move {
            let value = feed.stat_value(&symbols).await?;
            let report = push_stat(client, DEFAULT_GROUP_NAME, &title, value).await?;
            info!(
                stat = %report.stat_id,
                outcome = ?report.stat_resolution,
                quotes = symbols.len(),
                "stock bars pushed"
            );
            Ok::<(), ApiError>(())
        }
    };

    if cli.once {
        push_once().await?;
        return Ok(());
    }

    let schedule = Schedule::every(Duration::from_secs(args.every_minutes * 60))?;
    let shutdown = shutdown_on_ctrl_c();
    let runs = run_periodic(schedule, shutdown, push_once).await;
    info!(runs, "stocks finished");
    Ok(())
}
