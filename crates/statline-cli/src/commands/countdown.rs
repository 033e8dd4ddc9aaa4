use std::time::Duration;

use statline_core::sources::countdown::{countdown_value, parse_target_date};
use statline_core::{
    push_stat, run_periodic, ApiError, DashboardClient, Schedule, UtcDateTime, DEFAULT_GROUP_NAME,
};
use tracing::info;

use crate::cli::{Cli, CountdownArgs};
use crate::error::CliError;
use crate::prompt;

use super::{client_config, shutdown_on_ctrl_c};

pub async fn run(cli: &Cli, args: &CountdownArgs) -> Result<(), CliError> {
    let raw_date = prompt::or_prompt(
        args.target_date.as_ref(),
        "Enter target date in month/day/year form:",
    )?;
    let target = parse_target_date(&raw_date)?;

    let title = prompt::or_prompt(args.title.as_ref(), "Enter stat title:")?;

    let config = client_config(cli)?;
    let client = DashboardClient::with_defaults(config);

    let push_once = || {
        let client = &client;
        let title = title.clone();
        async move {
            let today = UtcDateTime::now().date();
            let report =
                push_stat(client, DEFAULT_GROUP_NAME, &title, countdown_value(target, today))
                    .await?;
            info!(
                stat = %report.stat_id,
                outcome = ?report.stat_resolution,
                "countdown pushed"
            );
            Ok::<(), ApiError>(())
        }
    };

    // A single push surfaces its error; the periodic loop logs and retries
    // at the next tick instead.
    if cli.once {
        push_once().await?;
        return Ok(());
    }

    let schedule = Schedule::every(Duration::from_secs(args.every_hours * 3_600))?;
    let shutdown = shutdown_on_ctrl_c();
    let runs = run_periodic(schedule, shutdown, push_once).await;
    info!(runs, "countdown finished");
    Ok(())
}
