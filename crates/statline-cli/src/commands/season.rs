use std::time::Duration;

use statline_core::sources::season::{season_title, season_value};
use statline_core::{
    push_stat, run_periodic, ApiError, DashboardClient, Hemisphere, Schedule, UtcDateTime,
    DEFAULT_GROUP_NAME,
};
use tracing::info;

use crate::cli::{Cli, SeasonArgs};
use crate::error::CliError;

use super::{client_config, shutdown_on_ctrl_c};

pub async fn run(cli: &Cli, args: &SeasonArgs) -> Result<(), CliError> {
    let hemisphere = Hemisphere::parse(&args.hemisphere)?;

    let config = client_config(cli)?;
    let client = DashboardClient::with_defaults(config);

    // The title tracks the season in effect, so both title and value are
    // recomputed each tick.
    let push_once = || {
        let client = &client;
        async move {
            let today = UtcDateTime::now().date();
            let title = season_title(today, hemisphere);
            let report =
                push_stat(client, DEFAULT_GROUP_NAME, &title, season_value(today)).await?;
            info!(
                stat = %report.stat_id,
                title = %report.title,
                outcome = ?report.stat_resolution,
                "season progress pushed"
            );
            Ok::<(), ApiError>(())
        }
    };

    if cli.once {
        push_once().await?;
        return Ok(());
    }

    let schedule = Schedule::every(Duration::from_secs(args.every_hours * 3_600))?;
    let shutdown = shutdown_on_ctrl_c();
    let runs = run_periodic(schedule, shutdown, push_once).await;
    info!(runs, "season finished");
    Ok(())
}
