//! CLI argument definitions for statline.
//!
//! One subcommand per push program plus the credential bootstrap. Inputs
//! the original console programs prompted for (target date, stat title) stay
//! optional positionals: when omitted, the command prompts on the console.

use clap::{Args, Parser, Subcommand};

/// Statline - push computed values to a stats dashboard
///
/// Each push resolves its group and stat by name, creating them on first
/// use and updating them afterwards.
#[derive(Debug, Parser)]
#[command(
    name = "statline",
    author,
    version,
    about = "Push computed values to a stats dashboard"
)]
pub struct Cli {
    /// Dashboard API base URL override.
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 30_000)]
    pub timeout_ms: u64,

    /// Push once and exit instead of repeating on a schedule.
    #[arg(long, global = true, default_value_t = false)]
    pub once: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Obtain API credentials via the verification-code handshake.
    ///
    /// Prints STATLINE_API_KEY and STATLINE_AUTH_TOKEN values to export.
    Login(LoginArgs),

    /// Push days-remaining-until-a-date as a number stat.
    ///
    /// Repeats daily unless --once is given.
    Countdown(CountdownArgs),

    /// Push current ask prices as a horizontal-bar stat.
    Stocks(StocksArgs),

    /// Push percent-of-current-season as a dialer stat.
    Season(SeasonArgs),
}

/// Arguments for the `login` command.
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Client name to register this machine under.
    pub client_name: String,

    /// Phone number in international format (e.g. +14155550100).
    pub phone_number: String,
}

/// Arguments for the `countdown` command.
#[derive(Debug, Args)]
pub struct CountdownArgs {
    /// Target date in month/day/year form. Prompted for when omitted.
    pub target_date: Option<String>,

    /// Stat title. Prompted for when omitted.
    pub title: Option<String>,

    /// Hours between pushes.
    #[arg(long, default_value_t = 24)]
    pub every_hours: u64,
}

/// Arguments for the `stocks` command.
#[derive(Debug, Args)]
pub struct StocksArgs {
    /// Stat title. Prompted for when omitted.
    pub title: Option<String>,

    /// Ticker to quote; repeat for several (default: AAPL, AMZN, GOOGL).
    #[arg(long = "symbol")]
    pub symbols: Vec<String>,

    /// Minutes between pushes.
    #[arg(long, default_value_t = 15)]
    pub every_minutes: u64,
}

/// Arguments for the `season` command.
#[derive(Debug, Args)]
pub struct SeasonArgs {
    /// Hemisphere the dashboard audience lives in: N or S.
    pub hemisphere: String,

    /// Hours between pushes.
    #[arg(long, default_value_t = 24)]
    pub every_hours: u64,
}
