//! Periodic push loop with explicit cadence and cancellation.
//!
//! The loop runs its task, then waits for either the interval to elapse or
//! the shutdown flag to flip. Task failures are logged and the next tick
//! proceeds; only the shutdown signal (or an exhausted run budget) stops
//! the loop.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tracing::warn;

use crate::ValidationError;

/// Cadence for a periodic task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    interval: Duration,
    max_runs: Option<u64>,
}

impl Schedule {
    /// Repeat forever at `interval`.
    pub fn every(interval: Duration) -> Result<Self, ValidationError> {
        if interval.is_zero() {
            return Err(ValidationError::ZeroInterval);
        }
        Ok(Self {
            interval,
            max_runs: None,
        })
    }

    /// Run exactly once.
    pub fn once() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_runs: Some(1),
        }
    }

    pub fn with_max_runs(mut self, max_runs: u64) -> Self {
        self.max_runs = Some(max_runs);
        self
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }
}

/// Fresh shutdown signal pair. Send `true` to stop a running loop.
pub fn shutdown_channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Run `task` on `schedule` until shutdown. Returns the number of completed
/// runs.
///
/// The shutdown flag is consulted before every run and while waiting out
/// the interval, so a stop request never triggers another push. A failing
/// run is logged at warn level and does not end the loop.
pub async fn run_periodic<F, Fut, E>(
    schedule: Schedule,
    mut shutdown: watch::Receiver<bool>,
    mut task: F,
) -> u64
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), E>>,
    E: std::fmt::Display,
{
    let mut runs = 0u64;
    loop {
        if *shutdown.borrow() {
            break;
        }

        if let Err(error) = task().await {
            warn!(%error, "push failed; waiting for next tick");
        }
        runs += 1;

        if let Some(max) = schedule.max_runs {
            if runs >= max {
                break;
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(schedule.interval) => {}
            changed = shutdown.changed() => {
                // A dropped sender counts as shutdown.
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
            }
        }
    }
    runs
}
