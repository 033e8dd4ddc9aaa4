//! # Statline Core
//!
//! Client library for pushing computed values into a remote
//! statistics-dashboard service.
//!
//! ## Overview
//!
//! The dashboard organizes content as groups owning stats; both are
//! remote-owned, create-once/update-many resources looked up by
//! human-readable keys that are not guaranteed unique. The library's center
//! of gravity is the idempotent find-or-create resolver in [`resolver`],
//! applied twice per push: first to the group, then to the stat within it.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | Credential bootstrap (verification-code handshake) |
//! | [`config`] | Explicit per-run client configuration |
//! | [`dashboard`] | Typed dashboard REST client with retry |
//! | [`domain`] | Group/stat domain model and value payloads |
//! | [`error`] | Validation and core error types |
//! | [`http`] | Transport trait with reqwest and no-op implementations |
//! | [`resolver`] | Find-or-create resolution and the push pipeline |
//! | [`retry`] | Backoff and retry budget |
//! | [`scheduler`] | Periodic push loop with cancellation |
//! | [`sources`] | Value sources: countdown, stock quotes, season |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use statline_core::{ClientConfig, DashboardClient, StatValue};
//! use statline_core::resolver::{push_stat, DEFAULT_GROUP_NAME};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::from_env()?;
//!     let client = DashboardClient::with_defaults(config);
//!
//!     let report = push_stat(
//!         &client,
//!         DEFAULT_GROUP_NAME,
//!         "Days until launch",
//!         StatValue::number("42"),
//!     )
//!     .await?;
//!
//!     println!("pushed stat {} ({:?})", report.stat_id, report.stat_resolution);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Remote calls return [`ApiError`] carrying a kind (transport, auth,
//! invalid request, shape, service) and a retryable flag; input problems
//! surface as [`ValidationError`] before any call is made. Retry with
//! backoff is applied inside the dashboard client, so callers see either a
//! final success or a final, classified failure.

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod http;
pub mod resolver;
pub mod retry;
pub mod scheduler;
pub mod sources;

// Re-export commonly used types at crate root for convenience

pub use auth::{AuthClient, UserCredential};
pub use config::{ClientConfig, ConfigError, DEFAULT_API_BASE};
pub use dashboard::{ApiError, ApiErrorKind, DashboardClient, GroupList, StatList};
pub use domain::{
    BarColor, BarItem, Group, GroupDraft, GroupId, Stat, StatDraft, StatId, StatPatch, StatValue,
    UtcDateTime, VisualType,
};
pub use error::{CoreError, ValidationError};
pub use http::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, NoopHttpClient,
    ReqwestHttpClient,
};
pub use resolver::{
    push_stat, resolve_group, resolve_or_create, PushReport, Resolution, Resolved,
    DEFAULT_GROUP_NAME,
};
pub use retry::{Backoff, RetryConfig};
pub use scheduler::{run_periodic, shutdown_channel, Schedule};
pub use sources::season::Hemisphere;
pub use sources::stocks::{QuoteFeed, DEFAULT_QUOTE_ENDPOINT, DEFAULT_SYMBOLS};
