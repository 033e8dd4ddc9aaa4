use thiserror::Error;

use crate::retry::RetryConfig;

/// Default dashboard REST endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.statline.dev/v1";

const ENV_API_KEY: &str = "STATLINE_API_KEY";
const ENV_AUTH_TOKEN: &str = "STATLINE_AUTH_TOKEN";
const ENV_API_BASE: &str = "STATLINE_API_BASE";

/// Configuration error raised when the environment is incomplete.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set; run `statline login` to obtain credentials")]
    MissingVar(&'static str),
}

/// Client configuration, constructed once per run and passed explicitly to
/// each collaborator. Credentials are never logged.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: String,
    pub api_key: String,
    pub auth_token: String,
    pub timeout_ms: u64,
    pub retry: RetryConfig,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            api_base: String::from(DEFAULT_API_BASE),
            api_key: api_key.into(),
            auth_token: auth_token.into(),
            timeout_ms: 30_000,
            retry: RetryConfig::default(),
        }
    }

    /// Read credentials (and an optional base-URL override) from the
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(ENV_API_KEY).map_err(|_| ConfigError::MissingVar(ENV_API_KEY))?;
        let auth_token =
            std::env::var(ENV_AUTH_TOKEN).map_err(|_| ConfigError::MissingVar(ENV_AUTH_TOKEN))?;

        let mut config = Self::new(api_key, auth_token);
        if let Ok(base) = std::env::var(ENV_API_BASE) {
            config.api_base = base;
        }
        Ok(config)
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}
