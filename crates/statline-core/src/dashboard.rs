//! Typed client for the remote dashboard REST surface.
//!
//! Five operations are consumed: list groups by name, create group, list
//! stats by group and title, create stat, update stat. The service owns
//! identity, persistence, and concurrency control; this client owns request
//! shaping, auth headers, retry, and response decoding.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ClientConfig;
use crate::domain::{Group, GroupDraft, GroupId, Stat, StatDraft, StatId, StatPatch};
use crate::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::ValidationError;

/// Classification of a failed remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Connection-level failure before a response arrived.
    Transport,
    /// Credentials were rejected (401/403).
    Auth,
    /// The request could not be built or was refused as malformed.
    InvalidRequest,
    /// The response arrived but did not have the expected shape.
    Shape,
    /// The service answered with a non-success status.
    Service,
}

/// Structured error for dashboard and quote-feed calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
    retryable: bool,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
            retryable: true,
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Auth,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::InvalidRequest,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn shape(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Shape,
            message: message.into(),
            retryable: false,
        }
    }

    pub fn service(status: u16, retryable: bool) -> Self {
        Self {
            kind: ApiErrorKind::Service,
            message: format!("service returned status {status}"),
            retryable,
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn retryable(&self) -> bool {
        self.retryable
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            ApiErrorKind::Transport => "api.transport",
            ApiErrorKind::Auth => "api.auth",
            ApiErrorKind::InvalidRequest => "api.invalid_request",
            ApiErrorKind::Shape => "api.shape",
            ApiErrorKind::Service => "api.service",
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for ApiError {}

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_request(error.to_string())
    }
}

/// List envelope for group lookups. `data` may be missing, null, or empty;
/// all three read back as "no match".
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GroupList {
    #[serde(default)]
    pub data: Option<Vec<Group>>,
}

/// List envelope for stat lookups.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatList {
    #[serde(default)]
    pub data: Option<Vec<Stat>>,
}

/// Dashboard API client. Holds an explicit [`ClientConfig`]; nothing here is
/// ambient or global.
pub struct DashboardClient {
    http: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl DashboardClient {
    pub fn new(http: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self { http, config }
    }

    /// Production client over reqwest.
    pub fn with_defaults(config: ClientConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn groups_by_name(&self, name: &str) -> Result<GroupList, ApiError> {
        let request = self.request(
            HttpMethod::Get,
            &format!("/groups?name={}", urlencoding::encode(name)),
        );
        let response = self.execute_with_retry(request).await?;
        decode(&response)
    }

    pub async fn create_group(&self, draft: &GroupDraft) -> Result<Group, ApiError> {
        let request = with_json_body(self.request(HttpMethod::Post, "/groups"), draft)?;
        let response = self.execute_with_retry(request).await?;
        decode(&response)
    }

    /// Stats are looked up by owning group name plus title, mirroring how
    /// they are keyed for humans. Neither is unique.
    pub async fn stats_by_title(&self, group_name: &str, title: &str) -> Result<StatList, ApiError> {
        let request = self.request(
            HttpMethod::Get,
            &format!(
                "/stats?groupName={}&title={}",
                urlencoding::encode(group_name),
                urlencoding::encode(title)
            ),
        );
        let response = self.execute_with_retry(request).await?;
        decode(&response)
    }

    pub async fn create_stat(
        &self,
        group_id: &GroupId,
        draft: &StatDraft,
    ) -> Result<Stat, ApiError> {
        let request = with_json_body(
            self.request(
                HttpMethod::Post,
                &format!("/groups/{}/stats", urlencoding::encode(group_id.as_str())),
            ),
            draft,
        )?;
        let response = self.execute_with_retry(request).await?;
        decode(&response)
    }

    pub async fn update_stat(
        &self,
        group_id: &GroupId,
        stat_id: &StatId,
        patch: &StatPatch,
    ) -> Result<Stat, ApiError> {
        let request = with_json_body(
            self.request(
                HttpMethod::Put,
                &format!(
                    "/groups/{}/stats/{}",
                    urlencoding::encode(group_id.as_str()),
                    urlencoding::encode(stat_id.as_str())
                ),
            ),
            patch,
        )?;
        let response = self.execute_with_retry(request).await?;
        decode(&response)
    }

    fn request(&self, method: HttpMethod, path_and_query: &str) -> HttpRequest {
        HttpRequest::new(method, format!("{}{path_and_query}", self.config.api_base))
            .with_header("x-api-key", &self.config.api_key)
            .with_header("x-auth-token", &self.config.auth_token)
            .with_header("x-request-id", Uuid::new_v4().to_string())
            .with_timeout_ms(self.config.timeout_ms)
    }

    /// Retry budget applies to retryable transport errors and transient
    /// statuses; auth and shape failures surface immediately.
    async fn execute_with_retry(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let retry = &self.config.retry;
        let mut attempt = 0u32;
        loop {
            match self.http.execute(request.clone()).await {
                Ok(response) if response.is_success() => return Ok(response),
                Ok(response) => {
                    let status = response.status;
                    if retry.should_retry_status(status) && attempt < retry.max_retries {
                        tokio::time::sleep(retry.delay_for_attempt(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(match status {
                        401 | 403 => {
                            ApiError::auth(format!("credentials rejected (status {status})"))
                        }
                        _ => ApiError::service(status, retry.should_retry_status(status)),
                    });
                }
                Err(error) => {
                    if error.retryable() && attempt < retry.max_retries {
                        tokio::time::sleep(retry.delay_for_attempt(attempt)).await;
                        attempt += 1;
                        continue;
                    }
                    return Err(ApiError::transport(error.message()));
                }
            }
        }
    }
}

fn with_json_body<T: Serialize>(
    request: HttpRequest,
    body: &T,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(body)
        .map_err(|error| ApiError::invalid_request(format!("unserializable body: {error}")))?;
    Ok(request
        .with_header("content-type", "application/json")
        .with_body(body))
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body)
        .map_err(|error| ApiError::shape(format!("unexpected response shape: {error}")))
}
