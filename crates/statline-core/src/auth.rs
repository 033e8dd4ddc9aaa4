//! Credential bootstrap for the dashboard API.
//!
//! Obtaining credentials is a two-step handshake: request a verification
//! code for a named client, then exchange the code (read off the user's
//! primary device) for an API key and auth token.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_API_BASE;
use crate::dashboard::ApiError;
use crate::http::{HttpClient, HttpRequest};

/// Credentials returned by the verification handshake. Callers are expected
/// to store these; the service will not show them again.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCredential {
    pub api_key: String,
    pub auth_token: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginRequest<'a> {
    client_name: &'a str,
    phone_number: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    client_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerificationRequest<'a> {
    client_id: &'a str,
    phone_number: &'a str,
    verification_code: &'a str,
}

/// Unauthenticated client for the login/verify endpoints.
pub struct AuthClient {
    http: Arc<dyn HttpClient>,
    api_base: String,
    timeout_ms: u64,
}

impl AuthClient {
    pub fn new(http: Arc<dyn HttpClient>, api_base: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            http,
            api_base: api_base.into(),
            timeout_ms,
        }
    }

    pub fn with_defaults(http: Arc<dyn HttpClient>) -> Self {
        Self::new(http, DEFAULT_API_BASE, 30_000)
    }

    /// Ask the service to push a verification code to the user's primary
    /// device. Returns the client id to quote back in [`verify_code`].
    ///
    /// [`verify_code`]: AuthClient::verify_code
    pub async fn request_code(
        &self,
        client_name: &str,
        phone_number: &str,
    ) -> Result<String, ApiError> {
        let body = LoginRequest {
            client_name,
            phone_number,
        };
        let response: LoginResponse = self.post("/auth/login", &body).await?;
        Ok(response.client_id)
    }

    /// Exchange a verification code for durable credentials.
    pub async fn verify_code(
        &self,
        client_id: &str,
        phone_number: &str,
        verification_code: &str,
    ) -> Result<UserCredential, ApiError> {
        let body = VerificationRequest {
            client_id,
            phone_number,
            verification_code,
        };
        self.post("/auth/verify", &body).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: serde::de::DeserializeOwned,
    {
        let body = serde_json::to_string(body)
            .map_err(|error| ApiError::invalid_request(format!("unserializable body: {error}")))?;
        let request = HttpRequest::post(format!("{}{path}", self.api_base))
            .with_header("content-type", "application/json")
            .with_timeout_ms(self.timeout_ms)
            .with_body(body);

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| ApiError::transport(error.message()))?;

        if response.status == 401 || response.status == 403 {
            return Err(ApiError::auth(format!(
                "verification rejected (status {})",
                response.status
            )));
        }
        if !response.is_success() {
            return Err(ApiError::service(response.status, false));
        }

        serde_json::from_str(&response.body)
            .map_err(|error| ApiError::shape(format!("unexpected response shape: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_deserializes_camel_case_fields() {
        let credential: UserCredential =
            serde_json::from_str(r#"{"apiKey":"k1","authToken":"t1"}"#).expect("must deserialize");
        assert_eq!(credential.api_key, "k1");
        assert_eq!(credential.auth_token, "t1");
    }
}
