//! Generic authenticated dispatcher.
//!
//! One dispatcher instance serves one backend endpoint under one header
//! scheme. Every domain action is a single POST: the dispatcher checks the
//! session, attaches the auth header, sends the payload as JSON, and maps
//! transport and HTTP failures onto [`DispatchError`]. Single attempt per
//! call; no retries, no batching, no timeout beyond the client default.

use crate::config::ServiceEndpoint;
use crate::error::{DispatchError, DispatchResult};
use fleet_session::SessionManager;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use uuid::Uuid;

/// Login endpoint path on the backend.
pub const LOGIN_PATH: &str = "/api/auth/login";

/// How the session token is attached to outbound requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthScheme {
    /// `Authorization: Bearer <token>` (default).
    #[default]
    Bearer,

    /// `X-Admin-Token: <token>`, for static-admin-token deployments.
    AdminToken,
}

impl AuthScheme {
    /// Attach the token to a request under this scheme.
    fn apply(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        match self {
            AuthScheme::Bearer => request.header("Authorization", format!("Bearer {}", token)),
            AuthScheme::AdminToken => request.header("X-Admin-Token", token),
        }
    }
}

/// Request body for the login round trip.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    password: &'a str,
}

/// Response body from a successful login.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
}

/// Error body shape the backend uses for non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Authenticated request dispatcher for one backend endpoint.
#[derive(Clone)]
pub struct Dispatcher {
    /// HTTP client instance.
    client: Client,

    /// Backend endpoint configuration.
    endpoint: ServiceEndpoint,

    /// Header scheme for attaching the session token.
    scheme: AuthScheme,
}

impl Dispatcher {
    /// Create a dispatcher using the default Bearer scheme.
    pub fn new(endpoint: ServiceEndpoint, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            endpoint,
            scheme: AuthScheme::default(),
        }
    }

    /// Override the header scheme.
    pub fn with_scheme(mut self, scheme: AuthScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Authenticate against the backend's login endpoint.
    ///
    /// On success the issued token is installed into the session with a
    /// fresh TTL. Returns false on any failure; never errors. The password
    /// is never logged.
    #[instrument(skip_all)]
    pub async fn authenticate(&self, session: &mut SessionManager, password: &str) -> bool {
        let url = self.endpoint.url(LOGIN_PATH);
        debug!(%url, "starting login request");

        let response = match self
            .client
            .post(&url)
            .json(&LoginRequest { password })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "login request failed");
                return false;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "login rejected");
            return false;
        }

        match response.json::<LoginResponse>().await {
            Ok(body) => {
                session.install_token(body.access_token);
                debug!(expires_at = ?session.expires_at(), "login succeeded");
                true
            }
            Err(e) => {
                error!(error = %e, "login response could not be parsed");
                false
            }
        }
    }

    /// Issue one authenticated POST and parse the JSON response.
    ///
    /// Preconditions are checked in order: an absent session fails with
    /// [`DispatchError::NotAuthenticated`], and an out-of-TTL session is
    /// logged out and fails with [`DispatchError::SessionExpired`], both
    /// without touching the network. A 401 from the server also logs the
    /// session out. On success the parsed body is returned to the caller
    /// verbatim.
    #[instrument(skip(self, session, payload))]
    pub async fn dispatch<P, T>(
        &self,
        session: &mut SessionManager,
        path: &str,
        payload: &P,
    ) -> DispatchResult<T>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        if !session.is_authenticated() {
            return Err(DispatchError::NotAuthenticated);
        }
        let token = match session.token() {
            Some(token) => token.to_owned(),
            None => return Err(DispatchError::NotAuthenticated),
        };

        if !session.is_valid() {
            warn!("session past its TTL, logging out");
            session.logout();
            return Err(DispatchError::SessionExpired);
        }

        let request_id = Uuid::now_v7();
        let url = self.endpoint.url(path);
        debug!(%request_id, %url, "dispatching authenticated request");

        let request = self
            .scheme
            .apply(self.client.post(&url).json(payload), &token);
        let response = request.send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            warn!(%request_id, "server rejected the session token, logging out");
            session.logout();
            return Err(DispatchError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = extract_detail(&body);
            warn!(%request_id, status = status.as_u16(), %message, "API error");
            return Err(DispatchError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| DispatchError::InvalidResponse(e.to_string()))
    }
}

/// Pull the human-readable message out of an error body.
///
/// The backend wraps failures as `{"detail": "..."}`; fall back to the raw
/// body, then to a generic message.
fn extract_detail(body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(body) {
        if let Some(detail) = parsed.detail {
            return detail;
        }
    }
    if body.is_empty() {
        "Unknown error".to_string()
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_from_json_body() {
        assert_eq!(
            extract_detail(r#"{"detail":"repository not configured"}"#),
            "repository not configured"
        );
    }

    #[test]
    fn test_extract_detail_falls_back_to_raw_body() {
        assert_eq!(extract_detail("gateway timeout"), "gateway timeout");
        assert_eq!(extract_detail(r#"{"error":"other shape"}"#), r#"{"error":"other shape"}"#);
    }

    #[test]
    fn test_extract_detail_empty_body() {
        assert_eq!(extract_detail(""), "Unknown error");
    }

    #[test]
    fn test_default_scheme_is_bearer() {
        assert_eq!(AuthScheme::default(), AuthScheme::Bearer);
    }
}
