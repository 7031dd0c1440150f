//! Authenticated JSON client for the Spine.AI backend.
//!
//! # Design
//! `ApiClient` holds the immutable config plus shared handles to a
//! `SessionProvider` and a `Transport`; it carries no other state between
//! calls. Every verb runs the same linear sequence: await the session, build
//! the request, await the transport, parse the response. `build_request` and
//! `parse_response` are pure so the I/O boundary stays explicit.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::session::SessionProvider;
use crate::types::{DashboardData, HealthStatus, UserProfile, DASHBOARD_ENDPOINT, HEALTH_ENDPOINT, PROFILE_ENDPOINT};

/// Client for the Spine.AI backend.
///
/// Construct once at the application entry point and share by reference.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    sessions: Arc<dyn SessionProvider>,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ClientConfig, sessions: Arc<dyn SessionProvider>, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            sessions,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn sessions(&self) -> &Arc<dyn SessionProvider> {
        &self.sessions
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.send(HttpMethod::Get, endpoint, None).await
    }

    pub async fn post<B, T>(&self, endpoint: &str, data: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(data)?;
        self.send(HttpMethod::Post, endpoint, Some(body)).await
    }

    pub async fn put<B, T>(&self, endpoint: &str, data: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = encode_body(data)?;
        self.send(HttpMethod::Put, endpoint, Some(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.send(HttpMethod::Delete, endpoint, None).await
    }

    pub async fn dashboard(&self) -> Result<DashboardData, ApiError> {
        self.get(DASHBOARD_ENDPOINT).await
    }

    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.get(PROFILE_ENDPOINT).await
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get(HEALTH_ENDPOINT).await
    }

    /// Build the request for `method` + `endpoint` authenticated with `token`.
    ///
    /// The endpoint is appended to the base URL as-is.
    pub fn build_request(&self, method: HttpMethod, endpoint: &str, token: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}{}", self.config.base_url, endpoint),
            headers: vec![
                ("Authorization".to_string(), format!("Bearer {token}")),
                ("Content-Type".to_string(), "application/json".to_string()),
            ],
            body,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let token = match self.sessions.get_session().await {
            Some(session) if !session.access_token.is_empty() => session.access_token,
            _ => {
                tracing::debug!(%method, endpoint, "no active session, request not sent");
                return Err(ApiError::NoSession);
            }
        };

        let request = self.build_request(method, endpoint, &token, body);
        tracing::debug!(%method, url = %request.url, "sending API request");

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%method, endpoint, error = %e, "API request failed");
                return Err(e);
            }
        };

        parse_response(response).inspect_err(|e| {
            tracing::warn!(%method, endpoint, error = %e, "API call unsuccessful");
        })
    }
}

/// Map a raw response to the decoded body or the matching `ApiError`.
///
/// A non-2xx status short-circuits before the body is looked at.
pub fn parse_response<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::Http {
            status: response.status,
            status_text: response.status_text,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode_body<B: Serialize + ?Sized>(data: &B) -> Result<String, ApiError> {
    serde_json::to_string(data).map_err(|e| ApiError::Encode(e.to_string()))
}

/// Convenience alias for untyped JSON results.
pub type JsonResult = Result<Value, ApiError>;
